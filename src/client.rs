use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::backend::{VideoBackend, VIDEO_LIST_PATH};
use crate::config::BackendConfig;
use crate::error::{ListError, Result};
use crate::models::{ListEnvelope, ListPage, PageSelection};
use crate::session::{TokenStore, ACCESS_TOKEN_HEADER};

/// REST client for the video streaming API
pub struct HttpVideoBackend {
    base_url: Url,
    client: reqwest::Client,
    tokens: Arc<dyn TokenStore>,
}

impl HttpVideoBackend {
    pub fn new(config: &BackendConfig, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        Ok(Self {
            base_url,
            client,
            tokens,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full listing URL for one page, e.g. `/api/v1/video?limit=10&page=2`
    pub fn list_url(&self, selection: PageSelection) -> Result<Url> {
        let mut url = self.base_url.join(VIDEO_LIST_PATH)?;
        url.query_pairs_mut()
            .append_pair("limit", &selection.limit().to_string())
            .append_pair("page", &selection.page().to_string());
        Ok(url)
    }
}

/// `join` drops the last path segment unless the base ends with a slash.
fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ListError::Configuration("backend base_url is empty".to_string()));
    }

    let mut url = Url::parse(trimmed)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[async_trait]
impl VideoBackend for HttpVideoBackend {
    async fn list_videos(&self, selection: PageSelection) -> Result<ListPage> {
        let url = self.list_url(selection)?;
        debug!("Requesting video list from {}", url);

        let mut request = self.client.get(url);
        match self.tokens.access_token() {
            Some(token) => request = request.header(ACCESS_TOKEN_HEADER, token),
            None => debug!("No access token available, sending anonymous request"),
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Video list request failed with {}", status);
            return Err(ListError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: ListEnvelope = serde_json::from_str(&body)?;
        let page = ListPage::from(envelope);
        page.check_page_count(selection.limit())?;

        info!(
            "📥 Received {} videos ({} total) for {}",
            page.items.len(),
            page.total_count,
            selection
        );
        Ok(page)
    }

    fn backend_name(&self) -> &str {
        "http"
    }
}
