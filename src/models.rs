use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ListError, Result};

/// A `(limit, page)` pair as chosen in the list controls.
///
/// Both values are 1-based and strictly positive; use [`PageSelection::new`]
/// to build one from untrusted input. Deserializing goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSelection")]
pub struct PageSelection {
    limit: u32,
    page: u32,
}

impl PageSelection {
    pub fn new(limit: u32, page: u32) -> Result<Self> {
        Ok(Self {
            limit: validate_positive("limit", limit)?,
            page: validate_positive("page", page)?,
        })
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Same page, different limit.
    pub fn with_limit(self, limit: u32) -> Result<Self> {
        Self::new(limit, self.page)
    }

    /// Same limit, different page.
    pub fn with_page(self, page: u32) -> Result<Self> {
        Self::new(self.limit, page)
    }
}

#[derive(Deserialize)]
struct RawSelection {
    limit: u32,
    page: u32,
}

impl TryFrom<RawSelection> for PageSelection {
    type Error = ListError;

    fn try_from(raw: RawSelection) -> Result<Self> {
        Self::new(raw.limit, raw.page)
    }
}

impl Default for PageSelection {
    fn default() -> Self {
        Self { limit: 10, page: 1 }
    }
}

impl fmt::Display for PageSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "limit={} page={}", self.limit, self.page)
    }
}

fn validate_positive(field: &str, value: u32) -> Result<u32> {
    if value == 0 {
        return Err(ListError::InvalidSelection(format!(
            "{} must be a positive integer",
            field
        )));
    }
    Ok(value)
}

/// Opaque video identifier, serialized by the backend as `{"value": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoId {
    pub value: String,
}

impl VideoId {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// One video as listed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSummary {
    pub id: VideoId,
    pub name: String,
}

impl VideoSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: VideoId::new(id),
            name: name.into(),
        }
    }
}

/// Upper bound on the page count a listing may report; the page selector
/// holds one option per page.
pub const MAX_TOTAL_PAGES: u64 = 100_000;

/// One fetched batch of videos plus the total count across all pages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListPage {
    pub items: Vec<VideoSummary>,
    pub total_count: u64,
}

impl ListPage {
    pub fn new(items: Vec<VideoSummary>, total_count: u64) -> Self {
        Self { items, total_count }
    }

    /// `ceil(total_count / limit)`, zero when there is nothing to page through.
    pub fn total_pages(&self, limit: u32) -> u64 {
        if limit == 0 {
            return 0;
        }
        self.total_count.div_ceil(u64::from(limit))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reject a reported total that would page past [`MAX_TOTAL_PAGES`].
    pub fn check_page_count(&self, limit: u32) -> Result<()> {
        let pages = self.total_pages(limit);
        if pages > MAX_TOTAL_PAGES {
            return Err(ListError::InvalidResponse(format!(
                "total of {} videos at limit {} gives {} pages (max {})",
                self.total_count, limit, pages, MAX_TOTAL_PAGES
            )));
        }
        Ok(())
    }
}

/// Response body of `GET /api/v1/video`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope {
    pub data: ListData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListData {
    // The backend sends `null` for an empty result set.
    #[serde(default)]
    pub list: Option<Vec<VideoSummary>>,
    #[serde(default)]
    pub pagination: Option<PaginationInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationInfo {
    #[serde(default)]
    pub total: u64,
}

impl From<ListEnvelope> for ListPage {
    fn from(envelope: ListEnvelope) -> Self {
        let data = envelope.data;
        ListPage {
            items: data.list.unwrap_or_default(),
            total_count: data.pagination.map(|p| p.total).unwrap_or(0),
        }
    }
}
