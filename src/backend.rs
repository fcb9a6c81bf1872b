use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ListPage, PageSelection};

/// Path of the paginated video listing, relative to the API base URL
pub const VIDEO_LIST_PATH: &str = "api/v1/video";

/// Read side of the video API as seen by the list controller
#[async_trait]
pub trait VideoBackend: Send + Sync {
    /// Fetch the videos for one page of the given size.
    async fn list_videos(&self, selection: PageSelection) -> Result<ListPage>;

    /// Short name used in log lines.
    fn backend_name(&self) -> &str;
}

