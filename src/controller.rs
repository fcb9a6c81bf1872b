use tracing::{debug, info, warn};

use crate::backend::VideoBackend;
use crate::error::Result;
use crate::models::{ListPage, PageSelection};
use crate::notify::{NoticeLevel, Notifier};
use crate::render::{render, ListView, LOAD_ERROR_MESSAGE};

/// Notice shown when the user confirms without touching limit or page
pub const NO_CHANGES_MESSAGE: &str = "There are no changes in page or limit";

/// Result of a single fetch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Rendered { items: usize, total_pages: u64 },
    Failed(String),
}

impl FetchOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, FetchOutcome::Rendered { .. })
    }
}

/// Result of confirming the pending selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Pending matched committed; nothing was fetched.
    Unchanged,
    /// Fetched and promoted to committed.
    Committed(PageSelection),
    /// Fetch failed; committed selection kept.
    Failed(String),
}

/// Tracks the committed and pending page selection and renders fetched pages.
///
/// The committed selection always equals the parameters of the last
/// successful fetch. The pending selection is whatever the user has staged
/// since then and only becomes committed through a successful fetch.
pub struct PaginatedListController<B, N> {
    backend: B,
    notifier: N,
    committed: PageSelection,
    pending: PageSelection,
    view: ListView,
    last_page: Option<ListPage>,
}

impl<B: VideoBackend, N: Notifier> PaginatedListController<B, N> {
    pub fn new(backend: B, notifier: N, initial: PageSelection) -> Self {
        Self {
            backend,
            notifier,
            committed: initial,
            pending: initial,
            view: ListView::blank(),
            last_page: None,
        }
    }

    pub fn committed(&self) -> PageSelection {
        self.committed
    }

    pub fn pending(&self) -> PageSelection {
        self.pending
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    /// Last page received from the backend, if any fetch has succeeded.
    pub fn last_page(&self) -> Option<&ListPage> {
        self.last_page.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn has_pending_changes(&self) -> bool {
        self.pending != self.committed
    }

    /// Stage a new page size without fetching.
    pub fn set_pending_limit(&mut self, value: u32) -> Result<()> {
        self.pending = self.pending.with_limit(value)?;
        debug!("Pending selection is now {}", self.pending);
        Ok(())
    }

    /// Stage a new page number without fetching.
    pub fn set_pending_page(&mut self, value: u32) -> Result<()> {
        self.pending = self.pending.with_page(value)?;
        debug!("Pending selection is now {}", self.pending);
        Ok(())
    }

    /// Fetch the committed selection, as done once at startup.
    pub async fn load_initial(&mut self) -> FetchOutcome {
        let selection = self.committed;
        self.fetch_page(selection).await
    }

    /// Fetch the pending selection if it differs from the committed one.
    pub async fn confirm_selection(&mut self) -> ConfirmOutcome {
        if !self.has_pending_changes() {
            self.notifier.notify(NoticeLevel::Info, NO_CHANGES_MESSAGE);
            return ConfirmOutcome::Unchanged;
        }

        let target = self.pending;
        match self.fetch_page(target).await {
            FetchOutcome::Rendered { .. } => ConfirmOutcome::Committed(target),
            FetchOutcome::Failed(reason) => ConfirmOutcome::Failed(reason),
        }
    }

    /// Fetch one page and replace the view with it, or with an error message.
    ///
    /// Only a successful fetch changes the committed selection.
    pub async fn fetch_page(&mut self, selection: PageSelection) -> FetchOutcome {
        info!(
            "🔄 Loading video list from {} backend ({})",
            self.backend.backend_name(),
            selection
        );

        match self.backend.list_videos(selection).await {
            Ok(page) => {
                let total_pages = page.total_pages(selection.limit());
                let items = page.items.len();

                self.view = render(&page, selection);
                self.last_page = Some(page);

                if self.committed != selection {
                    info!("✅ Committed selection {} -> {}", self.committed, selection);
                }
                self.committed = selection;

                FetchOutcome::Rendered { items, total_pages }
            }
            Err(e) => {
                warn!("Error occurred while loading a video list: {}", e);
                self.view = ListView::failed(LOAD_ERROR_MESSAGE);
                self.notifier.notify(NoticeLevel::Error, LOAD_ERROR_MESSAGE);
                FetchOutcome::Failed(e.to_string())
            }
        }
    }
}
