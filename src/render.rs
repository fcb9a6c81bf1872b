//! Turns a fetched [`ListPage`] into what the list panel shows.
//!
//! Rendering is pure: the same page and selection always produce the same
//! entries, summary and page options. Only `rendered_at` differs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::models::{ListPage, PageSelection, VideoId};

/// Placeholder shown instead of the list when a page has no videos
pub const NO_VIDEOS_MESSAGE: &str = "There are no available videos";

/// Text swapped into the list area when a fetch fails
pub const LOAD_ERROR_MESSAGE: &str =
    "Sorry, there is an error occurred while loading a video list";

/// A rendered list row: display name tagged with the video id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub id: VideoId,
    pub label: String,
}

/// One entry of the page selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageOption {
    pub value: u64,
    pub label: String,
    pub selected: bool,
}

/// Content of the list area
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ListBody {
    Items(Vec<ListEntry>),
    Placeholder(String),
    Error(String),
}

/// Everything the list panel displays after a fetch
#[derive(Debug, Clone, Serialize)]
pub struct ListView {
    pub body: ListBody,
    /// "Page X of Y", empty when cleared
    pub summary: String,
    pub page_options: Vec<PageOption>,
    pub rendered_at: DateTime<Utc>,
}

impl ListView {
    /// Blank panel shown before the first fetch completes.
    pub fn blank() -> Self {
        Self {
            body: ListBody::Items(Vec::new()),
            summary: String::new(),
            page_options: Vec::new(),
            rendered_at: Utc::now(),
        }
    }

    /// Panel after a failed fetch: error text only, pagination cleared.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            body: ListBody::Error(message.into()),
            summary: String::new(),
            page_options: Vec::new(),
            rendered_at: Utc::now(),
        }
    }

    pub fn entries(&self) -> &[ListEntry] {
        match &self.body {
            ListBody::Items(entries) => entries,
            _ => &[],
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.body, ListBody::Error(_))
    }

    pub fn selected_page(&self) -> Option<u64> {
        self.page_options
            .iter()
            .find(|option| option.selected)
            .map(|option| option.value)
    }
}

/// Render a page of videos for the committed selection.
///
/// Builds one page option per page; [`HttpVideoBackend`](crate::HttpVideoBackend)
/// rejects listings past [`MAX_TOTAL_PAGES`](crate::models::MAX_TOTAL_PAGES).
pub fn render(page: &ListPage, selection: PageSelection) -> ListView {
    if page.items.is_empty() {
        return ListView {
            body: ListBody::Placeholder(NO_VIDEOS_MESSAGE.to_string()),
            summary: String::new(),
            page_options: Vec::new(),
            rendered_at: Utc::now(),
        };
    }

    let entries = page
        .items
        .iter()
        .map(|video| ListEntry {
            id: video.id.clone(),
            label: video.name.clone(),
        })
        .collect();

    let total_pages = page.total_pages(selection.limit());
    let current = u64::from(selection.page());

    let page_options = (1..=total_pages)
        .map(|value| PageOption {
            value,
            label: format!("Page {}", value),
            selected: value == current,
        })
        .collect();

    ListView {
        body: ListBody::Items(entries),
        summary: format!("Page {} of {}", selection.page(), total_pages),
        page_options,
        rendered_at: Utc::now(),
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            ListBody::Items(entries) => {
                for entry in entries {
                    writeln!(f, "  • {}  [{}]", entry.label, entry.id)?;
                }
            }
            ListBody::Placeholder(text) | ListBody::Error(text) => writeln!(f, "  {}", text)?,
        }

        if !self.summary.is_empty() {
            writeln!(f, "{}", self.summary)?;
        }

        if !self.page_options.is_empty() {
            let pages = self
                .page_options
                .iter()
                .map(|option| {
                    if option.selected {
                        format!("[{}]", option.value)
                    } else {
                        option.value.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "Pages: {}", pages)?;
        }

        Ok(())
    }
}
