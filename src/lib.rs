//! Video List Client
//!
//! Browses the paginated video listing of the streaming REST API: tracks the
//! committed and pending page selection, fetches pages and renders them.

pub mod backend;
pub mod binding;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod notify;
pub mod render;
pub mod session;

// Re-export main types for easy access
pub use crate::backend::VideoBackend;
pub use crate::binding::{BindingCommand, BindingResponse};
pub use crate::client::HttpVideoBackend;
pub use crate::config::{Config, ConfigBuilder};
pub use crate::controller::{ConfirmOutcome, FetchOutcome, PaginatedListController};
pub use crate::error::{ListError, Result};
pub use crate::models::{ListPage, PageSelection, VideoId, VideoSummary};
pub use crate::notify::{LogNotifier, NoticeLevel, Notifier, RecordingNotifier};
pub use crate::render::{render, ListBody, ListView};
pub use crate::session::{StaticTokenStore, TokenStore};
