use std::sync::Mutex;
use tracing::{info, warn};

/// How prominent a notice should be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Surface for short user-facing messages ("no changes", fetch errors)
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NoticeLevel, message: &str);
}

/// Sends notices to the tracing subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info => info!("💬 {}", message),
            NoticeLevel::Error => warn!("❌ {}", message),
        }
    }
}

/// Keeps every notice in memory, in order
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&self) -> Vec<(NoticeLevel, String)> {
        self.notices
            .lock()
            .map(|mut notices| std::mem::take(&mut *notices))
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push((level, message.to_string()));
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, level: NoticeLevel, message: &str) {
        (**self).notify(level, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(NoticeLevel::Info, "first");
        notifier.notify(NoticeLevel::Error, "second");

        let notices = notifier.drain();
        assert_eq!(
            notices,
            vec![
                (NoticeLevel::Info, "first".to_string()),
                (NoticeLevel::Error, "second".to_string()),
            ]
        );
        assert!(notifier.notices().is_empty());
    }
}
