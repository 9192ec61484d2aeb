//! Notification surface.

use crate::{Notice, NoticeLevel};

/// Receives the notice for every dispatch outcome.
pub trait Notifier: Send + Sync {
    /// Deliver `notice`.
    fn notify(&self, notice: &Notice);
}

/// Writes notices to the tracing log at a matching level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Info | NoticeLevel::Success => {
                tracing::info!(title = %notice.title, "{}", notice.description)
            }
            NoticeLevel::Warning => {
                tracing::warn!(title = %notice.title, "{}", notice.description)
            }
            NoticeLevel::Error => {
                tracing::error!(title = %notice.title, "{}", notice.description)
            }
        }
    }
}
