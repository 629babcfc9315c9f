//! User-visible notifications and confirmation prompts.
//!
//! The controller reports every outcome through a [`Notifier`] and asks
//! before destructive actions through a [`Confirm`]. Both are seams: the UI
//! plugs in its toast log and the browser's `confirm()`, tests plug in
//! [`MemoryNotifier`] and closures.

use std::rc::Rc;
use std::sync::{Arc, Mutex, PoisonError};

/// Severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// One transient message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Sink for transient notifications.
pub trait Notifier {
    fn notify(&self, notice: Notice);

    fn success(&self, message: &str) {
        self.notify(Notice::new(NoticeLevel::Success, message));
    }

    fn error(&self, message: &str) {
        self.notify(Notice::new(NoticeLevel::Error, message));
    }

    fn info(&self, message: &str) {
        self.notify(Notice::new(NoticeLevel::Info, message));
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

/// Notifier that only logs. Useful for headless use.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => tracing::warn!("{}", notice.message),
            NoticeLevel::Success | NoticeLevel::Info => tracing::info!("{}", notice.message),
        }
    }
}

/// Notifier that records every notice. Clones share the same record.
#[derive(Clone, Debug, Default)]
pub struct MemoryNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages of the given level, oldest first.
    pub fn messages(&self, level: NoticeLevel) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|n| n.level == level)
            .map(|n| n.message)
            .collect()
    }

    pub fn clear(&self) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_notifier_records_levels() {
        let notifier = MemoryNotifier::new();
        let shared = notifier.clone();

        notifier.success("Workout deleted");
        shared.error("Failed to delete workout. Try again.");
        notifier.info("No workouts to delete");

        assert_eq!(notifier.notices().len(), 3);
        assert_eq!(notifier.messages(NoticeLevel::Success), vec!["Workout deleted"]);
        assert_eq!(
            shared.messages(NoticeLevel::Error),
            vec!["Failed to delete workout. Try again."]
        );

        notifier.clear();
        assert!(shared.notices().is_empty());
    }

    #[test]
    fn test_notifier_through_references() {
        let notifier = MemoryNotifier::new();
        let by_ref: &dyn Notifier = &notifier;
        by_ref.info("hello");
        Arc::new(notifier.clone()).success("done");
        assert_eq!(notifier.notices().len(), 2);
    }

    #[test]
    fn test_closure_confirm() {
        let yes = |_: &str| true;
        let no = |prompt: &str| prompt.is_empty();
        assert!(yes.confirm("Delete?"));
        assert!(!no.confirm("Delete?"));
    }
}
