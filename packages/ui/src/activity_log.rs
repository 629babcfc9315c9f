//! Transient notification log. Controllers write to it through
//! [`ActivityNotifier`]; [`ToastPanel`](crate::ToastPanel) renders it.

use api::{Notice, NoticeLevel, Notifier};
use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp: String,
    /// Milliseconds since the epoch when the entry was added (0 on native).
    pub created_ms: f64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    next_id: u64,
}

impl ActivityLog {
    pub fn push(&mut self, level: NoticeLevel, message: &str, created_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(LogEntry {
            id,
            timestamp: current_time(),
            created_ms,
            level,
            message: message.to_string(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|e| e.id != id);
    }

    /// Drop entries that have been shown for at least `max_age_ms`.
    pub fn expire(&mut self, now_ms: f64, max_age_ms: f64) {
        self.entries.retain(|e| now_ms - e.created_ms < max_age_ms);
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: NoticeLevel, message: &str) {
    match level {
        NoticeLevel::Error => tracing::warn!("{}", message),
        NoticeLevel::Success | NoticeLevel::Info => tracing::info!("{}", message),
    }
    log.write().push(level, message, now_ms());
}

/// [`Notifier`] that appends to the activity log signal.
#[derive(Clone, Copy, PartialEq)]
pub struct ActivityNotifier(Signal<ActivityLog>);

impl ActivityNotifier {
    pub fn new(log: Signal<ActivityLog>) -> Self {
        Self(log)
    }
}

impl Notifier for ActivityNotifier {
    fn notify(&self, notice: Notice) {
        let mut log = self.0;
        log_activity(&mut log, notice.level, &notice.message);
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_ms() -> f64 {
    0.0
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}
