//! Shared UI glue: session and workout context, notifications, confirmation.
//!
//! Views live in the platform crates; this crate gives them hooks over the
//! `api` types so no view ever builds a client or touches storage itself.

mod tokens;
pub use tokens::{make_token_store, PlatformTokens};

mod auth;
pub use auth::{use_session, use_session_store, AppSession, LogoutButton, SessionProvider};

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, ActivityNotifier, LogEntry};

mod activity_log_panel;
pub use activity_log_panel::ToastPanel;

mod confirm;
pub use confirm::BrowserConfirm;

mod workouts;
pub use workouts::{use_workouts, AppWorkouts, WorkoutsHandle, WorkoutsProvider};
