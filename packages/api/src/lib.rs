//! # API crate: the workout tracker's client core
//!
//! Everything the frontends need to talk to the workout backend, with no UI
//! dependency. The `ui` crate wraps these types in Dioxus context and hooks.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Session store: bootstrap, login, register, logout |
//! | [`client`] | Typed HTTP client for the backend routes |
//! | [`config`] | Base URL and notification settings from env or TOML |
//! | [`error`] | Error taxonomy shared by every operation |
//! | [`models`] | Users, credentials and workouts as exchanged with the backend |
//! | [`notify`] | Notification and confirmation seams |
//! | [`stats`] | Dashboard totals over a workout list |
//! | [`validation`] | Input checks that run before any request |
//! | [`workouts`] | Workout list controller with resync-after-mutation |

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod stats;
pub mod validation;
pub mod workouts;

pub use auth::{Session, SessionState, SessionStore};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::Error;
pub use models::{
    Credentials, NewWorkout, Registration, UserId, UserInfo, Workout, WorkoutDuration, WorkoutId,
    WorkoutStatus,
};
pub use notify::{Confirm, Notice, NoticeLevel, Notifier};
pub use stats::WorkoutStats;
pub use workouts::{BulkOutcome, WorkoutList, WorkoutsController};
