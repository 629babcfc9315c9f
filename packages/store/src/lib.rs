//! Persisted client state for the workout tracker.
//!
//! The only thing the client keeps across reloads is the bearer token issued
//! at login. It lives in a single slot behind the [`TokenStore`] trait so the
//! session code never needs to know which platform it is running on.

pub mod token;

mod error;
pub use error::Error;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use token::{TokenStore, TOKEN_KEY};
