//! # Browser `localStorage` token store
//!
//! [`LocalStorage`] is the [`TokenStore`] used on the **web platform**. The
//! token lives under the [`TOKEN_KEY`] entry of `window.localStorage`, so it
//! survives reloads and is shared by every tab on the same origin.
//!
//! ## Error handling
//!
//! `localStorage` can be missing (privacy modes, sandboxed iframes) or throw
//! on access, and writes can exceed the quota. Reads then return `None`;
//! failed writes and removals are logged and returned to the caller.

use web_sys::Storage;

use crate::error::Error;
use crate::token::{non_blank, TokenStore, TOKEN_KEY};

/// `window.localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorage {
    fn load(&self) -> Option<String> {
        let storage = Self::storage()?;
        let value = storage.get_item(TOKEN_KEY).ok()??;
        non_blank(value)
    }

    fn save(&self, token: &str) -> Result<(), Error> {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, token not persisted");
            return Err(Error::Unavailable);
        };
        storage.set_item(TOKEN_KEY, token).map_err(|e| {
            tracing::warn!("Failed to write token to localStorage: {:?}", e);
            Error::Rejected(format!("{e:?}"))
        })
    }

    fn clear(&self) -> Result<(), Error> {
        // Nothing can be stored where there is no storage
        let Some(storage) = Self::storage() else {
            return Ok(());
        };
        storage.remove_item(TOKEN_KEY).map_err(|e| {
            tracing::error!("Failed to remove token from localStorage: {:?}", e);
            Error::Rejected(format!("{e:?}"))
        })
    }
}
