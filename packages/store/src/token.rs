//! # Token slot abstraction
//!
//! [`TokenStore`] is the one key-value slot the client persists: the bearer
//! token returned by `POST /users/login`. Implementations live in sibling
//! modules ([`crate::MemoryStore`], [`crate::FileStore`] and, in the browser,
//! `LocalStorage`).
//!
//! ## Contract
//!
//! | Method | Behaviour |
//! |--------|-----------|
//! | [`load`](TokenStore::load) | Returns the stored token, or `None` when the slot is empty or unreadable. |
//! | [`save`](TokenStore::save) | Replaces the slot's contents, or reports why it could not. |
//! | [`clear`](TokenStore::clear) | Empties the slot completely. Calling it on an empty slot is `Ok`. |
//!
//! Backends never panic. An unreadable slot loads as `None`, which the
//! session code treats as logged out. Failed writes and removals are returned
//! so the session never believes in a token that is not actually stored, or
//! gone when it is not.

use std::rc::Rc;
use std::sync::Arc;

use crate::error::Error;

/// Storage key used by every backend for the bearer token.
pub const TOKEN_KEY: &str = "token";

/// A single persisted slot holding the bearer token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), Error>;
    fn clear(&self) -> Result<(), Error>;
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, token: &str) -> Result<(), Error> {
        (**self).save(token)
    }

    fn clear(&self) -> Result<(), Error> {
        (**self).clear()
    }
}

impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, token: &str) -> Result<(), Error> {
        (**self).save(token)
    }

    fn clear(&self) -> Result<(), Error> {
        (**self).clear()
    }
}

impl<T: TokenStore + ?Sized> TokenStore for Rc<T> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, token: &str) -> Result<(), Error> {
        (**self).save(token)
    }

    fn clear(&self) -> Result<(), Error> {
        (**self).clear()
    }
}

/// Treat blank values as an empty slot.
pub(crate) fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_shared_handles_see_same_slot() {
        let store = Arc::new(MemoryStore::new());
        let by_ref: &MemoryStore = &store;

        store.save("tok1").unwrap();
        assert_eq!(by_ref.load().as_deref(), Some("tok1"));

        let rc = Rc::new(store.clone());
        rc.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  abc \n".to_string()).as_deref(), Some("abc"));
        assert!(non_blank("   ".to_string()).is_none());
        assert!(non_blank(String::new()).is_none());
    }
}
