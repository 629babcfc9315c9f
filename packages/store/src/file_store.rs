//! # Filesystem-backed token store
//!
//! [`FileStore`] keeps the bearer token in a single file so a native build of
//! the client stays logged in across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── token          # the bearer token, nothing else
//! ```
//!
//! ## Platform data directories
//!
//! Callers usually pass `dirs::data_dir().join("workout-tracker")`:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/workout-tracker/` |
//! | Linux | `~/.local/share/workout-tracker/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\workout-tracker\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::Error;
use crate::token::{non_blank, TokenStore, TOKEN_KEY};

/// Filesystem-backed TokenStore for native platforms.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_KEY)
    }
}

impl TokenStore for FileStore {
    fn load(&self) -> Option<String> {
        match std::fs::read_to_string(self.token_path()) {
            Ok(content) => non_blank(content),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read token file: {}", e);
                None
            }
        }
    }

    fn save(&self, token: &str) -> Result<(), Error> {
        std::fs::create_dir_all(&self.base).map_err(|e| {
            tracing::warn!("Failed to create token directory: {}", e);
            e
        })?;
        std::fs::write(self.token_path(), token).map_err(|e| {
            tracing::warn!("Failed to write token file: {}", e);
            e
        })?;
        Ok(())
    }

    fn clear(&self) -> Result<(), Error> {
        match std::fs::remove_file(self.token_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                tracing::error!("Failed to remove token file: {}", e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("workout-tracker");

        let store = FileStore::new(base.clone());
        assert!(store.load().is_none());

        store.save("tok1").unwrap();

        // Re-open from same directory
        let store2 = FileStore::new(base.clone());
        assert_eq!(store2.load().as_deref(), Some("tok1"));
        assert_eq!(
            std::fs::read_to_string(base.join("token")).unwrap(),
            "tok1"
        );

        store2.clear().unwrap();
        assert!(store.load().is_none());
        assert!(!base.join("token").exists());
    }

    #[test]
    fn test_blank_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("token"), "  \n").unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clear_missing_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-created"));
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_into_unwritable_base_fails() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let store = FileStore::new(blocker.join("nested"));
        assert!(matches!(store.save("tok1"), Err(Error::Io(_))));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clear_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A directory named like the token file cannot be removed as a file
        std::fs::create_dir(dir.path().join("token")).unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(store.clear(), Err(Error::Io(_))));
    }
}
