//! Platform token storage.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorage`]
//! - **Desktop / Mobile** (native): a file under the user's data directory
//!   via [`store::FileStore`]

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokens = store::LocalStorage;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformTokens = store::FileStore;

/// Create the token store for the current platform.
pub fn make_token_store() -> PlatformTokens {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("workout-tracker");
        store::FileStore::new(base)
    }
}
