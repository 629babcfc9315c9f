/// Why the token slot could not be written or emptied.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No storage backend is reachable (e.g. `localStorage` disabled).
    #[error("token storage is unavailable")]
    Unavailable,

    #[error("token storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backend refused the operation (e.g. storage quota exceeded).
    #[error("token storage rejected the operation: {0}")]
    Rejected(String),
}
