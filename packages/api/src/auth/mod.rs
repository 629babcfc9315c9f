//! Client-side authentication: the session store and its state.

mod session;

pub use session::{Session, SessionState, SessionStore};
