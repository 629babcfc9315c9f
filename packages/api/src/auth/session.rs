//! # Session store
//!
//! [`SessionStore`] is the client's single answer to "who is logged in". It
//! is created once by the application root and handed to whatever needs it;
//! clones share the same state.
//!
//! ## States
//!
//! ```text
//!                 bootstrap/login
//! Unauthenticated ───────────────▶ Validating
//!        ▲                          │      │
//!        │       lookup fails       │      │ lookup succeeds
//!        ├──────────────────────────┘      ▼
//!        └──────────── logout ────── Authenticated
//! ```
//!
//! A session only becomes [`SessionState::Authenticated`] after
//! `GET /users/details` accepted the token and returned an `_id`. Whenever a
//! lookup fails, the persisted token is removed together with the in-memory
//! state, so a user id is never held without a validated token.
//!
//! ## Epochs
//!
//! Every `bootstrap`, `login` and `logout` advances an epoch counter. A lookup
//! that resolves after the epoch moved on is dropped with
//! [`Error::Superseded`] instead of overwriting the newer state. This is what
//! keeps a slow bootstrap from logging the user back in after they pressed
//! logout.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use store::TokenStore;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{Credentials, Registration, UserId, UserInfo};

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Validating,
    Authenticated,
}

/// The client's view of the current user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user_id: Option<UserId>,
    pub is_admin: Option<bool>,
    pub state: SessionState,
}

impl Session {
    fn validating() -> Self {
        Self {
            state: SessionState::Validating,
            ..Self::default()
        }
    }

    fn authenticated(user: UserInfo) -> Self {
        Self {
            user_id: Some(user.id),
            is_admin: user.is_admin,
            state: SessionState::Authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated && self.user_id.is_some()
    }

    pub fn is_validating(&self) -> bool {
        self.state == SessionState::Validating
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.is_admin == Some(true)
    }
}

struct Inner<S> {
    client: ApiClient,
    tokens: S,
    session: RwLock<Session>,
    epoch: AtomicU64,
}

/// Shared handle to the authentication state and the persisted token.
pub struct SessionStore<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> PartialEq for SessionStore<S> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S: TokenStore> SessionStore<S> {
    /// Create an empty (unauthenticated) session backed by `tokens`.
    pub fn new(client: ApiClient, tokens: S) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                tokens,
                session: RwLock::new(Session::default()),
                epoch: AtomicU64::new(0),
            }),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.inner.client
    }

    /// Current session state.
    pub fn snapshot(&self) -> Session {
        self.inner
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current session epoch. Changes on every bootstrap, login and logout.
    pub fn epoch(&self) -> u64 {
        self.inner.epoch.load(Ordering::SeqCst)
    }

    /// The persisted bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.inner.tokens.load()
    }

    /// The persisted token, or an auth error naming what was attempted.
    pub fn require_token(&self, action: &'static str) -> Result<String, Error> {
        self.token().ok_or(Error::Unauthenticated { action })
    }

    /// Restore the session from the persisted token.
    ///
    /// Without a token the session stays empty and no request is made. With
    /// one, the identity lookup decides: success authenticates, any failure
    /// clears both the session and the token.
    pub async fn bootstrap(&self) -> Session {
        let epoch = self.advance_epoch();
        let Some(token) = self.token() else {
            tracing::debug!("No persisted token, starting unauthenticated");
            self.set(Session::default());
            return self.snapshot();
        };

        if let Err(e) = self.validate(token, epoch).await {
            if !e.is_superseded() {
                tracing::warn!("Persisted session rejected: {}", e);
            }
        }
        self.snapshot()
    }

    /// Log in, persist the returned token and resolve the identity behind it.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, Error> {
        credentials.validate()?;

        let epoch = self.advance_epoch();
        self.set(Session::validating());

        let token = match self.inner.client.login(credentials).await {
            Ok(token) => token,
            Err(e) => {
                if self.epoch() == epoch {
                    self.reset();
                }
                return Err(e);
            }
        };
        if self.epoch() != epoch {
            tracing::debug!("Login resolved after the session moved on, dropping token");
            return Err(Error::Superseded);
        }

        if let Err(e) = self.inner.tokens.save(&token) {
            tracing::warn!("Login succeeded but the token could not be stored: {}", e);
            self.reset();
            return Err(e.into());
        }
        self.validate(token, epoch).await
    }

    /// Create an account. The session itself is left untouched.
    pub async fn register(&self, registration: &Registration) -> Result<Option<String>, Error> {
        registration.validate()?;
        self.inner.client.register(registration).await
    }

    /// Forget the token and the user. Safe to call when already logged out.
    pub fn logout(&self) {
        self.advance_epoch();
        self.reset();
        tracing::info!("Logged out");
    }

    async fn validate(&self, token: String, epoch: u64) -> Result<Session, Error> {
        self.set(Session::validating());
        let result = self.inner.client.user_details(&token).await;

        if self.epoch() != epoch {
            tracing::debug!("Identity lookup resolved for a stale session, ignoring");
            return Err(Error::Superseded);
        }

        match result {
            Ok(user) => {
                tracing::info!("Session authenticated for user {}", user.id);
                self.set(Session::authenticated(user));
                Ok(self.snapshot())
            }
            Err(e) => {
                self.reset();
                Err(match e {
                    Error::Transport(_) | Error::InvalidSession => e,
                    _ => Error::InvalidSession,
                })
            }
        }
    }

    fn advance_epoch(&self) -> u64 {
        self.inner.epoch.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn set(&self, session: Session) {
        *self
            .inner
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner) = session;
    }

    /// Drop the token and the user together.
    fn reset(&self) {
        if let Err(e) = self.inner.tokens.clear() {
            tracing::error!("Failed to remove the persisted token: {}", e);
        }
        self.set(Session::default());
    }
}
