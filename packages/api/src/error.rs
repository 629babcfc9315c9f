//! Error type shared by the client, the session store and the controller.

/// Everything that can stop a backend operation.
///
/// None of these are fatal to the application: each one ends the operation
/// that raised it and is reported to the user once.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Input rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    /// No persisted token, so the request was never sent.
    #[error("You must be logged in to {action}")]
    Unauthenticated { action: &'static str },

    /// The identity lookup failed or returned something without an `_id`.
    #[error("Session is no longer valid")]
    InvalidSession,

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The token slot could not be written or emptied.
    #[error("Could not store the session: {0}")]
    Storage(#[from] store::Error),

    /// The backend answered, but not with success.
    #[error("{operation} failed{}{}", fmt_status(.status), fmt_message(.message))]
    Backend {
        operation: &'static str,
        status: Option<u16>,
        message: Option<String>,
    },

    /// A success response whose body could not be decoded.
    #[error("Unexpected response from {operation}: {detail}")]
    Malformed {
        operation: &'static str,
        detail: String,
    },

    /// The session changed while the request was in flight; its result was dropped.
    #[error("Request outlived its session")]
    Superseded,

    /// Some deletions of a bulk delete failed.
    #[error("{failed} of {total} deletions failed")]
    PartialFailure { failed: usize, total: usize },
}

fn fmt_status(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({s})")).unwrap_or_default()
}

fn fmt_message(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl Error {
    /// Text to show the user.
    ///
    /// Backend-provided text wins when present. Validation and auth errors
    /// carry their own text. Everything else uses `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Validation(msg) => msg.clone(),
            Error::Unauthenticated { .. } => self.to_string(),
            Error::Backend {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Whether the error means there is no usable session.
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Unauthenticated { .. } | Error::InvalidSession)
    }

    /// Whether the error should stay silent because the caller moved on.
    pub fn is_superseded(&self) -> bool {
        matches!(self, Error::Superseded)
    }
}

/// Pull the user-facing text out of a failed response body.
///
/// JSON bodies use `error`, then `message`, then the raw JSON. Plain-text
/// bodies use the text itself. Empty bodies carry no message.
pub(crate) fn backend_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => {
            let text_field = |key: &str| {
                value
                    .get(key)
                    .and_then(|v| v.as_str())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            };
            text_field("error")
                .or_else(|| text_field("message"))
                .or_else(|| Some(value.to_string()))
        }
        Err(_) => Some(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_prefers_error_field() {
        let msg = backend_message(r#"{"error":"Email already used","message":"ignored"}"#);
        assert_eq!(msg.as_deref(), Some("Email already used"));
    }

    #[test]
    fn test_backend_message_falls_back_to_message() {
        let msg = backend_message(r#"{"message":"No workout found"}"#);
        assert_eq!(msg.as_deref(), Some("No workout found"));
    }

    #[test]
    fn test_backend_message_raw_json_when_no_known_field() {
        let msg = backend_message(r#"{"code":42}"#);
        assert_eq!(msg.as_deref(), Some(r#"{"code":42}"#));
    }

    #[test]
    fn test_backend_message_plain_text_and_empty() {
        assert_eq!(backend_message("Not Found").as_deref(), Some("Not Found"));
        assert!(backend_message("").is_none());
        assert!(backend_message("  \n").is_none());
    }

    #[test]
    fn test_user_message() {
        let err = Error::Backend {
            operation: "login",
            status: Some(401),
            message: Some("Incorrect password".into()),
        };
        assert_eq!(err.user_message("Login failed."), "Incorrect password");

        let err = Error::Backend {
            operation: "login",
            status: Some(500),
            message: None,
        };
        assert_eq!(err.user_message("Login failed."), "Login failed.");

        let err = Error::Unauthenticated {
            action: "delete workouts",
        };
        assert_eq!(
            err.user_message("ignored"),
            "You must be logged in to delete workouts"
        );
        assert!(err.is_auth());

        let err = Error::Validation("Passwords do not match".into());
        assert_eq!(err.user_message("ignored"), "Passwords do not match");
    }

    #[test]
    fn test_backend_display() {
        let err = Error::Backend {
            operation: "delete workout",
            status: Some(404),
            message: Some("missing".into()),
        };
        assert_eq!(err.to_string(), "delete workout failed (404): missing");

        let err = Error::Backend {
            operation: "login",
            status: None,
            message: None,
        };
        assert_eq!(err.to_string(), "login failed");
    }
}
