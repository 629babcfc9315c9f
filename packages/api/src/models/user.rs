//! # User identity and auth payloads
//!
//! The backend identifies users by an opaque `_id`. [`UserInfo`] is what the
//! client keeps of a user once the identity lookup (`GET /users/details`) has
//! succeeded: the id and the admin flag, nothing else.
//!
//! The identity endpoint has been seen answering in two shapes, so
//! [`parse_identity`] accepts both:
//!
//! ```json
//! { "user": { "_id": "u1", "isAdmin": false } }
//! { "_id": "u1", "isAdmin": false }
//! ```
//!
//! [`Credentials`] and [`Registration`] are the request bodies for login and
//! registration. Their `validate` methods (see [`crate::validation`]) run
//! before anything is sent.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backend-assigned user identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Resolved identity of the logged-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: UserId,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: Option<bool>,
}

/// Extract a [`UserInfo`] from an identity lookup payload.
///
/// Returns `None` when the payload has no usable `_id` (missing, null or
/// empty). Numeric ids are accepted and kept as their decimal text.
pub fn parse_identity(payload: &Value) -> Option<UserInfo> {
    let user = match payload.get("user") {
        Some(inner) if !inner.is_null() => inner,
        _ => payload,
    };
    let id = match user.get("_id")? {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    let is_admin = user.get("isAdmin").and_then(Value::as_bool);
    Some(UserInfo {
        id: UserId(id),
        is_admin,
    })
}

/// Body of `POST /users/login`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration form. Only `email` and `password` are sent to the backend.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
}

impl Registration {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_identity_wrapped() {
        let info = parse_identity(&json!({"user": {"_id": "u1", "isAdmin": false}})).unwrap();
        assert_eq!(info.id, UserId::from("u1"));
        assert_eq!(info.is_admin, Some(false));
    }

    #[test]
    fn test_parse_identity_bare() {
        let info = parse_identity(&json!({"_id": "u2", "isAdmin": true, "email": "a@b.com"})).unwrap();
        assert_eq!(info.id.to_string(), "u2");
        assert_eq!(info.is_admin, Some(true));
    }

    #[test]
    fn test_parse_identity_without_admin_flag() {
        let info = parse_identity(&json!({"_id": 17})).unwrap();
        assert_eq!(info.id.0, "17");
        assert!(info.is_admin.is_none());
    }

    #[test]
    fn test_parse_identity_rejects_missing_id() {
        assert!(parse_identity(&json!({"user": {"isAdmin": true}})).is_none());
        assert!(parse_identity(&json!({"_id": null})).is_none());
        assert!(parse_identity(&json!({"_id": ""})).is_none());
        assert!(parse_identity(&json!({})).is_none());
        assert!(parse_identity(&Value::Null).is_none());
        assert!(parse_identity(&json!(["u1"])).is_none());
    }

    #[test]
    fn test_registration_body_omits_confirmation() {
        let reg = Registration::new("a@b.com", "secret12", "secret12");
        let body = serde_json::to_value(&reg).unwrap();
        assert_eq!(body, json!({"email": "a@b.com", "password": "secret12"}));
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("a@b.com", "secret12");
        let printed = format!("{creds:?}");
        assert!(printed.contains("a@b.com"));
        assert!(!printed.contains("secret12"));
    }
}
