//! # Backend HTTP client
//!
//! [`ApiClient`] is the only place that knows the backend's routes. Every
//! other module talks in terms of typed calls and [`Error`]s.
//!
//! ## Routes
//!
//! | Method | Call | Route | Auth |
//! |--------|------|-------|------|
//! | [`login`](ApiClient::login) | `POST` | `/users/login` | none |
//! | [`user_details`](ApiClient::user_details) | `GET` | `/users/details` | bearer |
//! | [`register`](ApiClient::register) | `POST` | `/users/register` | none |
//! | [`my_workouts`](ApiClient::my_workouts) | `GET` | `/workouts/getMyWorkouts` | bearer |
//! | [`add_workout`](ApiClient::add_workout) | `POST` | `/workouts/addWorkout` | bearer |
//! | [`complete_workout`](ApiClient::complete_workout) | `PATCH` | `/workouts/completeWorkoutStatus/:id` | bearer |
//! | [`update_workout`](ApiClient::update_workout) | `PATCH` | `/workouts/updateWorkout/:id` | bearer |
//! | [`delete_workout`](ApiClient::delete_workout) | `DELETE` | `/workouts/deleteWorkout/:id` | bearer |
//!
//! ## Failures
//!
//! A request that never gets a response is [`Error::Transport`]. A non-2xx
//! response is [`Error::Backend`] with whatever text the backend put in the
//! body. The identity lookup is the exception: any failure there is
//! [`Error::InvalidSession`], since the caller only needs to know the token
//! is no good.

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{backend_message, Error};
use crate::models::{
    parse_identity, Credentials, NewWorkout, Registration, StatusUpdate, UserInfo, Workout,
    WorkoutId,
};

/// Typed client for the workout backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the configured base URL.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base: config.api_url().to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Use a custom HTTP client (for connection pool reuse or testing).
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Exchange credentials for a bearer token.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, Error> {
        tracing::debug!("POST /users/login");
        let response = self
            .http
            .post(self.url("/users/login"))
            .json(credentials)
            .send()
            .await?;
        let response = Self::ensure_success(response, "login").await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

        match payload.get("access").and_then(Value::as_str) {
            Some(token) if !token.is_empty() => Ok(token.to_string()),
            _ => Err(Error::Backend {
                operation: "login",
                status: Some(status),
                message: field_message(&payload),
            }),
        }
    }

    /// Resolve the identity behind a token.
    pub async fn user_details(&self, token: &str) -> Result<UserInfo, Error> {
        tracing::debug!("GET /users/details");
        let response = self
            .http
            .get(self.url("/users/details"))
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!(
                "Identity lookup rejected ({}): {}",
                status.as_u16(),
                backend_message(&body).unwrap_or_default()
            );
            return Err(Error::InvalidSession);
        }

        let payload: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
        parse_identity(&payload).ok_or_else(|| {
            tracing::warn!("Unexpected /users/details shape: {}", payload);
            Error::InvalidSession
        })
    }

    /// Create an account. Returns the backend's success message, if any.
    pub async fn register(&self, registration: &Registration) -> Result<Option<String>, Error> {
        tracing::debug!("POST /users/register");
        let response = self
            .http
            .post(self.url("/users/register"))
            .json(registration)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Backend {
                operation: "registration",
                status: Some(status.as_u16()),
                message: backend_message(&body),
            });
        }

        let payload: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
        Ok(payload
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string))
    }

    /// Fetch every workout owned by the token's user.
    pub async fn my_workouts(&self, token: &str) -> Result<Vec<Workout>, Error> {
        tracing::debug!("GET /workouts/getMyWorkouts");
        let response = self
            .http
            .get(self.url("/workouts/getMyWorkouts"))
            .bearer_auth(token)
            .send()
            .await?;
        let response = Self::ensure_success(response, "load workouts").await?;
        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body).map_err(|e| Error::Malformed {
            operation: "load workouts",
            detail: e.to_string(),
        })?;
        normalize_workouts(payload).map_err(|e| Error::Malformed {
            operation: "load workouts",
            detail: e.to_string(),
        })
    }

    pub async fn add_workout(&self, token: &str, workout: &NewWorkout) -> Result<(), Error> {
        tracing::debug!("POST /workouts/addWorkout");
        let response = self
            .http
            .post(self.url("/workouts/addWorkout"))
            .bearer_auth(token)
            .json(workout)
            .send()
            .await?;
        Self::ensure_success(response, "add workout").await?;
        Ok(())
    }

    pub async fn complete_workout(&self, token: &str, id: &WorkoutId) -> Result<(), Error> {
        let path = format!("/workouts/completeWorkoutStatus/{id}");
        tracing::debug!("PATCH {}", path);
        let response = self
            .http
            .patch(self.url(&path))
            .bearer_auth(token)
            .send()
            .await?;
        Self::ensure_success(response, "complete workout").await?;
        Ok(())
    }

    pub async fn update_workout(
        &self,
        token: &str,
        id: &WorkoutId,
        update: &StatusUpdate,
    ) -> Result<(), Error> {
        let path = format!("/workouts/updateWorkout/{id}");
        tracing::debug!("PATCH {}", path);
        let response = self
            .http
            .patch(self.url(&path))
            .bearer_auth(token)
            .json(update)
            .send()
            .await?;
        Self::ensure_success(response, "update workout").await?;
        Ok(())
    }

    pub async fn delete_workout(&self, token: &str, id: &WorkoutId) -> Result<(), Error> {
        let path = format!("/workouts/deleteWorkout/{id}");
        tracing::debug!("DELETE {}", path);
        let response = self
            .http
            .delete(self.url(&path))
            .bearer_auth(token)
            .send()
            .await?;
        Self::ensure_success(response, "delete workout").await?;
        Ok(())
    }

    /// Checks HTTP response status; returns the response on success or an error with details.
    async fn ensure_success(
        response: reqwest::Response,
        operation: &'static str,
    ) -> Result<reqwest::Response, Error> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = backend_message(&body);
        tracing::warn!(
            "{} rejected ({}): {}",
            operation,
            status,
            message.as_deref().unwrap_or("<empty body>")
        );
        Err(Error::Backend {
            operation,
            status: Some(status),
            message,
        })
    }
}

/// Accept `{workouts: [...]}` or a bare array; anything else is an empty list.
pub fn normalize_workouts(payload: Value) -> Result<Vec<Workout>, serde_json::Error> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("workouts") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    items.into_iter().map(serde_json::from_value).collect()
}

/// `error` or `message` from a JSON payload, used when a 2xx body still
/// reports a problem.
fn field_message(payload: &Value) -> Option<String> {
    ["error", "message"].iter().find_map(|key| {
        payload
            .get(*key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn workout_json(id: &str, name: &str) -> Value {
        json!({"_id": id, "name": name, "duration": "30", "status": "pending"})
    }

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&ClientConfig::default().with_api_url(server.uri()))
    }

    #[test]
    fn test_normalize_wrapped_bare_and_other() {
        let a = workout_json("a", "Run");
        let b = workout_json("b", "Swim");

        let wrapped = normalize_workouts(json!({"workouts": [a.clone(), b.clone()]})).unwrap();
        let bare = normalize_workouts(json!([a, b])).unwrap();
        assert_eq!(wrapped, bare);
        assert_eq!(
            wrapped.iter().map(|w| w.id.0.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );

        assert!(normalize_workouts(json!({})).unwrap().is_empty());
        assert!(normalize_workouts(Value::Null).unwrap().is_empty());
        assert!(normalize_workouts(json!({"workouts": "none"})).unwrap().is_empty());
        assert!(normalize_workouts(json!("text")).unwrap().is_empty());
    }

    #[test]
    fn test_normalize_rejects_malformed_entries() {
        assert!(normalize_workouts(json!([{"name": "no id"}])).is_err());
    }

    #[test]
    fn test_field_message() {
        assert_eq!(
            field_message(&json!({"message": "User not found"})).as_deref(),
            Some("User not found")
        );
        assert!(field_message(&json!({"other": 1})).is_none());
    }

    #[tokio::test]
    async fn test_login_returns_access_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/login"))
            .and(body_json(json!({"email": "a@b.com", "password": "secret12"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "tok1"})))
            .expect(1)
            .mount(&server)
            .await;

        let token = client_for(&server)
            .login(&Credentials::new("a@b.com", "secret12"))
            .await
            .unwrap();
        assert_eq!(token, "tok1");
    }

    #[tokio::test]
    async fn test_login_without_access_reports_backend_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"error": "No Email Found"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .login(&Credentials::new("a@b.com", "secret12"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message("Login failed."), "No Email Found");
    }

    #[tokio::test]
    async fn test_login_non_2xx_carries_plain_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/login"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Incorrect password"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .login(&Credentials::new("a@b.com", "wrongpass"))
            .await
            .unwrap_err();
        match err {
            Error::Backend {
                status, message, ..
            } => {
                assert_eq!(status, Some(401));
                assert_eq!(message.as_deref(), Some("Incorrect password"));
            }
            other => panic!("expected Backend, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_user_details_sends_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/details"))
            .and(header("authorization", "Bearer tok1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"user": {"_id": "u1", "isAdmin": false}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let user = client_for(&server).user_details("tok1").await.unwrap();
        assert_eq!(user.id.0, "u1");
        assert_eq!(user.is_admin, Some(false));
    }

    #[tokio::test]
    async fn test_user_details_failures_are_invalid_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/details"))
            .and(header("authorization", "Bearer expired"))
            .respond_with(ResponseTemplate::new(403).set_body_string("jwt expired"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/details"))
            .and(header("authorization", "Bearer odd"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": "a@b.com"})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(matches!(
            client.user_details("expired").await,
            Err(Error::InvalidSession)
        ));
        assert!(matches!(
            client.user_details("odd").await,
            Err(Error::InvalidSession)
        ));
    }

    #[tokio::test]
    async fn test_register_success_and_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/register"))
            .and(body_json(json!({"email": "new@b.com", "password": "secret12"})))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"message": "Registered Successfully"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/users/register"))
            .and(body_json(json!({"email": "dup@b.com", "password": "secret12"})))
            .respond_with(
                ResponseTemplate::new(409).set_body_json(json!({"error": "Email already exists"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let message = client
            .register(&Registration::new("new@b.com", "secret12", "secret12"))
            .await
            .unwrap();
        assert_eq!(message.as_deref(), Some("Registered Successfully"));

        let err = client
            .register(&Registration::new("dup@b.com", "secret12", "secret12"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message("Registration failed."), "Email already exists");
    }

    #[tokio::test]
    async fn test_mutation_routes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/workouts/addWorkout"))
            .and(header("authorization", "Bearer tok1"))
            .and(body_json(json!({"name": "Run", "duration": "30", "status": "pending"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(workout_json("w1", "Run")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/workouts/completeWorkoutStatus/w1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/workouts/updateWorkout/w1"))
            .and(body_json(json!({"status": "pending"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/workouts/deleteWorkout/w1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let id = WorkoutId::from("w1");
        client
            .add_workout("tok1", &NewWorkout::new("Run", "30"))
            .await
            .unwrap();
        client.complete_workout("tok1", &id).await.unwrap();
        client
            .update_workout(
                "tok1",
                &id,
                &StatusUpdate {
                    status: crate::models::WorkoutStatus::Pending,
                },
            )
            .await
            .unwrap();
        client.delete_workout("tok1", &id).await.unwrap();
    }

    #[tokio::test]
    async fn test_my_workouts_non_2xx_is_backend_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/workouts/getMyWorkouts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).my_workouts("tok1").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Backend {
                status: Some(500),
                message: None,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Nothing listens on port 9 on the test host
        let client = ApiClient::new(&ClientConfig::default().with_api_url("http://127.0.0.1:9"));
        let err = client.my_workouts("tok1").await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}
