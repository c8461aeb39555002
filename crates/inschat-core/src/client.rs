//! HTTP client for the InsChat authentication service.
//!
//! The service exposes two JSON endpoints, `POST /auth/login` and
//! `POST /auth/register`. A successful login sets a session cookie which the
//! client keeps in its cookie jar for follow-up requests.
//!
//! ## Error handling
//!
//! Callers get a two-variant [`AuthError`] instead of a raw `reqwest::Error`:
//! - [`AuthError::Transport`]: the request never produced a usable response
//!   (send failure, or a body of any status that does not parse as JSON).
//! - [`AuthError::Rejected`]: the service answered with a non-success status
//!   and a well-formed body.
//!
//! The user-facing text for both variants lives in
//! [`AuthError::user_message`] so the TUI and the headless CLI surface
//! identical messages.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use reqwest::StatusCode;

/// Login endpoint, relative to the configured server URL.
pub const LOGIN_PATH: &str = "/auth/login";
/// Registration endpoint, relative to the configured server URL.
pub const REGISTER_PATH: &str = "/auth/register";

/// Fixed message for transport-level failures. The underlying cause is
/// logged, never shown to the user.
const TRANSPORT_MESSAGE: &str = "Server error";
/// Fallback message when a rejection carries no `error` field.
const REJECTION_FALLBACK: &str = "Something went wrong";

/// The username/password pair being submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Failure classification for a submit attempt.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request could not be sent, or the response body did not parse as
    /// JSON. Carries the source description for logging only.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("rejected with status {status}")]
    Rejected {
        status: StatusCode,
        /// `error` field from the response body, when present.
        message: Option<String>,
    },
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Transport(err.to_string())
    }
}

impl AuthError {
    /// The exact text shown in the form for this failure.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Transport(_) => TRANSPORT_MESSAGE.to_string(),
            AuthError::Rejected { message, .. } => message
                .clone()
                .unwrap_or_else(|| REJECTION_FALLBACK.to_string()),
        }
    }
}

/// Failure body shape. The `error` field is optional by contract.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Authentication service client.
///
/// Holds a cookie jar so a session cookie issued on login is replayed on
/// subsequent requests. No request timeout is applied; a hung request is
/// bounded only by the transport's own behavior.
#[derive(Debug)]
pub struct AuthClient {
    base_url: String,
    http: reqwest::Client,
}

impl AuthClient {
    /// Creates a client for the given server URL.
    pub fn new(base_url: &str) -> Result<Self> {
        url::Url::parse(base_url)
            .with_context(|| format!("Invalid server URL: {base_url}"))?;
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .context("build HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits credentials to `POST /auth/login`.
    ///
    /// On success the session cookie from the response is stored in the
    /// cookie jar. The body content is unspecified beyond being JSON.
    pub async fn login(&self, credentials: &Credentials) -> Result<serde_json::Value, AuthError> {
        self.submit(LOGIN_PATH, credentials).await
    }

    /// Submits credentials to `POST /auth/register`.
    pub async fn register(
        &self,
        credentials: &Credentials,
    ) -> Result<serde_json::Value, AuthError> {
        self.submit(REGISTER_PATH, credentials).await
    }

    async fn submit(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> Result<serde_json::Value, AuthError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, username = %credentials.username, "submitting credentials");

        let response = self.http.post(&url).json(credentials).send().await?;
        let status = response.status();

        // The body is decoded before the status is interpreted, so an
        // unparseable body is a transport failure regardless of status.
        if status.is_success() {
            let body = response.json::<serde_json::Value>().await?;
            tracing::debug!(%status, "authentication accepted");
            return Ok(body);
        }

        let message = response.json::<ErrorBody>().await?.error;
        tracing::debug!(%status, message = ?message, "authentication rejected");
        Err(AuthError::Rejected { status, message })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn creds() -> Credentials {
        Credentials::new("priya", "hunter2")
    }

    #[tokio::test]
    async fn test_login_success_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"username": "priya", "password": "hunter2"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": "priya"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = AuthClient::new(&server.uri()).unwrap();
        let body = client.login(&creds()).await.unwrap();
        assert_eq!(body["user"], "priya");
    }

    #[tokio::test]
    async fn test_rejection_surfaces_error_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "bad credentials"})))
            .mount(&server)
            .await;

        let client = AuthClient::new(&server.uri()).unwrap();
        let err = client.login(&creds()).await.unwrap_err();
        match &err {
            AuthError::Rejected { status, message } => {
                assert_eq!(*status, StatusCode::UNAUTHORIZED);
                assert_eq!(message.as_deref(), Some("bad credentials"));
            }
            AuthError::Transport(_) => panic!("expected rejection, got {err:?}"),
        }
        assert_eq!(err.user_message(), "bad credentials");
    }

    #[tokio::test]
    async fn test_rejection_without_error_field_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(REGISTER_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
            .mount(&server)
            .await;

        let client = AuthClient::new(&server.uri()).unwrap();
        let err = client.register(&creds()).await.unwrap_err();
        assert_eq!(err.user_message(), "Something went wrong");
    }

    #[tokio::test]
    async fn test_unparseable_rejection_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let client = AuthClient::new(&server.uri()).unwrap();
        let err = client.login(&creds()).await.unwrap_err();
        assert!(matches!(err, AuthError::Transport(_)), "got {err:?}");
        assert_eq!(err.user_message(), "Server error");
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = AuthClient::new(&server.uri()).unwrap();
        let err = client.login(&creds()).await.unwrap_err();
        assert!(matches!(err, AuthError::Transport(_)), "got {err:?}");
        assert_eq!(err.user_message(), "Server error");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Start a mock server only to grab a free port, then shut it down.
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let client = AuthClient::new(&uri).unwrap();
        let err = client.login(&creds()).await.unwrap_err();
        assert!(matches!(err, AuthError::Transport(_)), "got {err:?}");
        assert_eq!(err.user_message(), "Server error");
    }

    #[tokio::test]
    async fn test_session_cookie_replayed_on_next_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "session=abc123; Path=/")
                    .set_body_json(json!({"user": "priya"})),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .and(header("cookie", "session=abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": "priya"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = AuthClient::new(&server.uri()).unwrap();
        client.login(&creds()).await.unwrap();
        client.login(&creds()).await.unwrap();
    }

    #[test]
    fn test_invalid_server_url_rejected() {
        assert!(AuthClient::new("not a url").is_err());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = AuthClient::new("http://127.0.0.1:5000/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
    }
}
