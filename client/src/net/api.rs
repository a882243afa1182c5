//! REST client for the remote auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `AuthError::Unavailable` since
//! the session cookie only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are classified here into `AuthError` so the session controller
//! never has to inspect message text. Backends that send a structured
//! `code` are matched on it; older backends that only send the database
//! error text are still recognised by the unique-constraint marker.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Credentials;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use crate::state::session::AuthService;

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const SIGNUP_ENDPOINT: &str = "/api/auth/signup";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Error `code` a backend sends when the email is already taken.
pub const DUPLICATE_EMAIL_CODE: &str = "duplicate_email";

/// Raw database text emitted by backends that do not send a `code`.
pub const DUPLICATE_EMAIL_MARKER: &str = "Unique constraint failed on the fields: (`email`)";

/// Failure of a remote auth call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Signup rejected because the email is already registered.
    #[error("{0}")]
    DuplicateEmail(String),
    /// Credentials or request rejected by the server.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    #[error("not available on server")]
    Unavailable,
}

impl AuthError {
    /// Classify a bare failure message.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains(DUPLICATE_EMAIL_MARKER) {
            Self::DuplicateEmail(message)
        } else {
            Self::Rejected(message)
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(operation: &str, status: u16) -> String {
    format!("{operation} failed: {status}")
}

/// Turn a non-2xx response into an `AuthError`.
#[cfg(any(test, feature = "hydrate"))]
fn decode_failure(operation: &str, status: u16, body: &str) -> AuthError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| request_failed_message(operation, status));
    match parsed.code.as_deref() {
        Some(DUPLICATE_EMAIL_CODE) => AuthError::DuplicateEmail(message),
        _ => AuthError::from_message(message),
    }
}

#[cfg(feature = "hydrate")]
async fn finish(operation: &str, resp: gloo_net::http::Response) -> Result<(), AuthError> {
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(decode_failure(operation, status, &body))
}

#[cfg(feature = "hydrate")]
async fn post_credentials(endpoint: &str, operation: &str, credentials: &Credentials) -> Result<(), AuthError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .json(credentials)
        .map_err(|e| AuthError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))?;
    finish(operation, resp).await
}

/// `AuthService` backed by the `/api/auth/*` endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthService;

impl AuthService for HttpAuthService {
    async fn login(&self, credentials: Credentials) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            post_credentials(LOGIN_ENDPOINT, "login", &credentials).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::Unavailable)
        }
    }

    async fn signup(&self, credentials: Credentials) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            post_credentials(SIGNUP_ENDPOINT, "signup", &credentials).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            finish("logout", resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }
}
