//! Prediction API Bindings
//!
//! HTTP wrappers over the backend, organized by domain. Session-relevant
//! calls always include credentials so the server cookie travels; callers
//! that outlive a page pass an `AbortSignal` tied to that page.

mod auth;
mod predict;
mod reports;

use std::fmt;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use web_sys::{AbortSignal, RequestCredentials};

use crate::config;

pub use auth::*;
pub use predict::*;
pub use reports::*;

/// Failure taxonomy for API calls. `Unauthorized` is split out because
/// several views redirect to the login page on it instead of rendering a
/// message.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Unauthorized,
    Status(u16, Option<String>),
    Network(String),
}

impl ApiError {
    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status(_, message) => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "not authenticated"),
            ApiError::Status(code, Some(message)) => write!(f, "{message} (status {code})"),
            ApiError::Status(code, None) => write!(f, "request failed with status {code}"),
            ApiError::Network(message) => write!(f, "network error: {message}"),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Error payload shape shared by every endpoint.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

pub(crate) fn get(path: &str) -> RequestBuilder {
    Request::get(&config::api_url(path)).credentials(RequestCredentials::Include)
}

pub(crate) fn post(path: &str) -> RequestBuilder {
    Request::post(&config::api_url(path)).credentials(RequestCredentials::Include)
}

/// Convert a non-2xx response into an `ApiError`, pulling the server's
/// `error`/`message` field when the body carries one.
pub(crate) async fn error_for(resp: Response) -> ApiError {
    let status = resp.status();
    if status == 401 {
        return ApiError::Unauthorized;
    }
    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error.or(body.message));
    ApiError::Status(status, message)
}

/// Credentialed GET returning deserialized JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(
    path: &str,
    signal: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    let resp = get(path).abort_signal(signal).send().await?;
    if resp.ok() {
        resp.json().await.map_err(ApiError::from)
    } else {
        Err(error_for(resp).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_only_for_status_errors() {
        let err = ApiError::Status(400, Some("Invalid input for BMI.".to_string()));
        assert_eq!(err.server_message(), Some("Invalid input for BMI."));
        assert_eq!(ApiError::Unauthorized.server_message(), None);
        assert_eq!(ApiError::Network("offline".to_string()).server_message(), None);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(ApiError::Unauthorized.to_string(), "not authenticated");
        assert_eq!(
            ApiError::Status(500, None).to_string(),
            "request failed with status 500"
        );
    }
}
