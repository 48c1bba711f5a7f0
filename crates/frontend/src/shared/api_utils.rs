//! API utilities for frontend-backend communication
//!
//! Provides base URL resolution, the authorized request builder and the
//! error type shared by every gateway.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::config::{API_BASE_OVERRIDE, API_PREFIX, BACKEND_PORT};

/// Get the base URL for API requests
///
/// Uses the build-time override when present, otherwise the current window
/// location with the backend port and API prefix.
///
/// # Returns
/// - API base URL like "http://localhost:5197/api"
/// - Bare API prefix if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return API_PREFIX.to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}{}", protocol, hostname, BACKEND_PORT, API_PREFIX)
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        from_server: bool,
    },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Invalid response from server: {0}")]
    InvalidResponse(&'static str),
    #[error("{0} is required")]
    MissingId(&'static str),
}

impl ApiError {
    /// Builds a status error, preferring the `message` field of the body.
    pub fn from_status(status: u16, body: &str) -> Self {
        match server_message(body) {
            Some(message) => ApiError::Status {
                status,
                message,
                from_server: true,
            },
            None => ApiError::Status {
                status,
                message: status_message(status),
                from_server: false,
            },
        }
    }

    /// Message supplied by the backend, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message,
                from_server: true,
                ..
            } => Some(message),
            _ => None,
        }
    }

    /// Server message when present, otherwise `fallback`
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

/// Extracts a non-empty `message` from a JSON error body
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

pub fn status_message(status: u16) -> String {
    match status {
        404 => "Resource not found".to_string(),
        403 => "You do not have permission to perform this action".to_string(),
        500 => "Server error occurred. Please try again later".to_string(),
        other => format!("Request failed with status {}", other),
    }
}

/// Request factory bound to a base URL and the session's bearer token
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base: base.into(),
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::get(&self.url(path)))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::post(&self.url(path)))
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::delete(&self.url(path)))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

/// Sends a request without a body; non-2xx statuses become [`ApiError::Status`].
pub async fn execute(builder: RequestBuilder) -> Result<Response, ApiError> {
    let request = builder
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    dispatch(request).await
}

/// Sends a request with a JSON body
pub async fn execute_json<B>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError>
where
    B: Serialize + ?Sized,
{
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    dispatch(request).await
}

async fn dispatch(request: Request) -> Result<Response, ApiError> {
    let method = request.method();
    let url = request.url();
    let response = request.send().await.map_err(|e| {
        log::error!("{:?} {} failed: {}", method, url, e);
        ApiError::Network(e.to_string())
    })?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("{:?} {} returned {}", method, url, status);
    Err(ApiError::from_status(status, &body))
}

pub async fn read_json<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins() {
        let err = ApiError::from_status(400, r#"{"message":"National ID already exists"}"#);
        assert_eq!(err.server_message(), Some("National ID already exists"));
        assert_eq!(err.to_string(), "National ID already exists");
        assert!(matches!(err, ApiError::Status { status: 400, .. }));
    }

    #[test]
    fn test_status_fallbacks() {
        assert_eq!(
            ApiError::from_status(404, "").to_string(),
            "Resource not found"
        );
        assert_eq!(
            ApiError::from_status(403, "<html/>").to_string(),
            "You do not have permission to perform this action"
        );
        assert_eq!(
            ApiError::from_status(500, r#"{"message":"  "}"#).to_string(),
            "Server error occurred. Please try again later"
        );
        assert_eq!(
            ApiError::from_status(409, "{}").to_string(),
            "Request failed with status 409"
        );
    }

    #[test]
    fn test_message_or_uses_fallback_without_server_message() {
        let err = ApiError::from_status(404, "");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.message_or("Failed to save customer."), "Failed to save customer.");

        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.message_or("Try again"), "Try again");
    }

    #[test]
    fn test_client_url_joins_paths() {
        let client = ApiClient::new("http://localhost:5197/api/", None);
        assert_eq!(
            client.url("/Customer/42"),
            "http://localhost:5197/api/Customer/42"
        );
    }
}
