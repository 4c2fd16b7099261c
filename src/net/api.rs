//! REST helpers for communicating with the HR backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures surface as [`ApiError`]; auth flows resolve them to a
//! user-facing message via [`resolve_error_message`], listing flows collapse
//! them to a flag at the fetch boundary. Nothing here panics.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

#[cfg(feature = "hydrate")]
use super::types::ApiEnvelope;
use super::types::{Credentials, LoginData, UserProfile};
#[cfg(feature = "hydrate")]
use serde::{Serialize, de::DeserializeOwned};

/// Shown when no better message can be extracted from a failure.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Transport-level failure for any backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    Network(String),
    /// The server answered with a non-success status or a failure envelope;
    /// the raw body is kept for message resolution.
    Http { status: u16, body: String },
    /// The response arrived but could not be decoded.
    Parse(String),
}

impl ApiError {
    /// Stub error returned by SSR code paths that cannot reach the network.
    pub fn unavailable() -> Self {
        ApiError::Network("not available on server".to_owned())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(message) => write!(formatter, "network error: {message}"),
            ApiError::Http { status, .. } => write!(formatter, "request failed ({status})"),
            ApiError::Parse(message) => write!(formatter, "response error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Longest error-body excerpt surfaced to the UI.
const MAX_MESSAGE_CHARS: usize = 200;

/// Resolve a user-facing message from a failed call.
///
/// For HTTP failures the body is checked in order: structured
/// `error.message`, top-level `message`, raw string `error` field, then the
/// raw body itself when it is not JSON. Transport and decode failures
/// surface their own message. Anything else falls back to a generic line.
pub fn resolve_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Http { body, .. } => {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
                let structured = value
                    .pointer("/error/message")
                    .and_then(serde_json::Value::as_str)
                    .or_else(|| value.get("message").and_then(serde_json::Value::as_str))
                    .or_else(|| value.get("error").and_then(serde_json::Value::as_str))
                    .or_else(|| value.as_str());
                match structured {
                    Some(message) if !message.trim().is_empty() => truncate_message(message),
                    _ => FALLBACK_ERROR_MESSAGE.to_owned(),
                }
            } else if body.trim().is_empty() {
                FALLBACK_ERROR_MESSAGE.to_owned()
            } else {
                truncate_message(body)
            }
        }
        ApiError::Network(message) | ApiError::Parse(message) => {
            if message.trim().is_empty() {
                FALLBACK_ERROR_MESSAGE.to_owned()
            } else {
                truncate_message(message)
            }
        }
    }
}

fn truncate_message(raw: &str) -> String {
    raw.trim().chars().take(MAX_MESSAGE_CHARS).collect()
}

/// Percent-encode a query-string value. Unreserved characters pass through.
pub fn encode_query_component(raw: &str) -> String {
    use std::fmt::Write as _;

    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}

/// Resolve `path` against the configured API base URL.
#[cfg(feature = "hydrate")]
fn build_url(path: &str) -> String {
    let config = crate::util::config::AppConfig::load();
    crate::util::config::join_url(&config.api_base_url, path)
}

/// `GET path` and decode the JSON body.
#[cfg(feature = "hydrate")]
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = build_url(path);
    let response = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    decode_json_response(response).await
}

/// `POST path` with a JSON body and decode the JSON response.
#[cfg(feature = "hydrate")]
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let url = build_url(path);
    let response = gloo_net::http::Request::post(&url)
        .json(body)
        .map_err(|err| ApiError::Parse(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    decode_json_response(response).await
}

/// `DELETE path`, ignoring any response body.
#[cfg(feature = "hydrate")]
pub async fn delete_empty(path: &str) -> Result<(), ApiError> {
    let url = build_url(path);
    let response = gloo_net::http::Request::delete(&url)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(&response).await)
    }
}

#[cfg(feature = "hydrate")]
async fn decode_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Parse(err.to_string()))
    } else {
        Err(http_error(&response).await)
    }
}

#[cfg(feature = "hydrate")]
async fn http_error(response: &gloo_net::http::Response) -> ApiError {
    ApiError::Http {
        status: response.status(),
        body: response.text().await.unwrap_or_default(),
    }
}

/// Authentication collaborator contract consumed by the session manager.
///
/// Abstracted as a trait so session scenarios are testable against scripted
/// in-memory doubles.
pub trait AuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginData, ApiError>;
    async fn fetch_profile(&self) -> Result<UserProfile, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
}

impl<A: AuthApi> AuthApi for &A {
    async fn login(&self, credentials: &Credentials) -> Result<LoginData, ApiError> {
        (*self).login(credentials).await
    }

    async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        (*self).fetch_profile().await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        (*self).logout().await
    }
}

/// Production [`AuthApi`] backed by the HR backend auth endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

impl AuthApi for HttpAuthApi {
    /// `POST /api/auth/login`. The endpoint wraps both outcomes in a
    /// success/data envelope, so a `success: false` body on a 2xx status is
    /// still a failed login.
    async fn login(&self, credentials: &Credentials) -> Result<LoginData, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = build_url("/api/auth/login");
            let response = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(|err| ApiError::Parse(err.to_string()))?
                .send()
                .await
                .map_err(|err| ApiError::Network(err.to_string()))?;
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            if !response.ok() {
                return Err(ApiError::Http { status, body });
            }
            let envelope: ApiEnvelope<LoginData> = serde_json::from_str(&body)
                .map_err(|err| ApiError::Parse(err.to_string()))?;
            if !envelope.success {
                return Err(ApiError::Http { status, body });
            }
            envelope
                .data
                .ok_or_else(|| ApiError::Parse("login response missing data".to_owned()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::unavailable())
        }
    }

    /// `GET /api/auth/profile`.
    async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            get_json("/api/auth/profile").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::unavailable())
        }
    }

    /// `POST /api/auth/logout`. Callers treat the result as best-effort.
    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = build_url("/api/auth/logout");
            let response = gloo_net::http::Request::post(&url)
                .send()
                .await
                .map_err(|err| ApiError::Network(err.to_string()))?;
            if response.ok() {
                Ok(())
            } else {
                Err(http_error(&response).await)
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::unavailable())
        }
    }
}
