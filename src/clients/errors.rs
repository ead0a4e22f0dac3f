//! HTTP-specific error types for the WooCommerce API client.
//!
//! This module contains the error taxonomy of the transport core.
//!
//! # Error Handling
//!
//! - [`ResponseError`]: A non-2xx response, with the decoded error body
//! - [`RateLimitError`]: A `429 Too Many Requests` response plus its `Retry-After` delay
//! - [`ResponseDecodingError`]: A response body that could not be decoded
//! - [`HttpError`]: Unified error type encompassing all transport errors
//!
//! Only [`HttpError::RateLimit`] and a [`HttpError::Response`] with status 503
//! are retried by the client; everything else surfaces on the first attempt.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::clients::HttpError;
//!
//! match client.orders().get(17, None).await {
//!     Ok(order) => println!("Order {:?}", order.id),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.status, e.message),
//!     Err(HttpError::RateLimit(e)) => println!("Retry after {}s", e.retry_after),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use std::fmt;

use thiserror::Error;

/// Error returned when the store answers with a non-successful status.
///
/// The fields are decoded from the WooCommerce error body
/// `{"error": ..., "errors": ...}` or the WordPress REST shape
/// `{"code": ..., "message": ...}`. A response without a body yields an empty
/// `message`; `Display` then falls back to the status reason phrase.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::ResponseError;
///
/// let error = ResponseError::new(404, "no such resource");
/// assert_eq!(error.to_string(), "no such resource");
///
/// let empty = ResponseError::new(502, "");
/// assert_eq!(empty.to_string(), "502 Bad Gateway");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The error message.
    pub message: String,
    /// The machine-readable error code, e.g. `woocommerce_rest_invalid_id`.
    pub code: Option<String>,
    /// Flattened per-field or per-item error strings.
    pub data: Vec<String>,
}

impl ResponseError {
    /// Creates a response error with a status and message and no auxiliary data.
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
            data: Vec::new(),
        }
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.message.is_empty() {
            return f.write_str(&self.message);
        }
        match reqwest::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
        {
            Some(reason) => write!(f, "{} {reason}", self.status),
            None => write!(f, "HTTP status {}", self.status),
        }
    }
}

impl std::error::Error for ResponseError {}

/// Error returned when the store answers `429 Too Many Requests`.
///
/// `retry_after` is the `Retry-After` header in whole seconds, with any
/// fractional part truncated. A missing or unparseable header yields `0`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{error} (retry after {retry_after}s)")]
pub struct RateLimitError {
    /// The underlying response error.
    pub error: ResponseError,
    /// Seconds to wait before the next attempt.
    pub retry_after: u64,
}

/// Error returned when a response body could not be decoded.
///
/// Raised either for a non-2xx body that is not a JSON error object, or for a
/// 2xx body that does not match the expected result type. Never retried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("failed to decode response body (status {status}): {message}")]
pub struct ResponseDecodingError {
    /// The raw response body.
    pub body: Vec<u8>,
    /// The decoder's error message.
    pub message: String,
    /// The HTTP status code of the response.
    pub status: u16,
}

impl ResponseDecodingError {
    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Unified error type for all HTTP-related errors.
///
/// Use pattern matching to handle specific failure modes.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network or connection error, including timeouts. Never retried.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request body or query options could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The request URL could not be built.
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// The query options did not serialize to a flat set of parameters.
    #[error("Invalid query options: {reason}")]
    InvalidQuery {
        /// Why the options were rejected.
        reason: String,
    },

    /// A non-2xx response other than a rate limit.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// A `429 Too Many Requests` response.
    #[error(transparent)]
    RateLimit(#[from] RateLimitError),

    /// A response body that could not be decoded.
    #[error(transparent)]
    ResponseDecoding(#[from] ResponseDecodingError),

    /// An update was requested for a resource that has no id.
    #[error("Cannot update {resource} without an id.")]
    MissingResourceId {
        /// The resource name, e.g. `Order`.
        resource: &'static str,
    },
}

impl HttpError {
    /// Returns the HTTP status of the response that caused this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.status),
            Self::RateLimit(e) => Some(e.error.status),
            Self::ResponseDecoding(e) => Some(e.status),
            _ => None,
        }
    }
}
