//! HTTP response types and status classification.
//!
//! This module provides the [`HttpResponse`] type returned by successful calls,
//! and [`classify`], which turns a completed response into a [`Classification`]
//! the retry loop can branch on exhaustively.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::clients::errors::{HttpError, RateLimitError, ResponseDecodingError, ResponseError};

/// Header carrying the total number of items of a list endpoint.
pub const TOTAL_HEADER: &str = "x-wp-total";

/// Header carrying the total number of pages of a list endpoint.
pub const TOTAL_PAGES_HEADER: &str = "x-wp-totalpages";

/// Header carrying the rate-limit delay in seconds.
pub const RETRY_AFTER_HEADER: &str = "retry-after";

/// Maximum number of body bytes included in debug logs.
pub(crate) const LOG_BODY_LIMIT: usize = 1024;

/// The outcome of inspecting a completed HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// A 2xx response; the body is left for the caller to decode.
    Success,
    /// A non-2xx response other than a rate limit.
    Response(ResponseError),
    /// A `429 Too Many Requests` response.
    RateLimit(RateLimitError),
    /// A non-2xx response whose body is not a JSON error object.
    Decoding(ResponseDecodingError),
}

/// Wire shape of an error body.
///
/// WooCommerce answers `{"error": ..., "errors": ...}`; the WordPress REST
/// layer answers `{"code": ..., "message": ..., "data": ...}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Option<Value>,
    #[serde(default)]
    code: Option<Value>,
    #[serde(default)]
    message: Option<Value>,
}

/// Classifies a completed response.
///
/// Status codes in `200..300` are [`Classification::Success`]. For any other
/// status a non-empty body must be a JSON error object (or `null`); anything
/// else yields [`Classification::Decoding`]. The resulting [`ResponseError`] is
/// then specialised by [`wrap_specific_error`].
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use woocommerce_api::clients::{classify, Classification};
///
/// let body = br#"{"error":"not_found","errors":"no such resource"}"#;
/// match classify(404, &HashMap::new(), body) {
///     Classification::Response(e) => assert_eq!(e.message, "no such resource"),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
#[must_use]
pub fn classify(
    status: u16,
    headers: &HashMap<String, Vec<String>>,
    body: &[u8],
) -> Classification {
    if (200..300).contains(&status) {
        return Classification::Success;
    }

    let mut error = ResponseError {
        status,
        ..ResponseError::default()
    };

    if !body.is_empty() {
        match serde_json::from_slice::<Option<ErrorBody>>(body) {
            Ok(decoded) => apply_error_body(&mut error, decoded.unwrap_or_default()),
            Err(e) => {
                return Classification::Decoding(ResponseDecodingError {
                    body: body.to_vec(),
                    message: e.to_string(),
                    status,
                })
            }
        }
    }

    wrap_specific_error(error, headers)
}

fn apply_error_body(error: &mut ResponseError, body: ErrorBody) {
    error.code = body.code.and_then(into_string);
    if let Some(message) = body.error.or_else(|| body.message.and_then(into_string)) {
        error.message = message;
    }

    match body.errors {
        Some(Value::String(message)) => error.message = message,
        Some(Value::Array(items)) => {
            error.data.extend(items.iter().map(value_to_string));
            error.message = error.data.join(", ");
        }
        Some(Value::Object(fields)) => {
            for (field, messages) in &fields {
                let messages = match messages {
                    Value::Array(items) => items.iter().map(value_to_string).collect(),
                    other => vec![value_to_string(other)],
                };
                for message in messages {
                    let entry = format!("{field}: {message}");
                    if error.message.is_empty() {
                        error.message.clone_from(&entry);
                    }
                    error.data.push(entry);
                }
            }
        }
        _ => {}
    }
}

/// Keeps string values only; the WordPress fields are informational.
fn into_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        _ => None,
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Specialises a response error by status.
///
/// A 429 becomes a [`RateLimitError`] carrying the `Retry-After` header in
/// whole seconds (fraction truncated, `0` when absent or unparseable). A 406
/// gets the standard `Not Acceptable` message.
#[must_use]
pub fn wrap_specific_error(
    mut error: ResponseError,
    headers: &HashMap<String, Vec<String>>,
) -> Classification {
    match error.status {
        429 => Classification::RateLimit(RateLimitError {
            retry_after: retry_after_secs(headers),
            error,
        }),
        406 => {
            error.message = "Not Acceptable".to_string();
            Classification::Response(error)
        }
        _ => Classification::Response(error),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn retry_after_secs(headers: &HashMap<String, Vec<String>>) -> u64 {
    headers
        .get(RETRY_AFTER_HEADER)
        .and_then(|values| values.first())
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|secs| secs.is_finite() && *secs > 0.0)
        .map_or(0, |secs| secs.trunc() as u64)
}

/// A successful response from the WooCommerce REST API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
    /// The number of physical attempts the call took.
    pub attempts: u32,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        status: u16,
        headers: HashMap<String, Vec<String>>,
        body: Vec<u8>,
        attempts: u32,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            attempts,
        }
    }

    /// Returns `true` if the status code is in `200..300`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the first value of the named header (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the total item count of a list endpoint (`X-WP-Total`).
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.header(TOTAL_HEADER).and_then(|v| v.trim().parse().ok())
    }

    /// Returns the total page count of a list endpoint (`X-WP-TotalPages`).
    #[must_use]
    pub fn total_pages(&self) -> Option<u64> {
        self.header(TOTAL_PAGES_HEADER)
            .and_then(|v| v.trim().parse().ok())
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decodes the JSON body. An empty body decodes as `null`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::ResponseDecoding`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        let bytes: &[u8] = if self.body.is_empty() {
            b"null"
        } else {
            &self.body
        };
        serde_json::from_slice(bytes).map_err(|e| {
            HttpError::ResponseDecoding(ResponseDecodingError {
                body: self.body.clone(),
                message: e.to_string(),
                status: self.status,
            })
        })
    }
}

/// Parses response headers into a `HashMap` keyed by lowercase name.
pub(crate) fn parse_response_headers(
    headers: &reqwest::header::HeaderMap,
) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        let value = value.to_str().unwrap_or_default().to_string();
        result.entry(key).or_default().push(value);
    }
    result
}

/// Returns at most [`LOG_BODY_LIMIT`] bytes of `body`, cut on a char boundary.
pub(crate) fn body_snippet(body: &[u8]) -> Cow<'_, str> {
    let text = String::from_utf8_lossy(body);
    if text.len() <= LOG_BODY_LIMIT {
        return text;
    }
    let mut end = LOG_BODY_LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!("{}...", &text[..end]))
}
