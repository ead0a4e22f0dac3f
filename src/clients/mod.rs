//! HTTP transport for WooCommerce REST API communication.
//!
//! This module provides the layer every resource call goes through: request
//! construction with Basic authentication, response classification, and the
//! bounded retry loop.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client with Get/Post/Put/Delete primitives
//! - [`HttpRequest`]: A fully-formed request to the API
//! - [`HttpResponse`]: A successful response, with its attempt count
//! - [`Classification`]: The outcome of inspecting a response
//! - [`HttpError`]: The transport error taxonomy
//!
//! # Retry Behavior
//!
//! The retry budget comes from [`WooCommerceConfig::retries`](crate::WooCommerceConfig::retries):
//!
//! - **429 (Too Many Requests)**: Waits `Retry-After` seconds, then retries
//! - **503 (Service Unavailable)**: Retries at once
//! - **Everything else**: Returned immediately
//!
//! A budget of `N` allows at most `N` attempts; `0` and `1` both mean a single attempt.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, RateLimitError, ResponseDecodingError, ResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{serialize_to_query, HttpMethod, HttpRequest};
pub use http_response::{
    classify, wrap_specific_error, Classification, HttpResponse, RETRY_AFTER_HEADER,
    TOTAL_HEADER, TOTAL_PAGES_HEADER,
};
