//! HTTP request types for the WooCommerce API client.
//!
//! This module provides the [`HttpRequest`] type, which resolves a relative
//! resource path against the configured store, encodes query options and the
//! JSON body, and attaches the standard headers and Basic credentials.

use std::collections::HashMap;
use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::clients::errors::HttpError;
use crate::clients::http_client::SDK_VERSION;
use crate::config::WooCommerceConfig;

/// HTTP methods used by the WooCommerce REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and batches.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A fully-formed request to the WooCommerce REST API.
///
/// Built fresh for each logical call; the same body bytes are resent on
/// every retry.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::{HttpMethod, HttpRequest};
/// use woocommerce_api::{ConsumerKey, ConsumerSecret, ShopUrl, WooCommerceConfig};
/// use serde_json::json;
///
/// let config = WooCommerceConfig::builder()
///     .consumer_key(ConsumerKey::new("ck_key").unwrap())
///     .consumer_secret(ConsumerSecret::new("cs_secret").unwrap())
///     .shop(ShopUrl::new("shop.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// let request = HttpRequest::new(
///     &config,
///     HttpMethod::Get,
///     "orders?status=processing",
///     None::<&()>,
///     Some(&json!({"page": 2})),
/// )
/// .unwrap();
///
/// assert_eq!(
///     request.url.as_str(),
///     "https://shop.example.com/wp-json/wc/v3/orders?page=2&status=processing"
/// );
/// ```
#[derive(Clone)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute URL, including the encoded query.
    pub url: Url,
    /// Headers sent with every attempt.
    pub headers: HashMap<String, String>,
    /// The JSON-encoded body, if any.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Builds a request for `path`, relative to the configured API prefix.
    ///
    /// A leading `/` on `path` is ignored. Query parameters already present
    /// on `path` are kept and placed after the parameters derived from
    /// `options`; a key present in both is sent twice.
    ///
    /// # Arguments
    ///
    /// * `config` - The client configuration providing store URL and credentials
    /// * `method` - The HTTP method
    /// * `path` - The resource path, e.g. `orders/17`
    /// * `body` - An optional value serialized as the JSON body
    /// * `options` - An optional value serialized into query parameters
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Url`] if the path cannot be resolved,
    /// [`HttpError::Encoding`] if the body or options cannot be serialized, and
    /// [`HttpError::InvalidQuery`] if the options do not serialize to an object.
    pub fn new<B, O>(
        config: &WooCommerceConfig,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        options: Option<&O>,
    ) -> Result<Self, HttpError>
    where
        B: Serialize + ?Sized,
        O: Serialize + ?Sized,
    {
        let relative = path.trim_start_matches('/');
        let mut url = config
            .shop()
            .url()
            .join(&format!("{}/{relative}", config.path_prefix()))?;

        if let Some(options) = options {
            let mut pairs = serialize_to_query(options)?;
            pairs.extend(url.query_pairs().into_owned());
            if pairs.is_empty() {
                url.set_query(None);
            } else {
                url.query_pairs_mut().clear().extend_pairs(&pairs);
            }
        }

        let body = body.map(serde_json::to_vec).transpose()?;

        Ok(Self {
            method,
            url,
            headers: default_headers(config),
            body,
        })
    }

    /// Returns the body as text, if any.
    #[must_use]
    pub fn body_text(&self) -> Option<String> {
        self.body
            .as_deref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: HashMap<&str, &str> = self
            .headers
            .iter()
            .map(|(k, v)| {
                if k.eq_ignore_ascii_case("authorization") {
                    (k.as_str(), "*****")
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect();
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .field("body", &self.body_text())
            .finish()
    }
}

/// Builds the headers attached to every request.
fn default_headers(config: &WooCommerceConfig) -> HashMap<String, String> {
    let user_agent_prefix = config
        .user_agent_prefix()
        .map_or(String::new(), |prefix| format!("{prefix} | "));
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    let user_agent =
        format!("{user_agent_prefix}WooCommerce API Library v{SDK_VERSION} | Rust {rust_version}");

    let credentials = format!(
        "{}:{}",
        config.consumer_key().as_ref(),
        config.consumer_secret().as_ref()
    );

    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers.insert("User-Agent".to_string(), user_agent);
    headers.insert(
        "Authorization".to_string(),
        format!("Basic {}", STANDARD.encode(credentials)),
    );
    headers
}

/// Serializes an options value into query parameters.
///
/// The value must serialize to a JSON object (or `null`, meaning no
/// parameters). `null` fields are skipped, sequences are joined with commas
/// and nested objects are sent as JSON text. Keys come out in sorted order.
///
/// # Errors
///
/// Returns [`HttpError::Encoding`] if serialization fails, or
/// [`HttpError::InvalidQuery`] if the value is not an object.
pub fn serialize_to_query<T: Serialize + ?Sized>(
    options: &T,
) -> Result<Vec<(String, String)>, HttpError> {
    let map = match serde_json::to_value(options)? {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(HttpError::InvalidQuery {
                reason: format!("expected an object of named parameters, got {other}"),
            })
        }
    };

    let mut query = Vec::with_capacity(map.len());
    for (key, val) in map {
        match val {
            Value::Null => {}
            Value::Array(items) => {
                let values: Vec<String> = items
                    .iter()
                    .filter(|v| !v.is_null())
                    .map(scalar_to_string)
                    .collect();
                if !values.is_empty() {
                    query.push((key, values.join(",")));
                }
            }
            other => query.push((key, scalar_to_string(&other))),
        }
    }
    Ok(query)
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
