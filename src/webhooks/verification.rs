//! Webhook signature verification.
//!
//! WooCommerce computes `base64(HMAC-SHA256(body, secret))` over the exact
//! bytes it posts, so verification must run on the raw body before it is
//! parsed.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::webhooks::WebhookError;

type HmacSha256 = Hmac<Sha256>;

// ============================================================================
// Header Constants
// ============================================================================

/// HTTP header carrying the base64 HMAC-SHA256 signature of the body.
pub const HEADER_SIGNATURE: &str = "X-WC-Webhook-Signature";

/// HTTP header carrying the webhook topic, e.g. `order.created`.
pub const HEADER_TOPIC: &str = "X-WC-Webhook-Topic";

/// HTTP header carrying the resource part of the topic, e.g. `order`.
pub const HEADER_RESOURCE: &str = "X-WC-Webhook-Resource";

/// HTTP header carrying the event part of the topic, e.g. `created`.
pub const HEADER_EVENT: &str = "X-WC-Webhook-Event";

/// HTTP header carrying the id of the webhook subscription.
pub const HEADER_WEBHOOK_ID: &str = "X-WC-Webhook-ID";

/// HTTP header carrying the id of this delivery.
pub const HEADER_DELIVERY_ID: &str = "X-WC-Webhook-Delivery-ID";

/// HTTP header carrying the URL of the store that sent the delivery.
pub const HEADER_SOURCE: &str = "X-WC-Webhook-Source";

// ============================================================================
// WebhookRequest
// ============================================================================

/// An incoming webhook delivery: the raw body and its `X-WC-Webhook-*` headers.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::webhooks::WebhookRequest;
///
/// let request = WebhookRequest::from_headers(
///     b"{}".to_vec(),
///     [
///         ("x-wc-webhook-signature", "c2lnbmF0dXJl"),
///         ("x-wc-webhook-topic", "product.deleted"),
///         ("content-type", "application/json"),
///     ],
/// );
/// assert_eq!(request.signature(), Some("c2lnbmF0dXJl"));
/// assert_eq!(request.topic(), Some("product.deleted"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookRequest {
    body: Vec<u8>,
    signature: Option<String>,
    topic: Option<String>,
    resource: Option<String>,
    event: Option<String>,
    webhook_id: Option<String>,
    delivery_id: Option<String>,
    source: Option<String>,
}

impl WebhookRequest {
    /// Creates a request with the given raw body and no headers.
    #[must_use]
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            body,
            ..Self::default()
        }
    }

    /// Creates a request from the raw body and the HTTP headers of the delivery.
    ///
    /// Header names are matched case-insensitively; unrelated headers are
    /// ignored.
    #[must_use]
    pub fn from_headers<'a, I>(body: Vec<u8>, headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut request = Self::new(body);
        for (name, value) in headers {
            let value = Some(value.trim().to_string());
            if name.eq_ignore_ascii_case(HEADER_SIGNATURE) {
                request.signature = value;
            } else if name.eq_ignore_ascii_case(HEADER_TOPIC) {
                request.topic = value;
            } else if name.eq_ignore_ascii_case(HEADER_RESOURCE) {
                request.resource = value;
            } else if name.eq_ignore_ascii_case(HEADER_EVENT) {
                request.event = value;
            } else if name.eq_ignore_ascii_case(HEADER_WEBHOOK_ID) {
                request.webhook_id = value;
            } else if name.eq_ignore_ascii_case(HEADER_DELIVERY_ID) {
                request.delivery_id = value;
            } else if name.eq_ignore_ascii_case(HEADER_SOURCE) {
                request.source = value;
            }
        }
        request
    }

    /// Sets the signature header value.
    #[must_use]
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Sets the topic header value.
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Returns the raw request body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the signature header value, if present.
    #[must_use]
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Returns the topic header value, if present.
    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Returns the resource header value, if present.
    #[must_use]
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Returns the event header value, if present.
    #[must_use]
    pub fn event(&self) -> Option<&str> {
        self.event.as_deref()
    }

    /// Returns the webhook id header value, if present.
    #[must_use]
    pub fn webhook_id(&self) -> Option<&str> {
        self.webhook_id.as_deref()
    }

    /// Returns the delivery id header value, if present.
    #[must_use]
    pub fn delivery_id(&self) -> Option<&str> {
        self.delivery_id.as_deref()
    }

    /// Returns the source header value, if present.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

// ============================================================================
// WebhookContext
// ============================================================================

/// Metadata of a delivery whose signature has been verified.
///
/// When the store omits the resource or event header, they are taken from
/// the `resource.event` topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookContext {
    topic: Option<String>,
    resource: Option<String>,
    event: Option<String>,
    webhook_id: Option<String>,
    delivery_id: Option<String>,
    source: Option<String>,
}

impl WebhookContext {
    fn from_request(request: &WebhookRequest) -> Self {
        let (topic_resource, topic_event) = request
            .topic()
            .and_then(|topic| topic.split_once('.'))
            .map_or((None, None), |(resource, event)| {
                (Some(resource.to_string()), Some(event.to_string()))
            });

        Self {
            topic: request.topic.clone(),
            resource: request.resource.clone().or(topic_resource),
            event: request.event.clone().or(topic_event),
            webhook_id: request.webhook_id.clone(),
            delivery_id: request.delivery_id.clone(),
            source: request.source.clone(),
        }
    }

    /// Returns the topic, e.g. `order.created`.
    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Returns the resource, e.g. `order`.
    #[must_use]
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Returns the event, e.g. `created`.
    #[must_use]
    pub fn event(&self) -> Option<&str> {
        self.event.as_deref()
    }

    /// Returns the id of the webhook subscription.
    #[must_use]
    pub fn webhook_id(&self) -> Option<&str> {
        self.webhook_id.as_deref()
    }

    /// Returns the id of this delivery.
    #[must_use]
    pub fn delivery_id(&self) -> Option<&str> {
        self.delivery_id.as_deref()
    }

    /// Returns the URL of the sending store.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

// ============================================================================
// Verification Functions
// ============================================================================

/// Computes the base64 HMAC-SHA256 signature WooCommerce sends for `body`.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::webhooks::compute_signature;
///
/// let signature = compute_signature(b"payload", "secret");
/// assert_eq!(signature.len(), 44);
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(body: &[u8], secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(body);
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Checks a signature header value against `body` and `secret` in constant time.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::webhooks::{compute_signature, verify_signature};
///
/// let signature = compute_signature(b"payload", "secret");
/// assert!(verify_signature(b"payload", &signature, "secret"));
/// assert!(!verify_signature(b"payload", &signature, "other"));
/// ```
#[must_use]
pub fn verify_signature(body: &[u8], signature: &str, secret: &str) -> bool {
    let expected = compute_signature(body, secret);
    expected.as_bytes().ct_eq(signature.trim().as_bytes()).into()
}

/// Verifies a delivery and returns its metadata.
///
/// # Errors
///
/// Returns [`WebhookError::MissingSignature`] if the request has no signature,
/// or [`WebhookError::InvalidSignature`] if it does not match.
pub fn verify_webhook(
    secret: &str,
    request: &WebhookRequest,
) -> Result<WebhookContext, WebhookError> {
    let signature = request.signature().ok_or(WebhookError::MissingSignature)?;
    if !verify_signature(request.body(), signature, secret) {
        return Err(WebhookError::InvalidSignature);
    }
    Ok(WebhookContext::from_request(request))
}
