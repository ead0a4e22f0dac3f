//! Verification of incoming WooCommerce webhook deliveries.
//!
//! WooCommerce signs every delivery with HMAC-SHA256 over the raw request
//! body, keyed with the secret configured on the
//! [`Webhook`](crate::rest::resources::Webhook), and sends the base64 result in
//! the `X-WC-Webhook-Signature` header.
//!
//! - [`WebhookRequest`]: The raw body and `X-WC-Webhook-*` headers of a delivery
//! - [`verify_webhook`]: Checks the signature and returns a [`WebhookContext`]
//! - [`compute_signature`] / [`verify_signature`]: Low-level helpers
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::webhooks::{compute_signature, verify_webhook, WebhookRequest};
//!
//! let body = br#"{"id":727}"#;
//! let request = WebhookRequest::new(body.to_vec())
//!     .with_signature(compute_signature(body, "shared-secret"))
//!     .with_topic("order.updated");
//!
//! let context = verify_webhook("shared-secret", &request).unwrap();
//! assert_eq!(context.topic(), Some("order.updated"));
//! assert_eq!(context.resource(), Some("order"));
//! ```
//!
//! All signature comparisons are constant-time.

mod errors;
mod verification;

pub use errors::WebhookError;
pub use verification::{
    compute_signature, verify_signature, verify_webhook, WebhookContext, WebhookRequest,
    HEADER_DELIVERY_ID, HEADER_EVENT, HEADER_RESOURCE, HEADER_SIGNATURE, HEADER_SOURCE,
    HEADER_TOPIC, HEADER_WEBHOOK_ID,
};
