//! Webhook-specific error types.

use thiserror::Error;

/// Error type for webhook delivery verification.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::webhooks::WebhookError;
///
/// let error = WebhookError::InvalidSignature;
/// assert!(error.to_string().contains("signature"));
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WebhookError {
    /// The delivery carried no `X-WC-Webhook-Signature` header.
    #[error("Webhook delivery is missing the X-WC-Webhook-Signature header")]
    MissingSignature,

    /// The signature does not match the body and secret.
    #[error("Webhook signature verification failed")]
    InvalidSignature,
}
