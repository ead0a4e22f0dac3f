//! PaymentGateway resource implementation.
//!
//! Gateways are installed by plugins, so they can only be listed, retrieved
//! and updated:
//! - `GET /payment_gateways`
//! - `GET /payment_gateways/{id}` and `PUT /payment_gateways/{id}`
//!
//! Gateway ids are strings such as `bacs` or `paypal`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::rest::resources::common::Links;
use crate::rest::{ListOptions, RestResource, Updatable};

/// A payment gateway.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::resources::PaymentGateway;
///
/// let gateway = PaymentGateway {
///     id: Some("bacs".to_string()),
///     enabled: Some(true),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaymentGateway {
    /// Gateway id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Title shown at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description shown at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Checkout sort order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    /// Whether the gateway is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Method title. Read-only.
    #[serde(skip_serializing)]
    pub method_title: Option<String>,

    /// Method description. Read-only.
    #[serde(skip_serializing)]
    pub method_description: Option<String>,

    /// Supported features, e.g. `products` or `refunds`. Read-only.
    #[serde(skip_serializing)]
    pub method_supports: Option<Vec<String>>,

    /// Gateway settings, keyed by setting id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<HashMap<String, PaymentGatewaySetting>>,

    /// Hypermedia links. Read-only.
    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl RestResource for PaymentGateway {
    type Id = String;
    type ListOptions = ListOptions;

    const NAME: &'static str = "PaymentGateway";

    fn id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}

impl Updatable for PaymentGateway {}

/// One setting of a payment gateway.
///
/// Only `value` is writable.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaymentGatewaySetting {
    /// Setting id. Read-only.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// Setting label. Read-only.
    #[serde(skip_serializing)]
    pub label: Option<String>,

    /// Setting description. Read-only.
    #[serde(skip_serializing)]
    pub description: Option<String>,

    /// Input type, e.g. `text` or `checkbox`. Read-only.
    #[serde(rename = "type", skip_serializing)]
    pub setting_type: Option<String>,

    /// Current value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Default value. Read-only.
    #[serde(skip_serializing)]
    pub default: Option<String>,

    /// Help text. Read-only.
    #[serde(skip_serializing)]
    pub tip: Option<String>,

    /// Input placeholder. Read-only.
    #[serde(skip_serializing)]
    pub placeholder: Option<String>,
}
