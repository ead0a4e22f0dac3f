//! Webhook resource implementation.
//!
//! Manages webhook subscriptions at `/webhooks`. Verifying deliveries is done
//! by [`crate::webhooks`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::resources::common::Links;
use crate::rest::{Batchable, Creatable, Deletable, ListOptions, RestResource, Updatable};

/// A webhook subscription.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::resources::Webhook;
///
/// let webhook = Webhook {
///     name: Some("Order updated".to_string()),
///     topic: Some("order.updated".to_string()),
///     delivery_url: Some("https://example.com/hooks/orders".to_string()),
///     secret: Some("shared-secret".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Webhook {
    /// The unique identifier of the webhook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Friendly name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Status: `active`, `paused` or `disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Topic, e.g. `order.created`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// Resource part of the topic. Read-only.
    #[serde(skip_serializing)]
    pub resource: Option<String>,

    /// Event part of the topic. Read-only.
    #[serde(skip_serializing)]
    pub event: Option<String>,

    /// WordPress hooks behind the topic. Read-only.
    #[serde(skip_serializing)]
    pub hooks: Option<Vec<String>>,

    /// URL the payload is delivered to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_url: Option<String>,

    /// Secret used to sign deliveries. Write-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// When the webhook was created, in the site's timezone. Read-only.
    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    /// When the webhook was created, as GMT. Read-only.
    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    /// When the webhook was last modified, in the site's timezone. Read-only.
    #[serde(skip_serializing)]
    pub date_modified: Option<NaiveDateTime>,

    /// When the webhook was last modified, as GMT. Read-only.
    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<NaiveDateTime>,

    /// Hypermedia links. Read-only.
    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl RestResource for Webhook {
    type Id = u64;
    type ListOptions = WebhookListOptions;

    const NAME: &'static str = "Webhook";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Creatable for Webhook {}
impl Updatable for Webhook {}
impl Deletable for Webhook {}
impl Batchable for Webhook {}

/// Parameters for listing webhooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebhookListOptions {
    /// Shared paging and filtering parameters.
    #[serde(flatten)]
    pub list: ListOptions,

    /// Limit to a status: `all`, `active`, `paused` or `disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
