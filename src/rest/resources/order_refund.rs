//! OrderRefund resource implementation.
//!
//! Refunds are nested under an order and cannot be updated:
//! - `GET /orders/{order_id}/refunds` and `POST /orders/{order_id}/refunds`
//! - `GET /orders/{order_id}/refunds/{id}` and `DELETE /orders/{order_id}/refunds/{id}`
//!
//! Refunds only support permanent deletion; pass
//! [`DeleteOptions::force`](crate::rest::DeleteOptions::force).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::resources::common::{Links, MetaData};
use crate::rest::{Creatable, Deletable, ListOptions, RestResource};

/// A refund issued against an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderRefund {
    /// The unique identifier of the refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// When the refund was created, in the site's timezone. Read-only.
    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    /// When the refund was created, as GMT. Read-only.
    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    /// Refund amount, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// Reason for the refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// User id of the user who created the refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunded_by: Option<u64>,

    /// Whether the payment was refunded through the gateway. Read-only.
    #[serde(skip_serializing)]
    pub refunded_payment: Option<bool>,

    /// Custom meta entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,

    /// Refund through the payment gateway's API when possible. Write-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_refund: Option<bool>,

    /// Hypermedia links. Read-only.
    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl RestResource for OrderRefund {
    type Id = u64;
    type ListOptions = ListOptions;

    const NAME: &'static str = "OrderRefund";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Creatable for OrderRefund {}
impl Deletable for OrderRefund {}
