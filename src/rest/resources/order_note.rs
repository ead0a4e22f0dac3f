//! OrderNote resource implementation.
//!
//! Order notes are nested under an order and cannot be updated:
//! - `GET /orders/{order_id}/notes` and `POST /orders/{order_id}/notes`
//! - `GET /orders/{order_id}/notes/{id}` and `DELETE /orders/{order_id}/notes/{id}`

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::resources::common::Links;
use crate::rest::{Creatable, Deletable, RestResource};

/// A note attached to an order.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::resources::OrderNote;
///
/// let note = OrderNote {
///     note: Some("Order ok!!!".to_string()),
///     customer_note: Some(true),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderNote {
    /// The unique identifier of the note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Note author. Read-only.
    #[serde(skip_serializing)]
    pub author: Option<String>,

    /// When the note was created, in the site's timezone. Read-only.
    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    /// When the note was created, as GMT. Read-only.
    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    /// Note content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Whether the note is shown to the customer and emailed to them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_note: Option<bool>,

    /// Attribute the note to the current API user. Write-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by_user: Option<bool>,

    /// Hypermedia links. Read-only.
    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl RestResource for OrderNote {
    type Id = u64;
    type ListOptions = OrderNoteListOptions;

    const NAME: &'static str = "OrderNote";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Creatable for OrderNote {}
impl Deletable for OrderNote {}

/// Parameters for listing order notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderNoteListOptions {
    /// Limit to `any`, `customer` or `internal` notes.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub note_type: Option<String>,
}
