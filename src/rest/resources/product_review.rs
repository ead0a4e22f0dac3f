//! ProductReview resource implementation.
//!
//! Reviews live at `/products/reviews`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::resources::common::Links;
use crate::rest::{Batchable, Creatable, Deletable, ListOptions, RestResource, Updatable};

/// A product review.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductReview {
    /// The unique identifier of the review.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// When the review was created, in the site's timezone. Read-only.
    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    /// When the review was created, as GMT. Read-only.
    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    /// Reviewed product id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Review status: `approved`, `hold`, `spam`, `unspam`, `trash` or `untrash`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Reviewer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,

    /// Reviewer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_email: Option<String>,

    /// Review content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,

    /// Rating from 0 to 5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,

    /// Whether the reviewer bought the product. Read-only.
    #[serde(skip_serializing)]
    pub verified: Option<bool>,

    /// Hypermedia links. Read-only.
    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl RestResource for ProductReview {
    type Id = u64;
    type ListOptions = ReviewListOptions;

    const NAME: &'static str = "ProductReview";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Creatable for ProductReview {}
impl Updatable for ProductReview {}
impl Deletable for ProductReview {}
impl Batchable for ProductReview {}

/// Parameters for listing reviews.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewListOptions {
    /// Shared paging and filtering parameters.
    #[serde(flatten)]
    pub list: ListOptions,

    /// Limit to reviews of these products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Vec<u64>>,

    /// Limit to a status: `all`, `hold`, `approved`, `spam` or `trash`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Limit to reviews by these reviewer ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<Vec<u64>>,

    /// Limit to reviews by these emails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_email: Option<String>,
}
