//! Coupon resource implementation.
//!
//! # Endpoints
//!
//! - `GET /coupons` and `POST /coupons`
//! - `GET /coupons/{id}`, `PUT /coupons/{id}`, `DELETE /coupons/{id}`
//! - `POST /coupons/batch`

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::resources::common::{Links, MetaData};
use crate::rest::{Batchable, Creatable, Deletable, ListOptions, RestResource, Updatable};

/// A discount coupon.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::resources::Coupon;
///
/// let coupon = Coupon {
///     code: Some("10off".to_string()),
///     discount_type: Some("percent".to_string()),
///     amount: Some("10".to_string()),
///     individual_use: Some(true),
///     exclude_sale_items: Some(true),
///     minimum_amount: Some("100.00".to_string()),
///     ..Default::default()
/// };
/// assert!(coupon.id.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Coupon {
    /// The unique identifier of the coupon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Coupon code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Discount amount, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// When the coupon was created, in the site's timezone. Read-only.
    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    /// When the coupon was created, as GMT. Read-only.
    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    /// When the coupon was last modified, in the site's timezone. Read-only.
    #[serde(skip_serializing)]
    pub date_modified: Option<NaiveDateTime>,

    /// When the coupon was last modified, as GMT. Read-only.
    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<NaiveDateTime>,

    /// Discount type: `percent`, `fixed_cart` or `fixed_product`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,

    /// Coupon description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the coupon expires, in the site's timezone.
    #[serde(alias = "expiry_date", skip_serializing_if = "Option::is_none")]
    pub date_expires: Option<NaiveDateTime>,

    /// When the coupon expires, as GMT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_expires_gmt: Option<NaiveDateTime>,

    /// Number of times the coupon has been used. Read-only.
    #[serde(skip_serializing)]
    pub usage_count: Option<u64>,

    /// Whether the coupon cannot be combined with other coupons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual_use: Option<bool>,

    /// Products the coupon applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<u64>>,

    /// Products the coupon does not apply to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_product_ids: Option<Vec<u64>>,

    /// How many times the coupon can be used in total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u64>,

    /// How many times the coupon can be used per customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit_per_user: Option<u64>,

    /// Maximum number of items in the cart the coupon applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_usage_to_x_items: Option<u64>,

    /// Whether the coupon grants free shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_shipping: Option<bool>,

    /// Categories the coupon applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_categories: Option<Vec<u64>>,

    /// Categories the coupon does not apply to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_product_categories: Option<Vec<u64>>,

    /// Whether the coupon skips items on sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_sale_items: Option<bool>,

    /// Minimum order amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<String>,

    /// Maximum order amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_amount: Option<String>,

    /// Billing emails allowed to use the coupon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_restrictions: Option<Vec<String>>,

    /// Users who have used the coupon. Read-only.
    #[serde(skip_serializing)]
    pub used_by: Option<Vec<String>>,

    /// Custom meta entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,

    /// Hypermedia links. Read-only.
    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl RestResource for Coupon {
    type Id = u64;
    type ListOptions = CouponListOptions;

    const NAME: &'static str = "Coupon";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Creatable for Coupon {}
impl Updatable for Coupon {}
impl Deletable for Coupon {}
impl Batchable for Coupon {}

/// Parameters for listing coupons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CouponListOptions {
    /// Shared paging and filtering parameters.
    #[serde(flatten)]
    pub list: ListOptions,

    /// Limit to a coupon code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
