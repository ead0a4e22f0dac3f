//! Order resource implementation.
//!
//! This module provides the [`Order`] resource and the line types embedded in
//! it.
//!
//! # Endpoints
//!
//! - `GET /orders` and `POST /orders`
//! - `GET /orders/{id}`, `PUT /orders/{id}`, `DELETE /orders/{id}`
//! - `POST /orders/batch`
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::{Address, LineItem, Order, OrderListOptions};
//!
//! let order = Order {
//!     payment_method: Some("bacs".to_string()),
//!     set_paid: Some(true),
//!     billing: Some(Address { email: Some("john.doe@example.com".into()), ..Default::default() }),
//!     line_items: Some(vec![LineItem { product_id: Some(93), quantity: Some(2), ..Default::default() }]),
//!     ..Default::default()
//! };
//! let created = client.orders().create(&order).await?;
//!
//! let processing = client
//!     .orders()
//!     .list(Some(&OrderListOptions { status: Some(vec!["processing".into()]), ..Default::default() }))
//!     .await?;
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::resources::common::{Address, Links, MetaData};
use crate::rest::{Batchable, Creatable, Deletable, ListOptions, RestResource, Updatable};

/// A WooCommerce order.
///
/// Monetary amounts are decimal strings, as sent by the store.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `id`, `number`, `order_key`, `created_via`, `version`
/// - `date_created`, `date_modified`, `date_paid`, `date_completed` (and GMT variants)
/// - the computed totals (`discount_total`, `shipping_total`, `total`, ...)
/// - `cart_hash`, `refunds`, `links`
///
/// ## Write-Only Fields
/// - `set_paid` - marks the order paid and reduces stock on creation
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    /// The unique identifier of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Parent order id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    /// Order number. Read-only.
    #[serde(skip_serializing)]
    pub number: Option<String>,

    /// Order key. Read-only.
    #[serde(skip_serializing)]
    pub order_key: Option<String>,

    /// How the order was created, e.g. `checkout` or `rest-api`. Read-only.
    #[serde(skip_serializing)]
    pub created_via: Option<String>,

    /// WooCommerce version that last updated the order. Read-only.
    #[serde(skip_serializing)]
    pub version: Option<String>,

    /// Order status, e.g. `pending`, `processing`, `completed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// When the order was created, in the site's timezone. Read-only.
    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    /// When the order was created, as GMT. Read-only.
    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    /// When the order was last modified, in the site's timezone. Read-only.
    #[serde(skip_serializing)]
    pub date_modified: Option<NaiveDateTime>,

    /// When the order was last modified, as GMT. Read-only.
    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<NaiveDateTime>,

    /// Total discount amount. Read-only.
    #[serde(skip_serializing)]
    pub discount_total: Option<String>,

    /// Total discount tax amount. Read-only.
    #[serde(skip_serializing)]
    pub discount_tax: Option<String>,

    /// Total shipping amount. Read-only.
    #[serde(skip_serializing)]
    pub shipping_total: Option<String>,

    /// Total shipping tax amount. Read-only.
    #[serde(skip_serializing)]
    pub shipping_tax: Option<String>,

    /// Sum of line item taxes. Read-only.
    #[serde(skip_serializing)]
    pub cart_tax: Option<String>,

    /// Grand total. Read-only.
    #[serde(skip_serializing)]
    pub total: Option<String>,

    /// Sum of all taxes. Read-only.
    #[serde(skip_serializing)]
    pub total_tax: Option<String>,

    /// Whether prices included tax during checkout. Read-only.
    #[serde(skip_serializing)]
    pub prices_include_tax: Option<bool>,

    /// User id of the customer; `0` for guests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,

    /// Customer's IP address. Read-only.
    #[serde(skip_serializing)]
    pub customer_ip_address: Option<String>,

    /// Customer's user agent. Read-only.
    #[serde(skip_serializing)]
    pub customer_user_agent: Option<String>,

    /// Note left by the customer during checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_note: Option<String>,

    /// Billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,

    /// Shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Address>,

    /// Payment method id, e.g. `bacs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    /// Payment method title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_title: Option<String>,

    /// Unique transaction id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    /// When the order was paid, in the site's timezone. Read-only.
    #[serde(skip_serializing)]
    pub date_paid: Option<NaiveDateTime>,

    /// When the order was paid, as GMT. Read-only.
    #[serde(skip_serializing)]
    pub date_paid_gmt: Option<NaiveDateTime>,

    /// When the order was completed, in the site's timezone. Read-only.
    #[serde(skip_serializing)]
    pub date_completed: Option<NaiveDateTime>,

    /// When the order was completed, as GMT. Read-only.
    #[serde(skip_serializing)]
    pub date_completed_gmt: Option<NaiveDateTime>,

    /// MD5 hash of cart items. Read-only.
    #[serde(skip_serializing)]
    pub cart_hash: Option<String>,

    /// Custom meta entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,

    /// Line items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,

    /// Tax lines. Read-only.
    #[serde(skip_serializing)]
    pub tax_lines: Option<Vec<TaxLine>>,

    /// Shipping lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_lines: Option<Vec<ShippingLine>>,

    /// Fee lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_lines: Option<Vec<FeeLine>>,

    /// Coupon lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_lines: Option<Vec<CouponLine>>,

    /// Refunds issued against the order. Read-only.
    #[serde(skip_serializing)]
    pub refunds: Option<Vec<Refund>>,

    /// Mark the order as paid; only honoured on creation. Write-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_paid: Option<bool>,

    /// Hypermedia links. Read-only.
    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl RestResource for Order {
    type Id = u64;
    type ListOptions = OrderListOptions;

    const NAME: &'static str = "Order";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Creatable for Order {}
impl Updatable for Order {}
impl Deletable for Order {}
impl Batchable for Order {}

/// A product line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineItem {
    /// Item id. Set to update an existing line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Product id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Variation id, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<u64>,

    /// Quantity ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// Tax class of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,

    /// Line subtotal, before discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<String>,

    /// Line subtotal tax, before discounts. Read-only.
    #[serde(skip_serializing)]
    pub subtotal_tax: Option<String>,

    /// Line total, after discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,

    /// Line total tax, after discounts. Read-only.
    #[serde(skip_serializing)]
    pub total_tax: Option<String>,

    /// Taxes applied to the line. Read-only.
    #[serde(skip_serializing)]
    pub taxes: Option<Vec<LineTax>>,

    /// Custom meta entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,

    /// Product SKU. Read-only.
    #[serde(skip_serializing)]
    pub sku: Option<String>,

    /// Product unit price. Read-only.
    #[serde(skip_serializing)]
    pub price: Option<serde_json::Value>,
}

/// A tax amount applied to a single line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LineTax {
    /// Tax rate id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Tax total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,

    /// Tax subtotal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<String>,
}

/// An order-level tax line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaxLine {
    /// Item id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Tax rate code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_code: Option<String>,

    /// Tax rate id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_id: Option<u64>,

    /// Tax rate label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Whether this is a compound tax rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compound: Option<bool>,

    /// Tax total, not including shipping taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_total: Option<String>,

    /// Shipping tax total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_tax_total: Option<String>,

    /// Custom meta entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,
}

/// A shipping line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingLine {
    /// Item id. Set to update an existing line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Shipping method name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_title: Option<String>,

    /// Shipping method id, e.g. `flat_rate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_id: Option<String>,

    /// Line total, after discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,

    /// Line total tax, after discounts. Read-only.
    #[serde(skip_serializing)]
    pub total_tax: Option<String>,

    /// Taxes applied to the line. Read-only.
    #[serde(skip_serializing)]
    pub taxes: Option<Vec<LineTax>>,

    /// Custom meta entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,
}

/// A fee line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeeLine {
    /// Item id. Set to update an existing line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Fee name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Tax class of the fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,

    /// Tax status of the fee: `taxable` or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<String>,

    /// Line total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,

    /// Line total tax. Read-only.
    #[serde(skip_serializing)]
    pub total_tax: Option<String>,

    /// Taxes applied to the line. Read-only.
    #[serde(skip_serializing)]
    pub taxes: Option<Vec<LineTax>>,

    /// Custom meta entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,
}

/// A coupon line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CouponLine {
    /// Item id. Set to update an existing line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Coupon code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Discount total. Read-only.
    #[serde(skip_serializing)]
    pub discount: Option<String>,

    /// Discount total tax. Read-only.
    #[serde(skip_serializing)]
    pub discount_tax: Option<String>,

    /// Custom meta entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,
}

/// A refund summary embedded in an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Refund {
    /// Refund id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Refund reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Refund total, negative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
}

/// Parameters for listing orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderListOptions {
    /// Shared paging and filtering parameters.
    #[serde(flatten)]
    pub list: ListOptions,

    /// Limit to orders with any of these statuses (`any` for all).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<String>>,

    /// Limit to orders of a customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<u64>,

    /// Limit to orders containing a product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<u64>,

    /// Limit to orders with these parent ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Vec<u64>>,

    /// Leave out orders with these parent ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_exclude: Option<Vec<u64>>,

    /// Number of decimal points in amounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dp: Option<u32>,
}
