//! WooCommerce REST resources.
//!
//! Each module defines one resource struct mirroring the JSON the store sends,
//! the list parameters it accepts, and which operations it supports through
//! the [`RestResource`](crate::rest::RestResource) marker traits.
//!
//! All fields are optional: the store omits fields depending on the request
//! context, and a partially filled struct is sent as a partial update.
//! Fields the store computes are read-only and never serialized.
//!
//! # Available Resources
//!
//! | Resource | Path | Operations |
//! |----------|------|------------|
//! | [`Order`] | `orders` | list, get, create, update, delete, batch |
//! | [`OrderNote`] | `orders/{id}/notes` | list, get, create, delete |
//! | [`OrderRefund`] | `orders/{id}/refunds` | list, get, create, delete |
//! | [`Product`] | `products` | list, get, create, update, delete, batch |
//! | [`ProductVariation`] | `products/{id}/variations` | list, get, create, update, delete, batch |
//! | [`ProductAttribute`] | `products/attributes` | list, get, create, update, delete, batch |
//! | [`ProductCategory`] | `products/categories` | list, get, create, update, delete, batch |
//! | [`ProductTag`] | `products/tags` | list, get, create, update, delete, batch |
//! | [`ShippingClass`] | `products/shipping_classes` | list, get, create, update, delete, batch |
//! | [`ProductReview`] | `products/reviews` | list, get, create, update, delete, batch |
//! | [`Customer`] | `customers` | list, get, create, update, delete, batch, downloads |
//! | [`Coupon`] | `coupons` | list, get, create, update, delete, batch |
//! | [`Webhook`] | `webhooks` | list, get, create, update, delete, batch |
//! | [`PaymentGateway`] | `payment_gateways` | list, get, update |

pub mod common;
mod coupon;
mod customer;
mod order;
mod order_note;
mod order_refund;
mod payment_gateway;
mod product;
mod product_attribute;
mod product_category;
mod product_review;
mod product_tag;
mod product_variation;
mod shipping_class;
mod webhook;

pub use common::{Address, Dimensions, Image, Link, Links, MetaData};
pub use coupon::{Coupon, CouponListOptions};
pub use customer::{Customer, CustomerDownload, CustomerListOptions, DownloadFile};
pub use order::{
    CouponLine, FeeLine, LineItem, LineTax, Order, OrderListOptions, Refund, ShippingLine, TaxLine,
};
pub use order_note::{OrderNote, OrderNoteListOptions};
pub use order_refund::OrderRefund;
pub use payment_gateway::{PaymentGateway, PaymentGatewaySetting};
pub use product::{
    AttributeValue, Product, ProductAttributeLine, ProductDownload, ProductListOptions, TermRef,
};
pub use product_attribute::ProductAttribute;
pub use product_category::{CategoryListOptions, ProductCategory};
pub use product_review::{ProductReview, ReviewListOptions};
pub use product_tag::{ProductTag, TermListOptions};
pub use product_variation::{ProductVariation, VariationListOptions};
pub use shipping_class::ShippingClass;
pub use webhook::{Webhook, WebhookListOptions};
