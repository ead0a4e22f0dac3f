//! Product resource implementation.
//!
//! This module provides the [`Product`] resource for managing the store's
//! catalogue, together with the small reference types embedded in it.
//!
//! # Endpoints
//!
//! - `GET /products` and `POST /products`
//! - `GET /products/{id}`, `PUT /products/{id}`, `DELETE /products/{id}`
//! - `POST /products/batch`
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::{Product, ProductListOptions};
//!
//! let product = Product {
//!     name: Some("Premium Quality".to_string()),
//!     product_type: Some("simple".to_string()),
//!     regular_price: Some("21.99".to_string()),
//!     ..Default::default()
//! };
//! let created = client.products().create(&product).await?;
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::resources::common::{Dimensions, Image, Links, MetaData};
use crate::rest::{Batchable, Creatable, Deletable, ListOptions, RestResource, Updatable};

/// A WooCommerce product.
///
/// Prices are decimal strings, as sent by the store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    /// The unique identifier of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Product slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Product URL. Read-only.
    #[serde(skip_serializing)]
    pub permalink: Option<String>,

    /// When the product was created, in the site's timezone. Read-only.
    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    /// When the product was created, as GMT. Read-only.
    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    /// When the product was last modified, in the site's timezone. Read-only.
    #[serde(skip_serializing)]
    pub date_modified: Option<NaiveDateTime>,

    /// When the product was last modified, as GMT. Read-only.
    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<NaiveDateTime>,

    /// Product type: `simple`, `grouped`, `external` or `variable`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// Product status, e.g. `draft`, `pending`, `private`, `publish`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Whether the product is featured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    /// Catalog visibility: `visible`, `catalog`, `search` or `hidden`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_visibility: Option<String>,

    /// Product description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Product short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    /// Unique stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Current price. Read-only.
    #[serde(skip_serializing)]
    pub price: Option<String>,

    /// Regular price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<String>,

    /// Sale price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,

    /// Start of the sale, in the site's timezone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_from: Option<NaiveDateTime>,

    /// End of the sale, in the site's timezone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_to: Option<NaiveDateTime>,

    /// Whether the product is on sale. Read-only.
    #[serde(skip_serializing)]
    pub on_sale: Option<bool>,

    /// Whether the product can be bought. Read-only.
    #[serde(skip_serializing)]
    pub purchasable: Option<bool>,

    /// Number of sales. Read-only.
    #[serde(skip_serializing)]
    pub total_sales: Option<u64>,

    /// Whether the product is virtual.
    #[serde(rename = "virtual", skip_serializing_if = "Option::is_none")]
    pub is_virtual: Option<bool>,

    /// Whether the product is downloadable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloadable: Option<bool>,

    /// Downloadable files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloads: Option<Vec<ProductDownload>>,

    /// Download limit; `-1` for unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_limit: Option<i64>,

    /// Days until a download link expires; `-1` for never.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_expiry: Option<i64>,

    /// External product URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,

    /// External product button text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,

    /// Tax status: `taxable`, `shipping` or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<String>,

    /// Tax class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,

    /// Whether stock is managed at product level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_stock: Option<bool>,

    /// Stock quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,

    /// Stock status: `instock`, `outofstock` or `onbackorder`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<String>,

    /// Backorder policy: `no`, `notify` or `yes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backorders: Option<String>,

    /// Whether backorders are allowed. Read-only.
    #[serde(skip_serializing)]
    pub backorders_allowed: Option<bool>,

    /// Whether the product is on backorder. Read-only.
    #[serde(skip_serializing)]
    pub backordered: Option<bool>,

    /// Whether only one item may be bought per order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_individually: Option<bool>,

    /// Product weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,

    /// Product dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    /// Whether the product needs shipping. Read-only.
    #[serde(skip_serializing)]
    pub shipping_required: Option<bool>,

    /// Whether the product's shipping is taxable. Read-only.
    #[serde(skip_serializing)]
    pub shipping_taxable: Option<bool>,

    /// Shipping class slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_class: Option<String>,

    /// Shipping class id. Read-only.
    #[serde(skip_serializing)]
    pub shipping_class_id: Option<u64>,

    /// Whether reviews are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews_allowed: Option<bool>,

    /// Average review rating. Read-only.
    #[serde(skip_serializing)]
    pub average_rating: Option<String>,

    /// Number of reviews. Read-only.
    #[serde(skip_serializing)]
    pub rating_count: Option<u64>,

    /// Related product ids. Read-only.
    #[serde(skip_serializing)]
    pub related_ids: Option<Vec<u64>>,

    /// Up-sell product ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upsell_ids: Option<Vec<u64>>,

    /// Cross-sell product ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_sell_ids: Option<Vec<u64>>,

    /// Parent product id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    /// Note sent to the customer after purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_note: Option<String>,

    /// Categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<TermRef>>,

    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TermRef>>,

    /// Images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,

    /// Attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<ProductAttributeLine>>,

    /// Default variation attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_attributes: Option<Vec<AttributeValue>>,

    /// Variation ids. Read-only.
    #[serde(skip_serializing)]
    pub variations: Option<Vec<u64>>,

    /// Grouped product ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouped_products: Option<Vec<u64>>,

    /// Menu order, used to sort products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_order: Option<i64>,

    /// Custom meta entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,

    /// Hypermedia links. Read-only.
    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl RestResource for Product {
    type Id = u64;
    type ListOptions = ProductListOptions;

    const NAME: &'static str = "Product";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Creatable for Product {}
impl Updatable for Product {}
impl Deletable for Product {}
impl Batchable for Product {}

/// A downloadable file of a product or variation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductDownload {
    /// File id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// File name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// File URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// A reference to a category or tag term.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TermRef {
    /// Term id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Term name. Read-only.
    #[serde(skip_serializing)]
    pub name: Option<String>,

    /// Term slug. Read-only.
    #[serde(skip_serializing)]
    pub slug: Option<String>,
}

/// An attribute assigned to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductAttributeLine {
    /// Global attribute id; `0` for a local attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Attribute name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Position on the product page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// Whether the attribute is shown on the product page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    /// Whether the attribute can define variations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<bool>,

    /// Available term names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// A single attribute value, as used by variations and default attributes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AttributeValue {
    /// Global attribute id; `0` for a local attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Attribute name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Selected term name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
}

/// Parameters for listing products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductListOptions {
    /// Shared paging and filtering parameters.
    #[serde(flatten)]
    pub list: ListOptions,

    /// Limit to products with these parent ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Vec<u64>>,

    /// Limit to products with a slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Limit to products with a status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Limit to products of a type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// Limit to products with a SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Limit to featured products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    /// Limit to products in a category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Limit to products with a tag id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Limit to products with a shipping class id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_class: Option<String>,

    /// Limit to products on sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_sale: Option<bool>,

    /// Minimum price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,

    /// Maximum price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,

    /// Limit to products with a stock status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_deserialization_renames() {
        let product: Product = serde_json::from_value(json!({
            "id": 794,
            "name": "Premium Quality",
            "type": "simple",
            "virtual": false,
            "price": "21.99",
            "regular_price": "21.99",
            "sale_price": "",
            "date_on_sale_from": null,
            "stock_quantity": null,
            "dimensions": {"length": "", "width": "", "height": ""},
            "categories": [{"id": 9, "name": "Clothing", "slug": "clothing"}],
            "images": [{"id": 792, "src": "https://example.com/T_2_front.jpg", "name": "", "alt": ""}],
            "attributes": [],
            "default_attributes": [],
            "variations": [],
            "related_ids": [53, 40]
        }))
        .unwrap();

        assert_eq!(product.product_type.as_deref(), Some("simple"));
        assert_eq!(product.is_virtual, Some(false));
        assert_eq!(product.related_ids, Some(vec![53, 40]));
        assert_eq!(product.categories.as_ref().unwrap()[0].id, Some(9));
    }

    #[test]
    fn test_product_serialization_for_create() {
        let product = Product {
            name: Some("Premium Quality".to_string()),
            product_type: Some("simple".to_string()),
            regular_price: Some("21.99".to_string()),
            price: Some("21.99".to_string()),
            categories: Some(vec![TermRef {
                id: Some(9),
                name: Some("Clothing".to_string()),
                slug: None,
            }]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({
                "name": "Premium Quality",
                "type": "simple",
                "regular_price": "21.99",
                "categories": [{"id": 9}]
            })
        );
    }
}
