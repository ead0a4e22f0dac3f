//! ProductVariation resource implementation.
//!
//! Variations are nested under a variable product:
//! - `GET /products/{product_id}/variations` and `POST /products/{product_id}/variations`
//! - `GET`, `PUT` and `DELETE /products/{product_id}/variations/{id}`
//! - `POST /products/{product_id}/variations/batch`

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::resources::common::{Dimensions, Image, Links, MetaData};
use crate::rest::resources::product::{AttributeValue, ProductDownload};
use crate::rest::{Batchable, Creatable, Deletable, ListOptions, RestResource, Updatable};

/// One variation of a variable product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductVariation {
    /// The unique identifier of the variation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// When the variation was created, in the site's timezone. Read-only.
    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    /// When the variation was created, as GMT. Read-only.
    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    /// When the variation was last modified, in the site's timezone. Read-only.
    #[serde(skip_serializing)]
    pub date_modified: Option<NaiveDateTime>,

    /// When the variation was last modified, as GMT. Read-only.
    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<NaiveDateTime>,

    /// Variation description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Variation URL. Read-only.
    #[serde(skip_serializing)]
    pub permalink: Option<String>,

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

    /// Whether the variation is on sale. Read-only.
    #[serde(skip_serializing)]
    pub on_sale: Option<bool>,

    /// Variation status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Whether the variation can be bought. Read-only.
    #[serde(skip_serializing)]
    pub purchasable: Option<bool>,

    /// Whether the variation is virtual.
    #[serde(rename = "virtual", skip_serializing_if = "Option::is_none")]
    pub is_virtual: Option<bool>,

    /// Whether the variation is downloadable.
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

    /// Tax status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<String>,

    /// Tax class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,

    /// Whether stock is managed at variation level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_stock: Option<bool>,

    /// Stock quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,

    /// Stock status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<String>,

    /// Backorder policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backorders: Option<String>,

    /// Whether backorders are allowed. Read-only.
    #[serde(skip_serializing)]
    pub backorders_allowed: Option<bool>,

    /// Whether the variation is on backorder. Read-only.
    #[serde(skip_serializing)]
    pub backordered: Option<bool>,

    /// Variation weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,

    /// Variation dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    /// Shipping class slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_class: Option<String>,

    /// Shipping class id. Read-only.
    #[serde(skip_serializing)]
    pub shipping_class_id: Option<u64>,

    /// Variation image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    /// Attribute values that select this variation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<AttributeValue>>,

    /// Menu order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_order: Option<i64>,

    /// Custom meta entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,

    /// Hypermedia links. Read-only.
    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl RestResource for ProductVariation {
    type Id = u64;
    type ListOptions = VariationListOptions;

    const NAME: &'static str = "ProductVariation";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Creatable for ProductVariation {}
impl Updatable for ProductVariation {}
impl Deletable for ProductVariation {}
impl Batchable for ProductVariation {}

/// Parameters for listing variations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariationListOptions {
    /// Shared paging and filtering parameters.
    #[serde(flatten)]
    pub list: ListOptions,

    /// Limit to variations with a SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Limit to variations with a status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Limit to variations on sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_sale: Option<bool>,

    /// Limit to variations with a stock status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_variation_attributes() {
        let variation: ProductVariation = serde_json::from_value(json!({
            "id": 732,
            "regular_price": "9.00",
            "virtual": false,
            "image": {"id": 0, "src": "", "name": "", "alt": ""},
            "attributes": [{"id": 6, "name": "Color", "option": "Black"}]
        }))
        .unwrap();

        let attributes = variation.attributes.unwrap();
        assert_eq!(attributes[0].option.as_deref(), Some("Black"));
        assert_eq!(variation.is_virtual, Some(false));
    }

    #[test]
    fn test_variation_update_body() {
        let variation = ProductVariation {
            id: Some(733),
            regular_price: Some("10.00".to_string()),
            price: Some("9.00".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&variation).unwrap(),
            json!({"id": 733, "regular_price": "10.00"})
        );
    }
}
