//! Common types embedded in several resources.
//!
//! These types are not resources themselves (they don't implement
//! `RestResource`); they appear as nested data within orders, products,
//! customers and the rest.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A billing or shipping address.
///
/// `email` and `phone` are only present on billing addresses.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::resources::Address;
///
/// let billing = Address {
///     first_name: Some("John".to_string()),
///     last_name: Some("Doe".to_string()),
///     address_1: Some("969 Market".to_string()),
///     city: Some("San Francisco".to_string()),
///     state: Some("CA".to_string()),
///     postcode: Some("94103".to_string()),
///     country: Some("US".to_string()),
///     email: Some("john.doe@example.com".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Address {
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Address line 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_1: Option<String>,

    /// Address line 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,

    /// City name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// ISO code or name of the state, province or district.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,

    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A custom meta entry attached to a resource.
///
/// `value` is arbitrary JSON; plugins store strings, numbers and objects.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MetaData {
    /// Meta id. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Meta key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Meta value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

/// An image attached to a product, variation or category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Image {
    /// Image id (attachment id). Set to reuse an existing upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// When the image was created, in the site's timezone.
    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    /// When the image was created, as GMT.
    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    /// When the image was last modified, in the site's timezone.
    #[serde(skip_serializing)]
    pub date_modified: Option<NaiveDateTime>,

    /// When the image was last modified, as GMT.
    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<NaiveDateTime>,

    /// Image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Image name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Image alternative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Package dimensions, as strings in the store's dimension unit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Dimensions {
    /// Length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,

    /// Width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    /// Height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

/// A hypermedia link in a `_links` object.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Link {
    /// Target URL.
    pub href: String,
}

/// The `_links` object of a resource, keyed by relation (`self`, `collection`, `up`).
pub type Links = HashMap<String, Vec<Link>>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_address_omits_unset_fields() {
        let address = Address {
            city: Some("Berlin".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&address).unwrap(), json!({"city": "Berlin"}));
    }

    #[test]
    fn test_image_dates_are_read_only() {
        let image: Image = serde_json::from_value(json!({
            "id": 792,
            "date_created": "2017-03-23T14:01:13",
            "src": "https://example.com/wp-content/uploads/2017/03/T_2_front.jpg",
            "name": "",
            "alt": ""
        }))
        .unwrap();
        assert!(image.date_created.is_some());

        let value = serde_json::to_value(&image).unwrap();
        assert!(value.get("date_created").is_none());
        assert_eq!(value["id"], 792);
    }

    #[test]
    fn test_links_decode() {
        let links: Links = serde_json::from_value(json!({
            "self": [{"href": "https://example.com/wp-json/wc/v3/orders/727"}],
            "collection": [{"href": "https://example.com/wp-json/wc/v3/orders"}]
        }))
        .unwrap();
        assert_eq!(
            links["self"][0].href,
            "https://example.com/wp-json/wc/v3/orders/727"
        );
    }

    #[test]
    fn test_meta_data_accepts_any_value() {
        let meta: MetaData =
            serde_json::from_value(json!({"id": 1, "key": "_gift", "value": {"wrap": true}}))
                .unwrap();
        assert_eq!(meta.value, Some(json!({"wrap": true})));
    }
}
