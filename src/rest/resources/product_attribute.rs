//! ProductAttribute resource implementation.
//!
//! Global attributes live at `/products/attributes`; their terms are managed
//! from the store admin.

use serde::{Deserialize, Serialize};

use crate::rest::resources::common::Links;
use crate::rest::{Batchable, Creatable, Deletable, ListOptions, RestResource, Updatable};

/// A global product attribute, such as color or size.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductAttribute {
    /// The unique identifier of the attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Attribute name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Attribute slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Attribute type. The default store only knows `select`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<String>,

    /// Default term ordering: `menu_order`, `name`, `name_num` or `id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,

    /// Whether the attribute has archive pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_archives: Option<bool>,

    /// Hypermedia links. Read-only.
    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl RestResource for ProductAttribute {
    type Id = u64;
    type ListOptions = ListOptions;

    const NAME: &'static str = "ProductAttribute";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Creatable for ProductAttribute {}
impl Updatable for ProductAttribute {}
impl Deletable for ProductAttribute {}
impl Batchable for ProductAttribute {}
