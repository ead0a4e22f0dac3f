//! ShippingClass resource implementation.
//!
//! Shipping classes live at `/products/shipping_classes`.

use serde::{Deserialize, Serialize};

use crate::rest::resources::common::Links;
use crate::rest::resources::product_tag::TermListOptions;
use crate::rest::{Batchable, Creatable, Deletable, RestResource, Updatable};

/// A product shipping class.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShippingClass {
    /// The unique identifier of the shipping class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Shipping class name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Shipping class slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// HTML description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number of published products in the class. Read-only.
    #[serde(skip_serializing)]
    pub count: Option<u64>,

    /// Hypermedia links. Read-only.
    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl RestResource for ShippingClass {
    type Id = u64;
    type ListOptions = TermListOptions;

    const NAME: &'static str = "ShippingClass";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Creatable for ShippingClass {}
impl Updatable for ShippingClass {}
impl Deletable for ShippingClass {}
impl Batchable for ShippingClass {}
