//! ProductTag resource implementation.
//!
//! Tags live at `/products/tags`.

use serde::{Deserialize, Serialize};

use crate::rest::resources::common::Links;
use crate::rest::{Batchable, Creatable, Deletable, ListOptions, RestResource, Updatable};

/// A product tag.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductTag {
    /// The unique identifier of the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Tag name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Tag slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// HTML description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number of published products with the tag. Read-only.
    #[serde(skip_serializing)]
    pub count: Option<u64>,

    /// Hypermedia links. Read-only.
    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl RestResource for ProductTag {
    type Id = u64;
    type ListOptions = TermListOptions;

    const NAME: &'static str = "ProductTag";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Creatable for ProductTag {}
impl Updatable for ProductTag {}
impl Deletable for ProductTag {}
impl Batchable for ProductTag {}

/// Parameters for listing flat taxonomies such as tags and shipping classes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TermListOptions {
    /// Shared paging and filtering parameters.
    #[serde(flatten)]
    pub list: ListOptions,

    /// Whether to hide terms without products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_empty: Option<bool>,

    /// Limit to terms assigned to a product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<u64>,

    /// Limit to a slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}
