//! ProductCategory resource implementation.
//!
//! Categories live at `/products/categories` and form a tree through
//! `parent`.

use serde::{Deserialize, Serialize};

use crate::rest::resources::common::{Image, Links};
use crate::rest::{Batchable, Creatable, Deletable, ListOptions, RestResource, Updatable};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductCategory {
    /// The unique identifier of the category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Category name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Category slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Parent category id; `0` for a top-level category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,

    /// HTML description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Archive display type: `default`, `products`, `subcategories` or `both`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Category image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    /// Menu order, used to sort categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_order: Option<i64>,

    /// Number of published products in the category. Read-only.
    #[serde(skip_serializing)]
    pub count: Option<u64>,

    /// Hypermedia links. Read-only.
    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl RestResource for ProductCategory {
    type Id = u64;
    type ListOptions = CategoryListOptions;

    const NAME: &'static str = "ProductCategory";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Creatable for ProductCategory {}
impl Updatable for ProductCategory {}
impl Deletable for ProductCategory {}
impl Batchable for ProductCategory {}

/// Parameters for listing categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryListOptions {
    /// Shared paging and filtering parameters.
    #[serde(flatten)]
    pub list: ListOptions,

    /// Whether to hide categories without products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_empty: Option<bool>,

    /// Limit to children of a category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,

    /// Limit to categories assigned to a product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<u64>,

    /// Limit to a slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}
