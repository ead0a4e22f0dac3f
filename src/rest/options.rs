//! Query option types shared by resource operations.
//!
//! Every field is optional and omitted from the query string when `None`.
//! Resource-specific list options embed [`ListOptions`] with `#[serde(flatten)]`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The scope under which a request is made; determines the fields present in
/// the response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    /// Public fields only.
    View,
    /// Fields available for editing.
    Edit,
}

/// Sort direction for list endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Paging and filtering parameters accepted by every list endpoint.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::{ListOptions, SortOrder};
///
/// let options = ListOptions {
///     page: Some(2),
///     per_page: Some(50),
///     order: Some(SortOrder::Asc),
///     include: Some(vec![10, 11]),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    /// Scope of the response fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    /// Current page of the collection, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Maximum number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// Limit results to those matching a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Limit to resources published after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<DateTime<Utc>>,

    /// Limit to resources published before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<DateTime<Utc>>,

    /// Ids to leave out of the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<u64>>,

    /// Ids to limit the result to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<u64>>,

    /// Number of items to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,

    /// Sort attribute, e.g. `date`, `id`, `title`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,
}

/// Parameters for retrieving a single resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GetOptions {
    /// Scope of the response fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

/// Parameters for deleting a resource.
///
/// Most resources only support permanent deletion and reject a request that
/// does not set `force` to `true`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeleteOptions {
    /// Bypass the trash and delete permanently.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,

    /// User id to reassign a deleted customer's posts to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reassign: Option<u64>,
}

impl DeleteOptions {
    /// Returns options that delete permanently.
    #[must_use]
    pub const fn force() -> Self {
        Self {
            force: Some(true),
            reassign: None,
        }
    }
}
