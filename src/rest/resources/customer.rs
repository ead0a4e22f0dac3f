//! Customer resource implementation.
//!
//! # Endpoints
//!
//! - `GET /customers` and `POST /customers`
//! - `GET /customers/{id}`, `PUT /customers/{id}`, `DELETE /customers/{id}`
//! - `POST /customers/batch`
//! - `GET /customers/{id}/downloads`
//!
//! Customers only support permanent deletion. Deleting a customer can
//! reassign their posts with [`DeleteOptions::reassign`](crate::rest::DeleteOptions).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::resources::common::{Address, Links, MetaData};
use crate::rest::{Batchable, Creatable, Deletable, ListOptions, RestResource, Updatable};

/// A store customer.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::resources::{Address, Customer};
///
/// let customer = Customer {
///     email: Some("john.doe@example.com".to_string()),
///     first_name: Some("John".to_string()),
///     last_name: Some("Doe".to_string()),
///     billing: Some(Address {
///         country: Some("US".to_string()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Customer {
    /// The unique identifier of the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// When the customer was created, in the site's timezone. Read-only.
    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    /// When the customer was created, as GMT. Read-only.
    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    /// When the customer was last modified, in the site's timezone. Read-only.
    #[serde(skip_serializing)]
    pub date_modified: Option<NaiveDateTime>,

    /// When the customer was last modified, as GMT. Read-only.
    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<NaiveDateTime>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// WordPress role. Read-only.
    #[serde(skip_serializing)]
    pub role: Option<String>,

    /// Login name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Account password. Write-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,

    /// Shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Address>,

    /// Whether the customer has paid for an order. Read-only.
    #[serde(skip_serializing)]
    pub is_paying_customer: Option<bool>,

    /// Avatar URL. Read-only.
    #[serde(skip_serializing)]
    pub avatar_url: Option<String>,

    /// Custom meta entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,

    /// Hypermedia links. Read-only.
    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl RestResource for Customer {
    type Id = u64;
    type ListOptions = CustomerListOptions;

    const NAME: &'static str = "Customer";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Creatable for Customer {}
impl Updatable for Customer {}
impl Deletable for Customer {}
impl Batchable for Customer {}

/// Parameters for listing customers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomerListOptions {
    /// Shared paging and filtering parameters.
    #[serde(flatten)]
    pub list: ListOptions,

    /// Limit to a specific email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Limit to a role, e.g. `customer` or `all`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A file a customer has permission to download.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomerDownload {
    /// Download id (MD5).
    pub download_id: Option<String>,

    /// Download file URL.
    pub download_url: Option<String>,

    /// Downloadable product id.
    pub product_id: Option<u64>,

    /// Product name.
    pub product_name: Option<String>,

    /// Downloadable file name.
    pub download_name: Option<String>,

    /// Order id.
    pub order_id: Option<u64>,

    /// Order key.
    pub order_key: Option<String>,

    /// Number of downloads remaining, or `unlimited`.
    pub downloads_remaining: Option<String>,

    /// When access expires, or `never`.
    pub access_expires: Option<String>,

    /// When access expires, as GMT.
    pub access_expires_gmt: Option<String>,

    /// File details.
    pub file: Option<DownloadFile>,
}

/// The file behind a [`CustomerDownload`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DownloadFile {
    /// File name.
    pub name: Option<String>,

    /// File URL.
    pub file: Option<String>,
}
