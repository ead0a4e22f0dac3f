//! REST resource layer for the WooCommerce API.
//!
//! This module provides the resource services built on top of the transport:
//!
//! - **[`RestResource`] trait**: The data shape and id type of a resource
//! - **Marker traits**: [`Creatable`], [`Updatable`], [`Deletable`] and
//!   [`Batchable`] opt a resource into each write operation
//! - **[`ResourceService`]**: List/Get/Create/Update/Delete/Batch for any resource
//! - **Options**: [`ListOptions`], [`GetOptions`], [`DeleteOptions`]
//! - **Batch envelopes**: [`BatchRequest`] and [`BatchResponse`]
//! - **[`ResourceResponse`]**: List results with collection totals
//! - **[`resources`]**: The WooCommerce data models
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::{BatchRequest, ListOptions};
//! use woocommerce_api::rest::resources::{Product, ProductListOptions};
//!
//! let options = ProductListOptions {
//!     list: ListOptions { per_page: Some(20), ..Default::default() },
//!     sku: Some("HOODIE-BLUE".to_string()),
//!     ..Default::default()
//! };
//! let products = client.products().list(Some(&options)).await?;
//!
//! let result = client
//!     .products()
//!     .batch(&BatchRequest::new().delete(799))
//!     .await?;
//! ```

mod batch;
mod options;
mod resource;
mod response;
mod service;

pub mod resources;

pub use batch::{BatchRequest, BatchResponse};
pub use options::{Context, DeleteOptions, GetOptions, ListOptions, SortOrder};
pub use resource::{Batchable, Creatable, Deletable, RestResource, Updatable};
pub use response::ResourceResponse;
pub use service::ResourceService;
