//! REST resource capability traits.
//!
//! This module defines the [`RestResource`] trait, which describes a
//! WooCommerce resource's data shape, and marker traits that opt a resource
//! into each write operation. [`ResourceService`](crate::rest::ResourceService)
//! provides the operations for any type implementing these traits.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct with serde derives
//! 2. Implement `RestResource` with the id type, list options and name
//! 3. Implement the marker traits for the operations the endpoint supports
//!
//! # Example
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use woocommerce_api::rest::{Batchable, Creatable, Deletable, ListOptions, RestResource, Updatable};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! pub struct TaxClass {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<u64>,
//!     pub name: String,
//! }
//!
//! impl RestResource for TaxClass {
//!     type Id = u64;
//!     type ListOptions = ListOptions;
//!     const NAME: &'static str = "TaxClass";
//!
//!     fn id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//!
//! impl Creatable for TaxClass {}
//! impl Deletable for TaxClass {}
//! ```

use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};

/// A WooCommerce REST resource.
///
/// # Associated Types
///
/// - `Id`: The type of the resource's identifier (`u64`, or `String` for
///   payment gateways)
/// - `ListOptions`: Query parameters accepted by the list endpoint
///
/// # Required Bounds
///
/// Resources must be serializable, deserializable, cloneable, and thread-safe.
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Clone + Serialize + Send + Sync;

    /// Parameters for list operations (filtering, pagination, etc.).
    type ListOptions: Serialize + Default + Send + Sync;

    /// The singular name of the resource (e.g., "Order").
    ///
    /// Used in error messages.
    const NAME: &'static str;

    /// Returns the resource's id, or `None` for a resource not yet created.
    fn id(&self) -> Option<Self::Id>;
}

/// Marker for resources that can be created with `POST <base>`.
pub trait Creatable: RestResource {}

/// Marker for resources that can be updated with `PUT <base>/<id>`.
pub trait Updatable: RestResource {}

/// Marker for resources that can be deleted with `DELETE <base>/<id>`.
pub trait Deletable: RestResource {}

/// Marker for resources with a `POST <base>/batch` endpoint.
pub trait Batchable: Creatable + Updatable + Deletable {}
