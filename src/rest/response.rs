//! Response wrapper for list operations.
//!
//! This module provides [`ResourceResponse<T>`], which combines decoded data
//! with the collection totals WordPress reports in the `X-WP-Total` and
//! `X-WP-TotalPages` headers. The wrapper implements `Deref` for ergonomic
//! access to the inner data.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::{ListOptions, ResourceResponse};
//! use woocommerce_api::rest::resources::{Order, OrderListOptions};
//!
//! let page: ResourceResponse<Vec<Order>> = client.orders().list_page(None).await?;
//!
//! for order in page.iter() {
//!     println!("Order {:?}", order.id);
//! }
//!
//! if let Some(pages) = page.total_pages() {
//!     println!("{} orders on {pages} pages", page.total().unwrap_or_default());
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{HttpError, HttpResponse};

/// Decoded data plus collection metadata from the HTTP response.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::ResourceResponse;
///
/// let response = ResourceResponse::new(vec!["a", "b"], Some(12), Some(6), 1);
/// assert_eq!(response.len(), 2);
/// assert_eq!(response.total(), Some(12));
/// assert!(response.has_next_page(1));
/// assert!(!response.has_next_page(6));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    total: Option<u64>,
    total_pages: Option<u64>,
    attempts: u32,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(
        data: T,
        total: Option<u64>,
        total_pages: Option<u64>,
        attempts: u32,
    ) -> Self {
        Self {
            data,
            total,
            total_pages,
            attempts,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the total number of items in the collection, if reported.
    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        self.total
    }

    /// Returns the total number of pages in the collection, if reported.
    #[must_use]
    pub const fn total_pages(&self) -> Option<u64> {
        self.total_pages
    }

    /// Returns `true` if a page after `current_page` exists.
    #[must_use]
    pub fn has_next_page(&self, current_page: u64) -> bool {
        self.total_pages.is_some_and(|pages| current_page < pages)
    }

    /// Returns the number of physical attempts the call took.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes an HTTP response into a `ResourceResponse`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::ResponseDecoding`] if the body does not match `T`.
    pub fn from_http_response(response: &HttpResponse) -> Result<Self, HttpError> {
        Ok(Self::new(
            response.json()?,
            response.total(),
            response.total_pages(),
            response.attempts,
        ))
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
