//! Generic resource service.
//!
//! A [`ResourceService`] binds a resource type to its base path and borrows the
//! shared [`HttpClient`]. Every operation computes a path and delegates to one
//! of the client's Get/Post/Put/Delete primitives; retries, authentication and
//! error classification all happen in the transport.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::{BatchRequest, DeleteOptions};
//! use woocommerce_api::rest::resources::Coupon;
//!
//! let coupons = client.coupons();
//!
//! let created = coupons
//!     .create(&Coupon { code: Some("10off".into()), amount: Some("10".into()), ..Default::default() })
//!     .await?;
//! let fetched = coupons.get(created.id.unwrap(), None).await?;
//! let deleted = coupons.delete(fetched.id.unwrap(), Some(&DeleteOptions::force())).await?;
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::rest::resources::{Customer, CustomerDownload};
use crate::rest::{
    BatchRequest, BatchResponse, Batchable, Creatable, DeleteOptions, Deletable, GetOptions,
    ResourceResponse, RestResource, Updatable,
};

/// Operations for one resource type under one base path.
pub struct ResourceService<'a, T> {
    client: &'a HttpClient,
    base_path: String,
    _resource: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for ResourceService<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceService")
            .field("resource", &std::any::type_name::<T>())
            .field("base_path", &self.base_path)
            .finish()
    }
}

impl<'a, T: RestResource> ResourceService<'a, T> {
    /// Creates a service for the collection at `base_path`, e.g. `orders` or
    /// `orders/17/notes`.
    #[must_use]
    pub fn new(client: &'a HttpClient, base_path: impl Into<String>) -> Self {
        Self {
            client,
            base_path: base_path.into(),
            _resource: PhantomData,
        }
    }

    /// Returns the collection path.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the path of a single resource, with the id percent-encoded.
    #[must_use]
    pub fn item_path(&self, id: &T::Id) -> String {
        format!(
            "{}/{}",
            self.base_path,
            urlencoding::encode(&id.to_string())
        )
    }

    /// Lists resources.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(&self, options: Option<&T::ListOptions>) -> Result<Vec<T>, HttpError> {
        self.client.get(&self.base_path, options).await
    }

    /// Lists resources, keeping the collection totals reported by the store.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_page(
        &self,
        options: Option<&T::ListOptions>,
    ) -> Result<ResourceResponse<Vec<T>>, HttpError> {
        let response = self
            .client
            .create_and_execute(HttpMethod::Get, &self.base_path, None::<&()>, options)
            .await?;
        ResourceResponse::from_http_response(&response)
    }

    /// Retrieves a single resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails; a missing resource is a
    /// [`HttpError::Response`] with status 404.
    pub async fn get(&self, id: T::Id, options: Option<&GetOptions>) -> Result<T, HttpError> {
        self.client.get(&self.item_path(&id), options).await
    }
}

impl<T: Creatable> ResourceService<'_, T> {
    /// Creates a resource and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create(&self, resource: &T) -> Result<T, HttpError> {
        self.client.post(&self.base_path, resource).await
    }
}

impl<T: Updatable> ResourceService<'_, T> {
    /// Updates a resource identified by its own id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::MissingResourceId`] if `resource` has no id, or
    /// [`HttpError`] if the request fails.
    pub async fn update(&self, resource: &T) -> Result<T, HttpError> {
        let id = resource
            .id()
            .ok_or(HttpError::MissingResourceId { resource: T::NAME })?;
        self.client.put(&self.item_path(&id), resource).await
    }
}

impl<T: Deletable> ResourceService<'_, T> {
    /// Deletes a resource and returns it as it was.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, id: T::Id, options: Option<&DeleteOptions>) -> Result<T, HttpError> {
        self.client.delete(&self.item_path(&id), options).await
    }
}

impl<T: Batchable> ResourceService<'_, T> {
    /// Creates, updates and deletes resources in one call.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn batch(
        &self,
        batch: &BatchRequest<T, T::Id>,
    ) -> Result<BatchResponse<T>, HttpError> {
        self.client
            .post(&format!("{}/batch", self.base_path), batch)
            .await
    }
}

impl ResourceService<'_, Customer> {
    /// Lists the files a customer is allowed to download.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn downloads(&self, customer_id: u64) -> Result<Vec<CustomerDownload>, HttpError> {
        self.client
            .get(&format!("{}/downloads", self.item_path(&customer_id)), None::<&()>)
            .await
    }
}
