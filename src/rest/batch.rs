//! Batch request and response envelopes.
//!
//! Batch endpoints live at `<resource>/batch` and accept up to 100 objects
//! per call across the three lists.

use serde::{Deserialize, Serialize};

/// A batch of creations, updates and deletions for one resource type.
///
/// Empty lists are omitted from the request body.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::BatchRequest;
/// use woocommerce_api::rest::resources::Coupon;
///
/// let batch = BatchRequest::<Coupon>::new()
///     .create(Coupon { code: Some("spring".to_string()), ..Default::default() })
///     .delete(42);
///
/// let body = serde_json::to_value(&batch).unwrap();
/// assert_eq!(body["delete"], serde_json::json!([42]));
/// assert!(body.get("update").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(bound(serialize = "T: Serialize, Id: Serialize"))]
pub struct BatchRequest<T, Id = u64> {
    /// Resources to create.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub create: Vec<T>,
    /// Resources to update; each must carry its id.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub update: Vec<T>,
    /// Ids of resources to delete.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub delete: Vec<Id>,
}

impl<T, Id> Default for BatchRequest<T, Id> {
    fn default() -> Self {
        Self {
            create: Vec::new(),
            update: Vec::new(),
            delete: Vec::new(),
        }
    }
}

impl<T, Id> BatchRequest<T, Id> {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource to create.
    #[must_use]
    pub fn create(mut self, resource: T) -> Self {
        self.create.push(resource);
        self
    }

    /// Adds a resource to update.
    #[must_use]
    pub fn update(mut self, resource: T) -> Self {
        self.update.push(resource);
        self
    }

    /// Adds an id to delete.
    #[must_use]
    pub fn delete(mut self, id: Id) -> Self {
        self.delete.push(id);
        self
    }

    /// Returns `true` if the batch holds no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.create.is_empty() && self.update.is_empty() && self.delete.is_empty()
    }
}

/// The result of a batch call.
///
/// `delete` holds the resources as they were before deletion.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct BatchResponse<T> {
    /// Created resources.
    #[serde(default)]
    pub create: Vec<T>,
    /// Updated resources.
    #[serde(default)]
    pub update: Vec<T>,
    /// Deleted resources.
    #[serde(default)]
    pub delete: Vec<T>,
}

impl<T> Default for BatchResponse<T> {
    fn default() -> Self {
        Self {
            create: Vec::new(),
            update: Vec::new(),
            delete: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Tag {
        id: Option<u64>,
        name: String,
    }

    #[test]
    fn test_empty_lists_are_omitted() {
        let batch = BatchRequest::<Tag>::new().delete(7);
        assert_eq!(serde_json::to_value(&batch).unwrap(), json!({"delete": [7]}));
        assert!(!batch.is_empty());
        assert!(BatchRequest::<Tag>::new().is_empty());
    }

    #[test]
    fn test_response_tolerates_missing_lists() {
        let response: BatchResponse<Tag> =
            serde_json::from_value(json!({"update": [{"id": 1, "name": "a"}]})).unwrap();
        assert!(response.create.is_empty());
        assert_eq!(response.update.len(), 1);
        assert!(response.delete.is_empty());
    }
}
