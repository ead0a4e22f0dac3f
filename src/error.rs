//! Error types for the WooCommerce API client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{ConsumerKey, ConfigError};
//!
//! let result = ConsumerKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyConsumerKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Consumer key cannot be empty.
    #[error("Consumer key cannot be empty. Please provide a valid WooCommerce consumer key (ck_...).")]
    EmptyConsumerKey,

    /// Consumer secret cannot be empty.
    #[error("Consumer secret cannot be empty. Please provide a valid WooCommerce consumer secret (cs_...).")]
    EmptyConsumerSecret,

    /// Shop URL is invalid.
    #[error("Invalid shop URL '{url}'. Expected a host name such as 'shop.example.com' or a full 'https://' URL.")]
    InvalidShopUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'v' followed by digits (e.g., 'v3').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_consumer_key_error_message() {
        let message = ConfigError::EmptyConsumerKey.to_string();
        assert!(message.contains("Consumer key cannot be empty"));
    }

    #[test]
    fn test_invalid_shop_url_error_message() {
        let error = ConfigError::InvalidShopUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("shop.example.com"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "shop" };
        let message = error.to_string();
        assert!(message.contains("shop"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyConsumerSecret;
        let _: &dyn std::error::Error = &error;
    }
}
