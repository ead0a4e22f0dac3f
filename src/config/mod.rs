//! Configuration types for the WooCommerce API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for communication with a WooCommerce store.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`WooCommerceConfig`]: The configuration struct holding all client settings
//! - [`WooCommerceConfigBuilder`]: A builder for constructing [`WooCommerceConfig`] instances
//! - [`ConsumerKey`]: A validated consumer key newtype
//! - [`ConsumerSecret`]: A validated consumer secret newtype with masked debug output
//! - [`ShopUrl`]: A validated store base URL
//! - [`ApiVersion`]: The REST API version to use
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{WooCommerceConfig, ConsumerKey, ConsumerSecret, ShopUrl, ApiVersion};
//!
//! let config = WooCommerceConfig::builder()
//!     .consumer_key(ConsumerKey::new("ck_key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_secret").unwrap())
//!     .shop(ShopUrl::new("shop.example.com").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .retries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.retries(), 3);
//! ```

mod newtypes;
mod version;

pub use newtypes::{ConsumerKey, ConsumerSecret, ShopUrl};
pub use version::{ApiVersion, API_PATH_ROOT};

use crate::error::ConfigError;
use crate::log::{Logger, NoopLogger};
use std::sync::Arc;
use std::time::Duration;

/// Default per-request timeout applied to the HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the WooCommerce API client.
///
/// Holds the store location, credentials, API version, retry budget and the
/// logger used by the transport. The client wraps the built configuration in an
/// [`Arc`] and every resource service reads it through that shared handle.
///
/// # Thread Safety
///
/// `WooCommerceConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Retry Budget
///
/// `retries` bounds the number of physical attempts of one logical call when
/// the store answers `429 Too Many Requests` or `503 Service Unavailable`.
/// A budget of `0` or `1` means a single attempt.
#[derive(Clone, Debug)]
pub struct WooCommerceConfig {
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    shop: ShopUrl,
    api_version: ApiVersion,
    retries: u32,
    timeout: Duration,
    user_agent_prefix: Option<String>,
    logger: Arc<dyn Logger>,
}

impl WooCommerceConfig {
    /// Creates a new builder for constructing a `WooCommerceConfig`.
    #[must_use]
    pub fn builder() -> WooCommerceConfigBuilder {
        WooCommerceConfigBuilder::new()
    }

    /// Returns the consumer key.
    #[must_use]
    pub const fn consumer_key(&self) -> &ConsumerKey {
        &self.consumer_key
    }

    /// Returns the consumer secret.
    #[must_use]
    pub const fn consumer_secret(&self) -> &ConsumerSecret {
        &self.consumer_secret
    }

    /// Returns the store base URL.
    #[must_use]
    pub const fn shop(&self) -> &ShopUrl {
        &self.shop
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the API path prefix, e.g. `/wp-json/wc/v3`.
    #[must_use]
    pub fn path_prefix(&self) -> String {
        self.api_version.path_prefix()
    }

    /// Returns the retry budget.
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the logger used for request and response tracing.
    #[must_use]
    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }
}

// Verify WooCommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WooCommerceConfig>();
};

/// Builder for constructing [`WooCommerceConfig`] instances.
///
/// Required fields are `consumer_key`, `consumer_secret` and `shop`.
///
/// # Defaults
///
/// - `api_version`: `v3`
/// - `retries`: `0` (single attempt)
/// - `timeout`: 10 seconds
/// - `user_agent_prefix`: `None`
/// - `logger`: [`NoopLogger`]
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use woocommerce_api::{WooCommerceConfig, ConsumerKey, ConsumerSecret, ShopUrl, ApiVersion};
///
/// let config = WooCommerceConfig::builder()
///     .consumer_key(ConsumerKey::new("ck_key").unwrap())
///     .consumer_secret(ConsumerSecret::new("cs_secret").unwrap())
///     .shop(ShopUrl::new("https://shop.example.com").unwrap())
///     .api_version(ApiVersion::V2)
///     .retries(5)
///     .timeout(Duration::from_secs(30))
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.path_prefix(), "/wp-json/wc/v2");
/// ```
#[derive(Debug, Default)]
pub struct WooCommerceConfigBuilder {
    consumer_key: Option<ConsumerKey>,
    consumer_secret: Option<ConsumerSecret>,
    shop: Option<ShopUrl>,
    api_version: Option<ApiVersion>,
    retries: Option<u32>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
    logger: Option<Arc<dyn Logger>>,
}

impl WooCommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the consumer key (required).
    #[must_use]
    pub fn consumer_key(mut self, key: ConsumerKey) -> Self {
        self.consumer_key = Some(key);
        self
    }

    /// Sets the consumer secret (required).
    #[must_use]
    pub fn consumer_secret(mut self, secret: ConsumerSecret) -> Self {
        self.consumer_secret = Some(secret);
        self
    }

    /// Sets the store base URL (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopUrl) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the API version, and therefore the path prefix.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the retry budget for rate-limited and unavailable responses.
    #[must_use]
    pub const fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the logger used for request and response tracing.
    #[must_use]
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Builds the [`WooCommerceConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `consumer_key`,
    /// `consumer_secret` or `shop` are not set.
    pub fn build(self) -> Result<WooCommerceConfig, ConfigError> {
        let consumer_key = self
            .consumer_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_key",
            })?;
        let consumer_secret = self
            .consumer_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_secret",
            })?;
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;

        Ok(WooCommerceConfig {
            consumer_key,
            consumer_secret,
            shop,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            retries: self.retries.unwrap_or(0),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
            logger: self.logger.unwrap_or_else(|| Arc::new(NoopLogger)),
        })
    }
}
