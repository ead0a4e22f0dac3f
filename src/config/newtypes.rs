//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use url::Url;

/// A validated WooCommerce REST API consumer key.
///
/// The consumer key is the user half of the HTTP Basic credential pair.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ConsumerKey;
///
/// let key = ConsumerKey::new("ck_123").unwrap();
/// assert_eq!(key.as_ref(), "ck_123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumerKey(String);

impl ConsumerKey {
    /// Creates a new validated consumer key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyConsumerKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ConsumerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated WooCommerce REST API consumer secret.
///
/// The `Debug` implementation masks the value so the secret never ends up in logs.
///
/// ```rust
/// use woocommerce_api::ConsumerSecret;
///
/// let secret = ConsumerSecret::new("cs_456").unwrap();
/// assert_eq!(format!("{:?}", secret), "ConsumerSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ConsumerSecret(String);

impl ConsumerSecret {
    /// Creates a new validated consumer secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(ConfigError::EmptyConsumerSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ConsumerSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ConsumerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConsumerSecret(*****)")
    }
}

/// The base URL of a WooCommerce store.
///
/// A bare host name is normalized to `https://<host>`. Inputs that already carry
/// an `http://` or `https://` scheme are kept as given, which covers local
/// development stores and test servers. Any path, query or fragment is dropped;
/// the API prefix is appended per request.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ShopUrl;
///
/// let shop = ShopUrl::new("shop.example.com").unwrap();
/// assert_eq!(shop.as_ref(), "https://shop.example.com/");
/// assert_eq!(shop.host_name(), Some("shop.example.com"));
///
/// let local = ShopUrl::new("http://localhost:8080").unwrap();
/// assert_eq!(local.as_ref(), "http://localhost:8080/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopUrl(Url);

impl ShopUrl {
    /// Creates a new validated shop URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopUrl`] if the value is empty, uses a
    /// scheme other than `http`/`https`, or cannot be parsed as a URL with a host.
    pub fn new(shop: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = shop.into();
        let trimmed = raw.trim();
        let invalid = || ConfigError::InvalidShopUrl { url: raw.clone() };

        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        let candidate = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        let mut url = Url::parse(&candidate).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(invalid());
        }

        url.set_path("/");
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self(url))
    }

    /// Returns the parsed base URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.0
    }

    /// Returns the host portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.0.host_str()
    }
}

impl AsRef<str> for ShopUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Serialize for ShopUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ShopUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumer_key_rejects_empty_string() {
        assert!(matches!(
            ConsumerKey::new(""),
            Err(ConfigError::EmptyConsumerKey)
        ));
        assert!(matches!(
            ConsumerKey::new("   "),
            Err(ConfigError::EmptyConsumerKey)
        ));
    }

    #[test]
    fn test_consumer_secret_masks_value_in_debug() {
        let secret = ConsumerSecret::new("cs_super_secret").unwrap();
        let debug_output = format!("{secret:?}");
        assert_eq!(debug_output, "ConsumerSecret(*****)");
        assert!(!debug_output.contains("cs_super_secret"));
    }

    #[test]
    fn test_shop_url_prefixes_https_for_bare_host() {
        let shop = ShopUrl::new("shop.gitvim.com").unwrap();
        assert_eq!(shop.url().scheme(), "https");
        assert_eq!(shop.as_ref(), "https://shop.gitvim.com/");
    }

    #[test]
    fn test_shop_url_keeps_explicit_scheme_and_port() {
        let shop = ShopUrl::new("http://127.0.0.1:9000").unwrap();
        assert_eq!(shop.url().scheme(), "http");
        assert_eq!(shop.url().port(), Some(9000));
        assert_eq!(shop.host_name(), Some("127.0.0.1"));
    }

    #[test]
    fn test_shop_url_drops_path_and_query() {
        let shop = ShopUrl::new("https://shop.example.com/wp-admin?x=1#top").unwrap();
        assert_eq!(shop.as_ref(), "https://shop.example.com/");
    }

    #[test]
    fn test_shop_url_rejects_invalid() {
        assert!(ShopUrl::new("").is_err());
        assert!(ShopUrl::new("my shop.com").is_err());
        assert!(ShopUrl::new("ftp://shop.example.com").is_err());
        assert!(ShopUrl::new("https://").is_err());
    }

    #[test]
    fn test_shop_url_round_trip_serialization() {
        let original = ShopUrl::new("shop.example.com").unwrap();
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, r#""https://shop.example.com/""#);
        let restored: ShopUrl = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
