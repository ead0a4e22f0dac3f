//! WooCommerce REST API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the WooCommerce REST API to use, and therefore which path prefix requests
//! are sent under.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Path prefix shared by every WooCommerce REST API version.
pub const API_PATH_ROOT: &str = "/wp-json/wc";

/// WooCommerce REST API version.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version, ApiVersion::V3);
/// assert_eq!(version.path_prefix(), "/wp-json/wc/v3");
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// Legacy REST API v1 (WooCommerce 2.6).
    V1,
    /// REST API v2 (WooCommerce 3.0).
    V2,
    /// REST API v3 (WooCommerce 3.5 and later).
    V3,
    /// A version tag not known to this crate, e.g. `v4`.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V3
    }

    /// Returns the version tag as used in URLs (e.g. `v3`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V3 => "v3",
            Self::Custom(tag) => tag,
        }
    }

    /// Returns the API path prefix for this version, e.g. `/wp-json/wc/v3`.
    #[must_use]
    pub fn path_prefix(&self) -> String {
        format!("{API_PATH_ROOT}/{}", self.as_str())
    }

    fn is_valid_tag(tag: &str) -> bool {
        tag.strip_prefix('v')
            .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        match tag.as_str() {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            "v3" => Ok(Self::V3),
            _ if Self::is_valid_tag(&tag) => Ok(Self::Custom(tag)),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}
