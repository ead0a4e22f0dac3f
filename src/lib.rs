//! # WooCommerce API Rust Client
//!
//! A Rust client for the WooCommerce REST API (`/wp-json/wc/v3`), providing
//! type-safe configuration, a retrying HTTP transport and typed resource
//! services for orders, products, customers, coupons and the rest.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`WooCommerceConfig`] and [`WooCommerceConfigBuilder`]
//! - Validated newtypes for the consumer key, consumer secret and store URL
//! - An async HTTP transport with HTTP Basic authentication, bounded retries
//!   on rate limiting (429, honouring `Retry-After`) and service
//!   unavailability (503), and structured error decoding
//! - Generic List/Get/Create/Update/Delete/Batch operations for every resource
//! - An injectable [`Logger`] for request/response debug logging
//! - Webhook delivery signature verification via [`webhooks`]
//!
//! ## Quick Start
//!
//! ```rust
//! use woocommerce_api::{ApiVersion, ConsumerKey, ConsumerSecret, ShopUrl, WooCommerceConfig};
//!
//! let config = WooCommerceConfig::builder()
//!     .consumer_key(ConsumerKey::new("ck_key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_secret").unwrap())
//!     .shop(ShopUrl::new("shop.example.com").unwrap())
//!     .api_version(ApiVersion::V3)
//!     .retries(3)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use woocommerce_api::rest::{DeleteOptions, ListOptions};
//! use woocommerce_api::rest::resources::{Order, OrderListOptions};
//! use woocommerce_api::WooCommerceClient;
//!
//! let client = WooCommerceClient::new(config);
//!
//! let order: Order = client.orders().get(727, None).await?;
//!
//! let page = client
//!     .orders()
//!     .list_page(Some(&OrderListOptions {
//!         list: ListOptions { page: Some(2), per_page: Some(50), ..Default::default() },
//!         ..Default::default()
//!     }))
//!     .await?;
//! println!("{} orders in total", page.total().unwrap_or_default());
//!
//! client.coupons().delete(719, Some(&DeleteOptions::force())).await?;
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`HttpError`]. Store-side failures carry the
//! decoded message:
//!
//! ```rust,ignore
//! use woocommerce_api::HttpError;
//!
//! match client.products().get(1, None).await {
//!     Ok(product) => println!("{:?}", product.name),
//!     Err(HttpError::Response(e)) if e.status == 404 => println!("not found: {}", e.message),
//!     Err(HttpError::RateLimit(e)) => println!("retry in {}s", e.retry_after),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Logging
//!
//! Nothing is logged by default. Install [`log::TracingLogger`] (or any
//! [`Logger`]) on the configuration to see each request and response:
//!
//! ```rust
//! use std::sync::Arc;
//! use woocommerce_api::log::{Level, TracingLogger};
//! use woocommerce_api::{ConsumerKey, ConsumerSecret, ShopUrl, WooCommerceConfig};
//!
//! let config = WooCommerceConfig::builder()
//!     .consumer_key(ConsumerKey::new("ck_key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_secret").unwrap())
//!     .shop(ShopUrl::new("shop.example.com").unwrap())
//!     .logger(Arc::new(TracingLogger::new(Level::Debug)))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod log;
pub mod rest;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use client::WooCommerceClient;
pub use config::{
    ApiVersion, ConsumerKey, ConsumerSecret, ShopUrl, WooCommerceConfig, WooCommerceConfigBuilder,
};
pub use error::ConfigError;
pub use log::{Level, Logger, NoopLogger, TracingLogger};

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, RateLimitError,
    ResponseDecodingError, ResponseError,
};

// Re-export REST resource types
pub use rest::{
    BatchRequest, BatchResponse, DeleteOptions, GetOptions, ListOptions, ResourceResponse,
    ResourceService, RestResource,
};

// Re-export webhook types
pub use webhooks::{verify_webhook, WebhookContext, WebhookError, WebhookRequest};
