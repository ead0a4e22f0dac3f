//! The client entry point.
//!
//! [`WooCommerceClient`] owns the shared transport and hands out one
//! [`ResourceService`] per WooCommerce resource. Services borrow the client,
//! so they are cheap to create per call.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::config::{ConsumerKey, ConsumerSecret, ShopUrl, WooCommerceConfig};
use crate::error::ConfigError;
use crate::rest::resources::{
    Coupon, Customer, Order, OrderNote, OrderRefund, PaymentGateway, Product, ProductAttribute,
    ProductCategory, ProductReview, ProductTag, ProductVariation, ShippingClass, Webhook,
};
use crate::rest::ResourceService;

/// A WooCommerce REST API client.
///
/// # Thread Safety
///
/// `WooCommerceClient` is `Send + Sync`; share it behind an [`Arc`] to use it
/// from several tasks.
///
/// # Example
///
/// ```rust,ignore
/// use woocommerce_api::rest::resources::Order;
/// use woocommerce_api::WooCommerceClient;
///
/// let client = WooCommerceClient::with_credentials("ck_key", "cs_secret", "shop.example.com")?;
///
/// let order: Order = client.orders().get(727, None).await?;
/// let notes = client.order_notes(727).list(None).await?;
/// ```
#[derive(Debug)]
pub struct WooCommerceClient {
    http: HttpClient,
}

// Verify WooCommerceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WooCommerceClient>();
};

impl WooCommerceClient {
    /// Creates a client from a built configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed, which only
    /// happens when the TLS backend fails to initialize.
    #[must_use]
    pub fn new(config: WooCommerceConfig) -> Self {
        Self {
            http: HttpClient::new(Arc::new(config)),
        }
    }

    /// Creates a client with default settings from raw credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a credential is empty or the shop URL is invalid.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed.
    pub fn with_credentials(
        consumer_key: &str,
        consumer_secret: &str,
        shop: &str,
    ) -> Result<Self, ConfigError> {
        let config = WooCommerceConfig::builder()
            .consumer_key(ConsumerKey::new(consumer_key)?)
            .consumer_secret(ConsumerSecret::new(consumer_secret)?)
            .shop(ShopUrl::new(shop)?)
            .build()?;
        Ok(Self::new(config))
    }

    /// Returns the shared transport, for endpoints without a typed service.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &WooCommerceConfig {
        self.http.config()
    }

    /// Orders.
    #[must_use]
    pub fn orders(&self) -> ResourceService<'_, Order> {
        ResourceService::new(&self.http, "orders")
    }

    /// Notes of one order.
    #[must_use]
    pub fn order_notes(&self, order_id: u64) -> ResourceService<'_, OrderNote> {
        ResourceService::new(&self.http, format!("orders/{order_id}/notes"))
    }

    /// Refunds of one order.
    #[must_use]
    pub fn order_refunds(&self, order_id: u64) -> ResourceService<'_, OrderRefund> {
        ResourceService::new(&self.http, format!("orders/{order_id}/refunds"))
    }

    /// Products.
    #[must_use]
    pub fn products(&self) -> ResourceService<'_, Product> {
        ResourceService::new(&self.http, "products")
    }

    /// Variations of one variable product.
    #[must_use]
    pub fn product_variations(&self, product_id: u64) -> ResourceService<'_, ProductVariation> {
        ResourceService::new(&self.http, format!("products/{product_id}/variations"))
    }

    /// Global product attributes.
    #[must_use]
    pub fn product_attributes(&self) -> ResourceService<'_, ProductAttribute> {
        ResourceService::new(&self.http, "products/attributes")
    }

    /// Product categories.
    #[must_use]
    pub fn product_categories(&self) -> ResourceService<'_, ProductCategory> {
        ResourceService::new(&self.http, "products/categories")
    }

    /// Product tags.
    #[must_use]
    pub fn product_tags(&self) -> ResourceService<'_, ProductTag> {
        ResourceService::new(&self.http, "products/tags")
    }

    /// Product shipping classes.
    #[must_use]
    pub fn product_shipping_classes(&self) -> ResourceService<'_, ShippingClass> {
        ResourceService::new(&self.http, "products/shipping_classes")
    }

    /// Product reviews.
    #[must_use]
    pub fn product_reviews(&self) -> ResourceService<'_, ProductReview> {
        ResourceService::new(&self.http, "products/reviews")
    }

    /// Customers.
    #[must_use]
    pub fn customers(&self) -> ResourceService<'_, Customer> {
        ResourceService::new(&self.http, "customers")
    }

    /// Coupons.
    #[must_use]
    pub fn coupons(&self) -> ResourceService<'_, Coupon> {
        ResourceService::new(&self.http, "coupons")
    }

    /// Webhook subscriptions.
    #[must_use]
    pub fn webhooks(&self) -> ResourceService<'_, Webhook> {
        ResourceService::new(&self.http, "webhooks")
    }

    /// Payment gateways.
    #[must_use]
    pub fn payment_gateways(&self) -> ResourceService<'_, PaymentGateway> {
        ResourceService::new(&self.http, "payment_gateways")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> WooCommerceClient {
        WooCommerceClient::with_credentials("ck_key", "cs_secret", "shop.example.com").unwrap()
    }

    #[test]
    fn test_with_credentials_uses_defaults() {
        let client = client();
        assert_eq!(client.config().retries(), 0);
        assert_eq!(client.config().shop().as_ref(), "https://shop.example.com/");
    }

    #[test]
    fn test_with_credentials_rejects_empty_key() {
        let result = WooCommerceClient::with_credentials("", "cs_secret", "shop.example.com");
        assert!(matches!(result, Err(ConfigError::EmptyConsumerKey)));
    }

    #[test]
    fn test_service_base_paths() {
        let client = client();
        assert_eq!(client.orders().base_path(), "orders");
        assert_eq!(client.order_notes(727).base_path(), "orders/727/notes");
        assert_eq!(client.order_refunds(727).base_path(), "orders/727/refunds");
        assert_eq!(
            client.product_variations(22).base_path(),
            "products/22/variations"
        );
        assert_eq!(
            client.product_shipping_classes().base_path(),
            "products/shipping_classes"
        );
        assert_eq!(client.payment_gateways().base_path(), "payment_gateways");
    }
}
