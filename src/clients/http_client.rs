//! HTTP client for WooCommerce REST API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to a WooCommerce store with automatic retry handling.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{
    body_snippet, classify, parse_response_headers, Classification, HttpResponse,
};
use crate::config::WooCommerceConfig;
use crate::log::Level;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP status that is retried without waiting.
const SERVICE_UNAVAILABLE: u16 = 503;

/// HTTP client for making requests to the WooCommerce REST API.
///
/// The client handles:
/// - Request construction through [`HttpRequest::new`]
/// - Response classification through [`classify`]
/// - Automatic retry of `429` (after `Retry-After`) and `503` (immediately)
///   responses, bounded by the configured retry budget
/// - Debug tracing of every attempt through the configured logger
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. Retry state lives in each call, so one client
/// can serve concurrent calls.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use woocommerce_api::clients::HttpClient;
///
/// let client = HttpClient::new(Arc::new(config));
/// let order: serde_json::Value = client.get("orders/17", None::<&()>).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The shared client configuration.
    config: Arc<WooCommerceConfig>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client sharing `config`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: Arc<WooCommerceConfig>) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        tracing::debug!(
            shop = config.shop().as_ref(),
            api_version = %config.api_version(),
            retries = config.retries(),
            "created WooCommerce HTTP client"
        );

        Self { client, config }
    }

    /// Returns the shared configuration.
    #[must_use]
    pub fn config(&self) -> &WooCommerceConfig {
        &self.config
    }

    /// Sends `request`, retrying rate-limited and unavailable responses.
    ///
    /// Each physical attempt increments a call-local attempt counter. The
    /// retry budget starts at the configured value:
    ///
    /// - A transport failure is returned immediately.
    /// - A 2xx response is returned with the attempt count.
    /// - A 429 is returned when the budget is `<= 1`; otherwise the client
    ///   sleeps for `Retry-After` seconds, decrements the budget and retries.
    /// - A 503 is returned when the budget is `<= 1`; otherwise the budget is
    ///   decremented and the request resent at once.
    /// - Every other error is returned immediately.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures and for the last
    /// classified error response.
    pub async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let logger = self.config.logger();
        let mut retries = self.config.retries();
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;

            let tracing_enabled = logger.enabled(Level::Debug);
            if tracing_enabled {
                logger.debug(&format!("{} {}", request.method, request.url));
                if let Some(body) = request.body_text() {
                    logger.debug(&format!("SENT: {body}"));
                }
            }

            let mut builder = self
                .client
                .request(request.method.into(), request.url.clone());
            for (key, value) in &request.headers {
                builder = builder.header(key, value);
            }
            if let Some(body) = &request.body {
                builder = builder.body(body.clone());
            }

            let res = builder.send().await?;
            let status = res.status().as_u16();
            let headers = parse_response_headers(res.headers());
            let body = res.bytes().await?.to_vec();

            if tracing_enabled {
                logger.debug(&format!("RECV {status}"));
                logger.debug(&format!("RESP: {}", body_snippet(&body)));
            }

            match classify(status, &headers, &body) {
                Classification::Success => {
                    return Ok(HttpResponse::new(status, headers, body, attempts));
                }
                Classification::RateLimit(error) => {
                    if retries <= 1 {
                        return Err(error.into());
                    }
                    logger.debug(&format!(
                        "rate limited on attempt {attempts}, retrying in {}s",
                        error.retry_after
                    ));
                    tokio::time::sleep(Duration::from_secs(error.retry_after)).await;
                    retries -= 1;
                }
                Classification::Response(error) if error.status == SERVICE_UNAVAILABLE => {
                    if retries <= 1 {
                        return Err(error.into());
                    }
                    logger.debug(&format!("service unavailable on attempt {attempts}, retrying"));
                    retries -= 1;
                }
                Classification::Response(error) => return Err(error.into()),
                Classification::Decoding(error) => return Err(error.into()),
            }
        }
    }

    /// Builds a request and executes it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built or the call fails.
    pub async fn create_and_execute<B, O>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        options: Option<&O>,
    ) -> Result<HttpResponse, HttpError>
    where
        B: Serialize + ?Sized,
        O: Serialize + ?Sized,
    {
        let request = HttpRequest::new(&self.config, method, path, body, options)?;
        self.execute(&request).await
    }

    /// Sends a GET request and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the call fails or the body does not match `T`.
    pub async fn get<T, O>(&self, path: &str, options: Option<&O>) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        O: Serialize + ?Sized,
    {
        self.create_and_execute(HttpMethod::Get, path, None::<&()>, options)
            .await?
            .json()
    }

    /// Sends a POST request with a JSON body and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the call fails or the body does not match `T`.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.create_and_execute(HttpMethod::Post, path, Some(body), None::<&()>)
            .await?
            .json()
    }

    /// Sends a PUT request with a JSON body and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the call fails or the body does not match `T`.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.create_and_execute(HttpMethod::Put, path, Some(body), None::<&()>)
            .await?
            .json()
    }

    /// Sends a DELETE request and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the call fails or the body does not match `T`.
    pub async fn delete<T, O>(&self, path: &str, options: Option<&O>) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        O: Serialize + ?Sized,
    {
        self.create_and_execute(HttpMethod::Delete, path, None::<&()>, options)
            .await?
            .json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConsumerKey, ConsumerSecret, ShopUrl};
    use crate::log::tests::RecordingLogger;
    use crate::log::Logger;

    /// Keeps warnings and errors only.
    #[derive(Debug, Default)]
    struct QuietLogger {
        inner: RecordingLogger,
    }

    impl Logger for QuietLogger {
        fn enabled(&self, level: Level) -> bool {
            level <= Level::Warn
        }

        fn log(&self, level: Level, message: &str) {
            self.inner.log(level, message);
        }
    }

    fn test_config(shop: &str, retries: u32) -> WooCommerceConfig {
        WooCommerceConfig::builder()
            .consumer_key(ConsumerKey::new("ck_key").unwrap())
            .consumer_secret(ConsumerSecret::new("cs_secret").unwrap())
            .shop(ShopUrl::new(shop).unwrap())
            .retries(retries)
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_shares_config() {
        let config = Arc::new(test_config("shop.example.com", 3));
        let client = HttpClient::new(Arc::clone(&config));

        assert_eq!(client.config().retries(), 3);
        assert_eq!(Arc::strong_count(&config), 2);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[tokio::test]
    async fn test_transport_error_is_not_retried_and_is_logged() {
        let logger = Arc::new(RecordingLogger::default());
        let config = WooCommerceConfig::builder()
            .consumer_key(ConsumerKey::new("ck_key").unwrap())
            .consumer_secret(ConsumerSecret::new("cs_secret").unwrap())
            .shop(ShopUrl::new("http://127.0.0.1:1").unwrap())
            .retries(5)
            .logger(logger.clone())
            .build()
            .unwrap();
        let client = HttpClient::new(Arc::new(config));

        let result: Result<serde_json::Value, _> = client.get("orders", None::<&()>).await;
        assert!(matches!(result, Err(HttpError::Network(_))));

        let records = logger.records.lock().unwrap();
        let request_lines: Vec<_> = records
            .iter()
            .filter(|(level, msg)| *level == Level::Debug && msg.starts_with("GET "))
            .collect();
        assert_eq!(request_lines.len(), 1);
        assert_eq!(
            request_lines[0].1,
            "GET http://127.0.0.1:1/wp-json/wc/v3/orders"
        );
    }

    #[tokio::test]
    async fn test_debug_lines_are_skipped_when_logger_disables_them() {
        let logger = Arc::new(QuietLogger::default());
        let config = WooCommerceConfig::builder()
            .consumer_key(ConsumerKey::new("ck_key").unwrap())
            .consumer_secret(ConsumerSecret::new("cs_secret").unwrap())
            .shop(ShopUrl::new("http://127.0.0.1:1").unwrap())
            .logger(logger.clone())
            .build()
            .unwrap();
        let client = HttpClient::new(Arc::new(config));

        let result: Result<serde_json::Value, _> = client.get("orders", None::<&()>).await;
        assert!(matches!(result, Err(HttpError::Network(_))));

        let records = logger.inner.records.lock().unwrap();
        assert!(records.iter().all(|(level, _)| *level != Level::Debug));
    }
}
