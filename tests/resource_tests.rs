//! Integration tests for the resource services.
//!
//! These tests verify that each service sends the right method, path, query
//! and body for its resource, and decodes what the store returns.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use woocommerce_api::rest::resources::{
    Coupon, Customer, OrderNote, OrderNoteListOptions, PaymentGateway, Product,
    ProductListOptions, ProductVariation,
};
use woocommerce_api::rest::{BatchRequest, Context, DeleteOptions, GetOptions, ListOptions};
use woocommerce_api::{
    ConsumerKey, ConsumerSecret, HttpError, ShopUrl, WooCommerceClient, WooCommerceConfig,
};

fn client_for(server: &MockServer) -> WooCommerceClient {
    let config = WooCommerceConfig::builder()
        .consumer_key(ConsumerKey::new("ck_key").unwrap())
        .consumer_secret(ConsumerSecret::new("cs_secret").unwrap())
        .shop(ShopUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    WooCommerceClient::new(config)
}

#[tokio::test]
async fn test_list_products_with_filters_and_totals() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products"))
        .and(query_param("per_page", "2"))
        .and(query_param("page", "1"))
        .and(query_param("sku", "HOODIE"))
        .and(query_param("include", "10,11"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-WP-Total", "5")
                .insert_header("X-WP-TotalPages", "3")
                .set_body_json(json!([
                    {"id": 10, "name": "Hoodie", "type": "variable"},
                    {"id": 11, "name": "Hoodie with Logo", "type": "simple"}
                ])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = ProductListOptions {
        list: ListOptions {
            page: Some(1),
            per_page: Some(2),
            include: Some(vec![10, 11]),
            ..Default::default()
        },
        sku: Some("HOODIE".to_string()),
        ..Default::default()
    };
    let page = client.products().list_page(Some(&options)).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page[1].product_type.as_deref(), Some("simple"));
    assert_eq!(page.total(), Some(5));
    assert_eq!(page.total_pages(), Some(3));
    assert!(page.has_next_page(1));
    assert!(!page.has_next_page(3));
}

#[tokio::test]
async fn test_get_with_edit_context() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/customers/25"))
        .and(query_param("context", "edit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 25,
            "email": "john.doe@example.com",
            "billing": {"city": "San Francisco"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = GetOptions {
        context: Some(Context::Edit),
    };
    let customer: Customer = client.customers().get(25, Some(&options)).await.unwrap();

    assert_eq!(customer.email.as_deref(), Some("john.doe@example.com"));
    assert_eq!(
        customer.billing.unwrap().city.as_deref(),
        Some("San Francisco")
    );
}

#[tokio::test]
async fn test_update_puts_to_item_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/wp-json/wc/v3/products/794"))
        .and(body_json(json!({"id": 794, "regular_price": "24.54"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 794, "regular_price": "24.54", "price": "24.54"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let product = Product {
        id: Some(794),
        regular_price: Some("24.54".to_string()),
        ..Default::default()
    };
    let updated = client.products().update(&product).await.unwrap();
    assert_eq!(updated.price.as_deref(), Some("24.54"));
}

#[tokio::test]
async fn test_update_without_id_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.products().update(&Product::default()).await;
    assert!(matches!(
        result,
        Err(HttpError::MissingResourceId { resource: "Product" })
    ));
}

#[tokio::test]
async fn test_delete_with_force() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/wp-json/wc/v3/coupons/719"))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 719, "code": "10off"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let deleted: Coupon = client
        .coupons()
        .delete(719, Some(&DeleteOptions::force()))
        .await
        .unwrap();
    assert_eq!(deleted.code.as_deref(), Some("10off"));
}

#[tokio::test]
async fn test_batch_posts_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wp-json/wc/v3/coupons/batch"))
        .and(body_json(json!({
            "create": [{"code": "20off", "amount": "20"}],
            "update": [{"id": 719, "amount": "15"}],
            "delete": [720]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "create": [{"id": 721, "code": "20off"}],
            "update": [{"id": 719, "amount": "15.00"}],
            "delete": [{"id": 720}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let batch = BatchRequest::new()
        .create(Coupon {
            code: Some("20off".to_string()),
            amount: Some("20".to_string()),
            ..Default::default()
        })
        .update(Coupon {
            id: Some(719),
            amount: Some("15".to_string()),
            ..Default::default()
        })
        .delete(720);
    let result = client.coupons().batch(&batch).await.unwrap();

    assert_eq!(result.create[0].id, Some(721));
    assert_eq!(result.update[0].amount.as_deref(), Some("15.00"));
    assert_eq!(result.delete[0].id, Some(720));
}

#[tokio::test]
async fn test_order_notes_are_nested_under_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/orders/727/notes"))
        .and(query_param("type", "customer"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 281, "note": "Order ok!!!", "customer_note": true}])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/wp-json/wc/v3/orders/727/notes"))
        .and(body_json(json!({"note": "Shipped"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 282, "note": "Shipped"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let notes = client
        .order_notes(727)
        .list(Some(&OrderNoteListOptions {
            note_type: Some("customer".to_string()),
        }))
        .await
        .unwrap();
    assert_eq!(notes[0].customer_note, Some(true));

    let created = client
        .order_notes(727)
        .create(&OrderNote {
            note: Some("Shipped".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, Some(282));
}

#[tokio::test]
async fn test_order_refund_delete_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/wp-json/wc/v3/orders/723/refunds/726"))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 726, "amount": "10.00"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let refund = client
        .order_refunds(723)
        .delete(726, Some(&DeleteOptions::force()))
        .await
        .unwrap();
    assert_eq!(refund.amount.as_deref(), Some("10.00"));
}

#[tokio::test]
async fn test_variations_are_nested_under_product() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products/22/variations/733"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 733,
            "attributes": [{"id": 6, "name": "Color", "option": "White"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let variation: ProductVariation = client.product_variations(22).get(733, None).await.unwrap();
    assert_eq!(variation.id, Some(733));
}

#[tokio::test]
async fn test_customer_downloads() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/customers/26/downloads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "download_id": "91447fd1849316bbc89dfb7e986a6006",
            "product_id": 96,
            "order_id": 723,
            "downloads_remaining": "unlimited",
            "access_expires": "never"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let downloads = client.customers().downloads(26).await.unwrap();

    assert_eq!(downloads.len(), 1);
    assert_eq!(downloads[0].order_id, Some(723));
    assert_eq!(downloads[0].downloads_remaining.as_deref(), Some("unlimited"));
}

#[tokio::test]
async fn test_payment_gateway_string_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/wp-json/wc/v3/payment_gateways/bacs"))
        .and(body_json(json!({"id": "bacs", "enabled": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "bacs",
            "enabled": true,
            "method_title": "BACS"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let gateway = client
        .payment_gateways()
        .update(&PaymentGateway {
            id: Some("bacs".to_string()),
            enabled: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(gateway.method_title.as_deref(), Some("BACS"));
}
