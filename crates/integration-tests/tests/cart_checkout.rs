//! Cart and checkout flow over a live server.
//!
//! These tests require a running rezar server (cargo run -p rezar-server)
//! over a scratch data directory.
//!
//! Run with: cargo test -p rezar-integration-tests -- --ignored

use reqwest::{Client, StatusCode, multipart};
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the server under test (configurable via environment).
fn base_url() -> String {
    std::env::var("REZAR_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// A name no previous run can collide with.
fn unique_name(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    let tail = id.get(..8).expect("uuid is longer than 8 chars");
    format!("{prefix}-{tail}")
}

/// Register a fresh admin and log the client's cookie jar in.
///
/// Carts are session-backed, so the same jar carries the cart below.
async fn login(client: &Client, base_url: &str) {
    let credentials = json!({
        "username": unique_name("it-admin"),
        "password": "integration-pass",
    });

    let resp = client
        .post(format!("{base_url}/api/admin/register"))
        .json(&credentials)
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{base_url}/api/admin/login"))
        .json(&credentials)
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(resp.status(), StatusCode::OK);
}

/// Create a product to put in the cart; returns (id, name).
async fn seed_product(client: &Client, base_url: &str) -> (String, String) {
    let name = unique_name("it-door");
    let form = multipart::Form::new()
        .text("name", name.clone())
        .text("category", "Doors")
        .text("shortDescription", "Created by the integration suite");

    let resp = client
        .post(format!("{base_url}/api/products/create"))
        .multipart(form)
        .send()
        .await
        .expect("Failed to create product");
    assert_eq!(resp.status(), StatusCode::OK);

    let created: Value = resp.json().await.expect("Failed to parse response");
    let id = created["id"].as_str().expect("Product id").to_owned();
    (id, name)
}

fn customer() -> Value {
    json!({
        "name": "Ama Mensah",
        "email": "ama@example.com",
        "phone": "+233200000000",
        "address": "12 Ring Road",
        "city": "Accra",
        "country": "Ghana",
    })
}

// ============================================================================
// Cart Flow Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running rezar server"]
async fn test_cart_flow() {
    let client = client();
    let base_url = base_url();
    login(&client, &base_url).await;
    let (id, name) = seed_product(&client, &base_url).await;

    // Starts empty
    let resp = client
        .get(format!("{base_url}/api/cart"))
        .send()
        .await
        .expect("Failed to fetch cart");
    assert_eq!(resp.status(), StatusCode::OK);
    let cart: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(cart["itemCount"], 0);
    assert_eq!(cart["total"], "GHS 0.00");

    // Adds merge into one line
    let resp = client
        .post(format!("{base_url}/api/cart/add"))
        .json(&json!({ "productId": id, "quantity": 2 }))
        .send()
        .await
        .expect("Failed to add to cart");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], format!("{name} added to cart"));
    assert_eq!(body["itemCount"], 2);

    let resp = client
        .post(format!("{base_url}/api/cart/add"))
        .json(&json!({ "productId": id }))
        .send()
        .await
        .expect("Failed to add to cart");
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["itemCount"], 3);
    assert_eq!(body["items"].as_array().expect("Cart lines").len(), 1);

    let resp = client
        .get(format!("{base_url}/api/cart/count"))
        .send()
        .await
        .expect("Failed to fetch count");
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["count"], 3);

    // Set the line quantity directly
    let resp = client
        .post(format!("{base_url}/api/cart/update"))
        .json(&json!({ "productId": id, "quantity": 1 }))
        .send()
        .await
        .expect("Failed to update cart");
    let cart: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(cart["itemCount"], 1);

    // Remove, then clear a re-added line
    let resp = client
        .post(format!("{base_url}/api/cart/remove"))
        .json(&json!({ "productId": id }))
        .send()
        .await
        .expect("Failed to remove from cart");
    let cart: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(cart["itemCount"], 0);

    let resp = client
        .post(format!("{base_url}/api/cart/add"))
        .json(&json!({ "productId": id, "quantity": 4 }))
        .send()
        .await
        .expect("Failed to re-add to cart");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{base_url}/api/cart/clear"))
        .send()
        .await
        .expect("Failed to clear cart");
    let cart: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(cart["itemCount"], 0);
    assert!(cart["items"].as_array().expect("Cart lines").is_empty());
}

#[tokio::test]
#[ignore = "Requires a running rezar server"]
async fn test_add_unknown_product() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/api/cart/add"))
        .json(&json!({ "productId": "rezar-00000000" }))
        .send()
        .await
        .expect("Failed to post add");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Product not found");
}

// ============================================================================
// Checkout Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running rezar server"]
async fn test_checkout_handoff() {
    let client = client();
    let base_url = base_url();
    login(&client, &base_url).await;
    let (id, _) = seed_product(&client, &base_url).await;

    let resp = client
        .post(format!("{base_url}/api/cart/add"))
        .json(&json!({ "productId": id, "quantity": 2 }))
        .send()
        .await
        .expect("Failed to add to cart");
    assert_eq!(resp.status(), StatusCode::OK);

    // Incomplete details are rejected before any handoff
    let resp = client
        .post(format!("{base_url}/api/cart/checkout"))
        .json(&json!({ "customer": { "name": "Ama Mensah" }, "paymentMethod": "Mobile Money" }))
        .send()
        .await
        .expect("Failed to post checkout");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Please fill in all required fields");

    // Complete details produce the WhatsApp link and empty the cart
    let resp = client
        .post(format!("{base_url}/api/cart/checkout"))
        .json(&json!({ "customer": customer(), "paymentMethod": "Mobile Money" }))
        .send()
        .await
        .expect("Failed to post checkout");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Thank you for your order, Ama Mensah.");

    let url = body["whatsappUrl"].as_str().expect("Handoff URL");
    assert!(url.contains("text="));
    assert!(url.contains("New%20Order%20Received"));
    assert!(url.contains("Ama%20Mensah"));
    assert!(url.contains("Payment%20Method%3A%20Mobile%20Money"));

    let resp = client
        .get(format!("{base_url}/api/cart"))
        .send()
        .await
        .expect("Failed to fetch cart");
    let cart: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(cart["itemCount"], 0);
}

#[tokio::test]
#[ignore = "Requires a running rezar server"]
async fn test_checkout_empty_cart() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/api/cart/checkout"))
        .json(&json!({ "customer": customer(), "paymentMethod": "Cash" }))
        .send()
        .await
        .expect("Failed to post checkout");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Cart is empty");
}

// ============================================================================
// Contact Handoff Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running rezar server"]
async fn test_contact_handoff() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/api/contact"))
        .json(&json!({
            "name": "Kofi Boateng",
            "email": "kofi@example.com",
            "subject": "Balustrade quote",
            "message": "Looking for a frameless glass balustrade.",
        }))
        .send()
        .await
        .expect("Failed to post contact form");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Message sent successfully!");
    let url = body["whatsappUrl"].as_str().expect("Handoff URL");
    assert!(url.contains("New%20Contact%20Message"));
    assert!(url.contains("Balustrade%20quote"));
}

#[tokio::test]
#[ignore = "Requires a running rezar server"]
async fn test_contact_requires_all_fields() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/api/contact"))
        .json(&json!({ "name": "Kofi Boateng", "email": "kofi@example.com" }))
        .send()
        .await
        .expect("Failed to post contact form");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Please fill in all required fields");
}
