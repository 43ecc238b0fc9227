//! Cart API route handlers.
//!
//! Every handler loads the session cart, applies one mutation, and answers
//! with the refreshed view, so the storefront can re-render from any
//! response without a follow-up fetch.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use rezar_core::{CurrencyCode, Price, ProductId};

use crate::cart::{Cart, CartEntry, CartStore, SessionCartStore};
use crate::error::AppError;
use crate::state::AppState;
use crate::whatsapp::{self, CustomerDetails};

/// One cart line as the storefront renders it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub line_total: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub quantity: u32,
}

/// Cart display data.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    fn from_cart<S: CartStore>(cart: &Cart<S>) -> Self {
        Self {
            items: cart.entries().iter().map(CartItemView::from).collect(),
            total: Price::new(cart.total(), CurrencyCode::GHS).to_string(),
            item_count: cart.item_count(),
        }
    }
}

impl From<&CartEntry> for CartItemView {
    fn from(entry: &CartEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            price: Price::new(entry.price, entry.currency).to_string(),
            line_total: Price::new(entry.line_total(), entry.currency).to_string(),
            image: entry.image.clone(),
            quantity: entry.quantity,
        }
    }
}

/// Body for the add endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRequest {
    pub product_id: String,
    pub quantity: Option<i64>,
}

/// Body for the quantity update endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub product_id: String,
    pub quantity: i64,
}

/// Body for the remove endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveRequest {
    pub product_id: String,
}

/// Body for checkout.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub customer: CustomerDetails,
    #[serde(default)]
    pub payment_method: String,
}

/// Response for the add endpoint: the notification plus the new view.
#[derive(Debug, Serialize)]
pub struct AddResponse {
    pub message: String,
    #[serde(flatten)]
    pub cart: CartView,
}

/// Response for the count badge.
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: u32,
}

/// Response for checkout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub message: String,
    pub total: String,
    pub whatsapp_url: String,
}

/// Quantities arrive as JSON numbers; negatives read as zero.
fn request_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity.max(0)).unwrap_or(u32::MAX)
}

/// Show the cart.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>, AppError> {
    let cart = Cart::load(SessionCartStore::new(session)).await?;
    Ok(Json(CartView::from_cart(&cart)))
}

/// Add a product to the cart.
///
/// Snapshots the product at add time; unknown ids answer 404.
#[instrument(skip(state, session, body), fields(product_id = %body.product_id))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<AddRequest>,
) -> Result<Json<AddResponse>, AppError> {
    let product = match ProductId::parse(&body.product_id) {
        Ok(id) => state.products().get(&id).await?,
        Err(_) => None,
    }
    .ok_or_else(|| AppError::NotFound("Product not found".to_owned()))?;

    let quantity = request_quantity(body.quantity.unwrap_or(1));

    let mut cart = Cart::load(SessionCartStore::new(session)).await?;
    cart.add_item(&product, quantity).await?;

    tracing::info!(id = %product.id, quantity, "Added to cart");
    Ok(Json(AddResponse {
        message: format!("{} added to cart", product.name),
        cart: CartView::from_cart(&cart),
    }))
}

/// Set the quantity of a cart line. Zero removes it; unknown ids are a
/// silent no-op.
#[instrument(skip(session, body), fields(product_id = %body.product_id))]
pub async fn update(
    session: Session,
    Json(body): Json<UpdateRequest>,
) -> Result<Json<CartView>, AppError> {
    let mut cart = Cart::load(SessionCartStore::new(session)).await?;
    if let Ok(id) = ProductId::parse(&body.product_id) {
        cart.update_quantity(&id, request_quantity(body.quantity))
            .await?;
    }
    Ok(Json(CartView::from_cart(&cart)))
}

/// Remove a cart line. Unknown ids are a silent no-op.
#[instrument(skip(session, body), fields(product_id = %body.product_id))]
pub async fn remove(
    session: Session,
    Json(body): Json<RemoveRequest>,
) -> Result<Json<CartView>, AppError> {
    let mut cart = Cart::load(SessionCartStore::new(session)).await?;
    if let Ok(id) = ProductId::parse(&body.product_id) {
        cart.remove_item(&id).await?;
    }
    Ok(Json(CartView::from_cart(&cart)))
}

/// Empty the cart.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Json<CartView>, AppError> {
    let mut cart = Cart::load(SessionCartStore::new(session)).await?;
    cart.clear().await?;
    Ok(Json(CartView::from_cart(&cart)))
}

/// Item count for the navigation badge.
pub async fn count(session: Session) -> Result<Json<CountResponse>, AppError> {
    let cart = Cart::load(SessionCartStore::new(session)).await?;
    Ok(Json(CountResponse {
        count: cart.item_count(),
    }))
}

/// Check out over WhatsApp.
///
/// Validates the customer block, builds the order message, and answers with
/// the prefilled handoff link. The cart empties whether or not the link is
/// ever opened.
#[instrument(skip(state, session, body))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, AppError> {
    if !body.customer.is_complete() || body.payment_method.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Please fill in all required fields".to_owned(),
        ));
    }

    let mut cart = Cart::load(SessionCartStore::new(session)).await?;
    if cart.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".to_owned()));
    }

    let total = cart.total();
    let message = whatsapp::order_message(
        &body.customer,
        cart.entries(),
        total,
        &body.payment_method,
    );
    let whatsapp_url = whatsapp::handoff_url(state.config().whatsapp_link.as_str(), &message);

    cart.clear().await?;

    tracing::info!(total = %total, "Order handed off to WhatsApp");
    Ok(Json(CheckoutResponse {
        message: format!("Thank you for your order, {}.", body.customer.name),
        total: Price::new(total, CurrencyCode::GHS).to_string(),
        whatsapp_url,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use axum_test::multipart::MultipartForm;
    use serde_json::{Value, json};

    use crate::routes::testing;

    /// Create a product through the API and hand back its id.
    async fn seed_product(server: &TestServer, name: &str) -> String {
        testing::login(server).await;
        let created = server
            .post("/api/products/create")
            .multipart(
                MultipartForm::new()
                    .add_text("name", name)
                    .add_text("category", "Windows")
                    .add_text("shortDescription", "Test window"),
            )
            .await
            .json::<Value>();
        created["id"].as_str().unwrap().to_owned()
    }

    #[tokio::test]
    async fn test_empty_cart_view() {
        let (server, _dir) = testing::server();

        let res = server.get("/api/cart").await;
        res.assert_status_ok();
        assert_eq!(
            res.json::<Value>(),
            json!({ "items": [], "total": "GHS 0.00", "itemCount": 0 })
        );
    }

    #[tokio::test]
    async fn test_add_and_count() {
        let (server, _dir) = testing::server();
        let id = seed_product(&server, "Louvre Window").await;

        let res = server
            .post("/api/cart/add")
            .json(&json!({ "productId": id, "quantity": 2 }))
            .await;
        res.assert_status_ok();

        let body = res.json::<Value>();
        assert_eq!(body["message"], "Louvre Window added to cart");
        assert_eq!(body["itemCount"], 2);
        assert_eq!(body["items"][0]["quantity"], 2);
        assert_eq!(body["items"][0]["name"], "Louvre Window");

        // Adding again merges into the same line
        server
            .post("/api/cart/add")
            .json(&json!({ "productId": id, "quantity": 3 }))
            .await
            .assert_status_ok();

        let count = server.get("/api/cart/count").await.json::<Value>();
        assert_eq!(count, json!({ "count": 5 }));

        let view = server.get("/api/cart").await.json::<Value>();
        assert_eq!(view["items"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_unknown_product() {
        let (server, _dir) = testing::server();

        let res = server
            .post("/api/cart/add")
            .json(&json!({ "productId": "rezar-00000000" }))
            .await;
        res.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(res.json::<Value>()["message"], "Product not found");

        let res = server
            .post("/api/cart/add")
            .json(&json!({ "productId": "not-an-id" }))
            .await;
        res.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_zero_removes_line() {
        let (server, _dir) = testing::server();
        let id = seed_product(&server, "Screen Door").await;

        server
            .post("/api/cart/add")
            .json(&json!({ "productId": id }))
            .await
            .assert_status_ok();

        let res = server
            .post("/api/cart/update")
            .json(&json!({ "productId": id, "quantity": 0 }))
            .await;
        res.assert_status_ok();
        assert_eq!(res.json::<Value>()["itemCount"], 0);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_noop() {
        let (server, _dir) = testing::server();
        let id = seed_product(&server, "Screen Door").await;

        server
            .post("/api/cart/add")
            .json(&json!({ "productId": id, "quantity": 2 }))
            .await
            .assert_status_ok();

        let res = server
            .post("/api/cart/update")
            .json(&json!({ "productId": "rezar-ffffffff", "quantity": 9 }))
            .await;
        res.assert_status_ok();
        assert_eq!(res.json::<Value>()["itemCount"], 2);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let (server, _dir) = testing::server();
        let first = seed_product(&server, "Frame A").await;

        server
            .post("/api/cart/add")
            .json(&json!({ "productId": first, "quantity": 2 }))
            .await
            .assert_status_ok();

        let res = server
            .post("/api/cart/remove")
            .json(&json!({ "productId": first }))
            .await;
        res.assert_status_ok();
        assert_eq!(res.json::<Value>()["itemCount"], 0);

        // Removing again stays a silent success
        server
            .post("/api/cart/remove")
            .json(&json!({ "productId": first }))
            .await
            .assert_status_ok();

        server
            .post("/api/cart/add")
            .json(&json!({ "productId": first }))
            .await
            .assert_status_ok();
        let res = server.post("/api/cart/clear").await;
        res.assert_status_ok();
        assert_eq!(res.json::<Value>()["itemCount"], 0);

        let view = server.get("/api/cart").await.json::<Value>();
        assert_eq!(view["itemCount"], 0);
    }

    #[tokio::test]
    async fn test_checkout_requires_complete_details() {
        let (server, _dir) = testing::server();

        let res = server
            .post("/api/cart/checkout")
            .json(&json!({ "customer": { "name": "Ama" }, "paymentMethod": "Cash" }))
            .await;
        res.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            res.json::<Value>()["message"],
            "Please fill in all required fields"
        );
    }

    #[tokio::test]
    async fn test_checkout_rejects_empty_cart() {
        let (server, _dir) = testing::server();

        let res = server
            .post("/api/cart/checkout")
            .json(&json!({
                "customer": {
                    "name": "Ama Mensah",
                    "email": "ama@example.com",
                    "phone": "+233201234567",
                    "address": "12 Ring Road",
                    "city": "Accra",
                    "country": "Ghana"
                },
                "paymentMethod": "Mobile Money"
            }))
            .await;
        res.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(res.json::<Value>()["message"], "Cart is empty");
    }

    #[tokio::test]
    async fn test_checkout_hands_off_and_clears_cart() {
        let (server, _dir) = testing::server();
        let id = seed_product(&server, "Pivot Door").await;

        server
            .post("/api/cart/add")
            .json(&json!({ "productId": id, "quantity": 2 }))
            .await
            .assert_status_ok();

        let res = server
            .post("/api/cart/checkout")
            .json(&json!({
                "customer": {
                    "name": "Ama Mensah",
                    "email": "ama@example.com",
                    "phone": "+233201234567",
                    "address": "12 Ring Road",
                    "city": "Accra",
                    "country": "Ghana"
                },
                "paymentMethod": "Mobile Money"
            }))
            .await;
        res.assert_status_ok();

        let body = res.json::<Value>();
        assert_eq!(body["message"], "Thank you for your order, Ama Mensah.");
        assert_eq!(body["total"], "GHS 0.00");
        let url = body["whatsappUrl"].as_str().unwrap();
        assert!(url.starts_with("https://wa.me/message/B42ODIFA73VQA1?text="));
        assert!(url.contains("New%20Order%20Received"));
        assert!(url.contains("Pivot%20Door%20%28Qty%3A%202%29"));
        assert!(url.contains("Payment%20Method%3A%20Mobile%20Money"));

        // Checkout empties the cart
        let view = server.get("/api/cart").await.json::<Value>();
        assert_eq!(view["itemCount"], 0);

        let res = server
            .post("/api/cart/checkout")
            .json(&json!({
                "customer": {
                    "name": "Ama Mensah",
                    "email": "ama@example.com",
                    "phone": "+233201234567",
                    "address": "12 Ring Road",
                    "city": "Accra",
                    "country": "Ghana"
                },
                "paymentMethod": "Mobile Money"
            }))
            .await;
        res.assert_status(StatusCode::BAD_REQUEST);
    }
}
