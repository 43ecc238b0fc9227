//! HTTP route handlers for the rezar backend.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                            - Redirect to /admin/login
//! GET    /admin/login                 - Login page
//! GET    /admin/dashboard             - Dashboard (redirects without a session)
//! GET    /health                      - Liveness check
//! GET    /health/ready                - Readiness check (data store reachable)
//!
//! # Products
//! GET    /api/products                - All products
//! GET    /api/products/featured       - Featured products only
//! POST   /api/products/create         - Create product (auth, multipart)
//! PUT    /api/products/update/{id}    - Update product (auth, multipart)
//! DELETE /api/products/delete/{id}    - Delete product (auth)
//! GET    /api/products/stats          - Dashboard stats (auth)
//!
//! # Admin accounts
//! POST   /api/admin/login             - Log in
//! POST   /api/admin/register          - Create an admin account
//! POST   /api/admin/logout            - Log out (destroys the session)
//! GET    /api/admin/check             - Session probe, never errors
//! GET    /api/admin/list              - List admin accounts (auth)
//! DELETE /api/admin/delete/{username} - Delete an admin account (auth)
//!
//! # Cart (session-backed)
//! GET    /api/cart                    - Cart view
//! POST   /api/cart/add                - Add a product
//! POST   /api/cart/update             - Set a line quantity
//! POST   /api/cart/remove             - Remove a line
//! POST   /api/cart/clear              - Empty the cart
//! GET    /api/cart/count              - Item count badge
//! POST   /api/cart/checkout           - WhatsApp order handoff
//!
//! # Contact
//! POST   /api/contact                 - WhatsApp contact handoff
//!
//! # Static assets
//! /public/*                           - ServeDir over the static directory
//! ```

pub mod admin;
pub mod cart;
pub mod contact;
pub mod pages;
pub mod products;

use std::path::Path;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::services::ServeDir;

use crate::media;
use crate::state::AppState;

/// Create the product API router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list))
        .route("/featured", get(products::featured))
        .route("/create", post(products::create))
        .route("/update/{id}", put(products::update))
        .route("/delete/{id}", delete(products::remove))
        .route("/stats", get(products::stats))
}

/// Create the admin account API router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route("/register", post(admin::register))
        .route("/logout", post(admin::logout))
        .route("/check", get(admin::check))
        .route("/list", get(admin::list))
        .route("/delete/{username}", delete(admin::remove))
}

/// Create the cart API router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
        .route("/checkout", post(cart::checkout))
}

/// Create all routes for the backend.
///
/// `static_dir` is the directory holding `views/` (login and dashboard
/// pages) and `public/` (assets served under `/public`).
pub fn routes(static_dir: &Path) -> Router<AppState> {
    Router::new()
        // Pages
        .route("/", get(pages::index))
        .route("/admin/login", get(pages::login_page))
        .route("/admin/dashboard", get(pages::dashboard_page))
        // Health pair
        .route("/health", get(pages::health))
        .route("/health/ready", get(pages::readiness))
        // JSON API
        .nest("/api/products", product_routes())
        .nest("/api/admin", admin_routes())
        .nest("/api/cart", cart_routes())
        .route("/api/contact", post(contact::submit))
        // Static assets
        .nest_service("/public", ServeDir::new(static_dir.join("public")))
        // Product forms carry up to 16 files; the default 2 MB limit is
        // far too small for them
        .layer(DefaultBodyLimit::max(media::MAX_UPLOAD_BODY))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod testing {
    //! In-process server harness shared by the route tests.

    use axum_test::TestServer;
    use tempfile::TempDir;

    use crate::config::ServerConfig;
    use crate::middleware;
    use crate::state::AppState;

    /// Credentials used by [`login`].
    pub const USERNAME: &str = "admin";
    pub const PASSWORD: &str = "orange-anvil-42";

    /// Build a test server over a fresh data directory.
    ///
    /// The returned guard keeps the directory alive for the test body.
    pub fn server() -> (TestServer, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::from_lookup(|key| match key {
            "REZAR_DATA_DIR" => Some(dir.path().display().to_string()),
            "REZAR_STATIC_DIR" => Some(dir.path().join("static").display().to_string()),
            _ => None,
        })
        .unwrap();

        let app = super::routes(&config.static_dir)
            .layer(middleware::create_session_layer(&config))
            .with_state(AppState::new(config));

        let server = TestServer::builder().save_cookies().build(app).unwrap();
        (server, dir)
    }

    /// Register and log in the default admin.
    ///
    /// The session cookie sticks to the server afterwards.
    pub async fn login(server: &TestServer) {
        server
            .post("/api/admin/register")
            .json(&serde_json::json!({ "username": USERNAME, "password": PASSWORD }))
            .await
            .assert_status_ok();
        server
            .post("/api/admin/login")
            .json(&serde_json::json!({ "username": USERNAME, "password": PASSWORD }))
            .await
            .assert_status_ok();
    }
}
