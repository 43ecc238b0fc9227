//! Product API route handlers.
//!
//! Reads are public; create, update, delete, and stats require an admin
//! session. Create and update take multipart bodies so the dashboard can
//! submit text fields and file uploads in one request.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use serde::Serialize;
use tracing::instrument;

use rezar_core::ProductId;

use crate::error::AppError;
use crate::media;
use crate::middleware::RequireAdmin;
use crate::models::{Product, ProductStats, ProductUpdate};
use crate::state::AppState;

/// Confirmation body for product deletion.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// Malformed and unknown ids answer the same way.
fn product_not_found() -> AppError {
    AppError::NotFound("Product not found".to_owned())
}

/// List every product in the catalog.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.products().list_all().await?;
    if products.is_empty() {
        tracing::warn!("Catalog is empty");
    } else {
        tracing::info!(count = products.len(), "Serving product list");
    }
    Ok(Json(products))
}

/// List featured products only.
#[instrument(skip(state))]
pub async fn featured(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let featured = state.products().list_featured().await?;
    tracing::info!(count = featured.len(), "Serving featured products");
    Ok(Json(featured))
}

/// Create a product from the dashboard's multipart form.
///
/// `name`, `category`, and `shortDescription` are required; uploads are
/// validated and converted before anything is persisted.
#[instrument(skip(admin, state, multipart))]
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Product>, AppError> {
    let form = media::parse_product_form(multipart).await?;
    let draft = form.into_draft().ok_or_else(|| {
        AppError::BadRequest("Missing required fields: name, category, shortDescription".to_owned())
    })?;

    let product = state.products().insert(Product::new(draft)).await?;
    tracing::info!(
        id = %product.id,
        slug = %product.slug,
        images = product.images.len(),
        by = %admin.username,
        "Product created"
    );
    Ok(Json(product))
}

/// Update a product from the dashboard's multipart form.
///
/// Only submitted fields change; file fields replace their list wholesale
/// when any file arrives.
#[instrument(skip(admin, state, multipart))]
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<Product>, AppError> {
    let id = ProductId::parse(&id).map_err(|_| product_not_found())?;
    let form = media::parse_product_form(multipart).await?;

    let updated = state
        .products()
        .update(&id, ProductUpdate::from(form))
        .await?
        .ok_or_else(product_not_found)?;

    tracing::info!(id = %updated.id, by = %admin.username, "Product updated");
    Ok(Json(updated))
}

/// Delete a product.
#[instrument(skip(admin, state))]
pub async fn remove(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = ProductId::parse(&id).map_err(|_| product_not_found())?;
    if !state.products().delete(&id).await? {
        return Err(product_not_found());
    }

    tracing::info!(%id, by = %admin.username, "Product deleted");
    Ok(Json(DeleteResponse {
        message: "Product deleted",
    }))
}

/// Aggregate catalog stats for the dashboard.
#[instrument(skip(state))]
pub async fn stats(
    _: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<ProductStats>, AppError> {
    Ok(Json(state.products().stats().await?))
}
