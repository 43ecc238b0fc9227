//! Page and health route handlers.
//!
//! The admin panel is two static HTML pages served from the configured
//! static directory; everything dynamic happens against the JSON API.

use std::path::Path;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::OptionalAdmin;
use crate::state::AppState;

/// Liveness response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Read a page out of the static directory's `views/` folder.
async fn serve_page(static_dir: &Path, file: &str) -> Result<Html<String>, AppError> {
    let path = static_dir.join("views").join(file);
    let html = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| AppError::Internal(format!("failed to read {}: {e}", path.display())))?;
    Ok(Html(html))
}

/// Redirect the bare root to the login page.
pub async fn index() -> Redirect {
    Redirect::to("/admin/login")
}

/// Serve the login page.
#[instrument(skip(state))]
pub async fn login_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    serve_page(&state.config().static_dir, "login.html").await
}

/// Serve the dashboard, or bounce unauthenticated visitors to the login page.
#[instrument(skip(state, admin))]
pub async fn dashboard_page(
    State(state): State<AppState>,
    OptionalAdmin(admin): OptionalAdmin,
) -> Result<Response, AppError> {
    if admin.is_none() {
        return Ok(Redirect::to("/admin/login").into_response());
    }
    let page = serve_page(&state.config().static_dir, "admin-dashboard.html").await?;
    Ok(page.into_response())
}

/// Liveness health check endpoint.
///
/// Reports that the server is running. Does not check dependencies.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Readiness health check endpoint.
///
/// Verifies the data store is readable before returning OK.
/// Returns 503 Service Unavailable when it is not.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.products().count().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
