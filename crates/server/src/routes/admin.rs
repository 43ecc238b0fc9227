//! Admin account API route handlers.
//!
//! Session establishment and teardown live here; validation, hashing, and
//! the delete guards sit in [`AuthService`].

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::{OptionalAdmin, RequireAdmin, clear_current_admin, set_current_admin};
use crate::models::{AdminInfo, CurrentAdmin};
use crate::services::AuthService;
use crate::state::AppState;

/// Credentials for login and registration.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Message-only response body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Session probe response body.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub authenticated: bool,
}

/// Log an admin in and establish the session.
#[instrument(skip(state, session, body), fields(username = %body.username))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let auth = AuthService::new(state.admins());
    let admin = match auth.login(&body.username, &body.password).await {
        Ok(admin) => admin,
        Err(e) => {
            tracing::warn!("Login failed: {e}");
            return Err(e.into());
        }
    };

    set_current_admin(
        &session,
        &CurrentAdmin {
            username: admin.username,
        },
    )
    .await?;

    tracing::info!("Login successful");
    Ok(Json(MessageResponse {
        message: "Login successful",
    }))
}

/// Create a new admin account.
///
/// Takes no session; the login page drives this directly when the panel is
/// first set up.
#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let auth = AuthService::new(state.admins());
    let admin = auth.register(&body.username, &body.password).await?;

    tracing::info!(username = %admin.username, "Admin account created");
    Ok(Json(MessageResponse {
        message: "Registration successful",
    }))
}

/// Log out and destroy the session.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Json<MessageResponse>, AppError> {
    clear_current_admin(&session).await?;
    // Drop the whole session, cart included
    session.flush().await?;

    tracing::info!("Logout successful");
    Ok(Json(MessageResponse {
        message: "Logout successful",
    }))
}

/// Report whether the caller has an admin session. Never errors.
pub async fn check(OptionalAdmin(admin): OptionalAdmin) -> Json<CheckResponse> {
    Json(CheckResponse {
        authenticated: admin.is_some(),
    })
}

/// List all admin accounts, password hashes omitted.
#[instrument(skip(state))]
pub async fn list(
    _: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminInfo>>, AppError> {
    let auth = AuthService::new(state.admins());
    Ok(Json(auth.list().await?))
}

/// Delete an admin account.
///
/// Refuses to delete the caller's own account or the last one standing.
#[instrument(skip(admin, state))]
pub async fn remove(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let auth = AuthService::new(state.admins());
    auth.delete_account(&admin, &username).await?;

    tracing::info!(target = %username, by = %admin.username, "Admin account deleted");
    Ok(Json(MessageResponse {
        message: "Admin deleted",
    }))
}
