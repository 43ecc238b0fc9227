//! Authentication error types.

use thiserror::Error;

use rezar_core::types::UsernameError;

use crate::store::StoreError;

/// Errors that can occur during admin account operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid username format.
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    /// Invalid credentials (wrong password or unknown username).
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Username already registered.
    #[error("Username already exists")]
    UsernameTaken,

    /// Password too weak or invalid.
    #[error("{0}")]
    WeakPassword(String),

    /// No admin account with that username.
    #[error("Admin not found")]
    AdminNotFound,

    /// An admin tried to delete the account they are logged in as.
    #[error("Cannot delete your own account")]
    SelfDelete,

    /// Deleting this account would leave no admins at all.
    #[error("Cannot delete the last admin account")]
    LastAdmin,

    /// Store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
