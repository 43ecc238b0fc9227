//! Session-related types.
//!
//! Types stored in the session for authentication and cart state.

use serde::{Deserialize, Serialize};

use rezar_core::Username;

/// Session-stored admin identity.
///
/// Minimal data stored in the session to identify the logged-in admin.
/// Carrying the username (rather than a bare flag) is what lets the
/// delete endpoint refuse self-deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    pub username: Username,
}

/// Session keys.
pub mod session_keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";

    /// Key for the visitor's cart entries.
    pub const CART: &str = "cart";
}
