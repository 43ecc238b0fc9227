//! Administrator account types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rezar_core::Username;

/// An administrator account as stored in `admins.json`.
///
/// The password hash is an Argon2id PHC string. It stays inside the data
/// file and the auth service; API responses use [`AdminInfo`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub username: Username,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    /// Create an account with the given (already hashed) password.
    #[must_use]
    pub fn new(username: Username, password_hash: String) -> Self {
        Self {
            username,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// The public view of this account.
    #[must_use]
    pub fn info(&self) -> AdminInfo {
        AdminInfo {
            username: self.username.clone(),
            created_at: self.created_at,
        }
    }
}

/// Public view of an administrator account, safe to list over the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminInfo {
    pub username: Username,
    pub created_at: DateTime<Utc>,
}
