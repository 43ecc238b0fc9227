//! Admin authentication service.
//!
//! Wraps the admin store with password hashing and the account-management
//! guard rules. Handlers and the CLI go through this service; nothing else
//! touches password hashes.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use rezar_core::Username;

use crate::models::{Admin, AdminInfo, CurrentAdmin};
use crate::store::{AdminStore, StoreError};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
///
/// Handles admin registration, login, and account deletion.
pub struct AuthService<'a> {
    admins: &'a AdminStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(admins: &'a AdminStore) -> Self {
        Self { admins }
    }

    /// Register a new admin account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUsername` if the username fails validation.
    /// Returns `AuthError::WeakPassword` if the password is too short.
    /// Returns `AuthError::UsernameTaken` if the username is already registered.
    pub async fn register(&self, username: &str, password: &str) -> Result<Admin, AuthError> {
        let username = Username::parse(username)?;
        validate_password(password)?;
        let password_hash = hash_password(password)?;

        let admin = self
            .admins
            .insert(Admin::new(username, password_hash))
            .await
            .map_err(|e| match e {
                StoreError::Conflict(_) => AuthError::UsernameTaken,
                other => AuthError::Store(other),
            })?;

        Ok(admin)
    }

    /// Login with username and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown username and
    /// for a wrong password alike; callers cannot tell the two apart.
    pub async fn login(&self, username: &str, password: &str) -> Result<Admin, AuthError> {
        let username = Username::parse(username).map_err(|_| AuthError::InvalidCredentials)?;

        let admin = self
            .admins
            .get(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &admin.password_hash)?;

        Ok(admin)
    }

    /// List every admin account, without password hashes.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the store cannot be read.
    pub async fn list(&self) -> Result<Vec<AdminInfo>, AuthError> {
        let admins = self.admins.list_all().await?;
        Ok(admins.iter().map(Admin::info).collect())
    }

    /// Delete the account named `target`.
    ///
    /// Two guard rules apply: an admin cannot delete the account they are
    /// logged in as, and the collection never drops to zero accounts.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SelfDelete`, `AuthError::LastAdmin`, or
    /// `AuthError::AdminNotFound` when a guard or lookup fails.
    pub async fn delete_account(
        &self,
        current: &CurrentAdmin,
        target: &str,
    ) -> Result<(), AuthError> {
        // A name that cannot be a username cannot name an account either
        let Ok(target) = Username::parse(target) else {
            return Err(AuthError::AdminNotFound);
        };

        if current.username == target {
            return Err(AuthError::SelfDelete);
        }

        let deleted = self.admins.delete(&target).await.map_err(|e| match e {
            StoreError::Conflict(_) => AuthError::LastAdmin,
            other => AuthError::Store(other),
        })?;

        if deleted {
            Ok(())
        } else {
            Err(AuthError::AdminNotFound)
        }
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
