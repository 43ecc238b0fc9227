//! Administrator collection backed by `admins.json`.

use std::path::Path;

use rezar_core::Username;

use super::{JsonFile, StoreError};
use crate::models::Admin;

/// File name of the admin collection inside the data directory.
pub const ADMINS_FILE: &str = "admins.json";

/// Store for administrator accounts.
pub struct AdminStore {
    file: JsonFile<Vec<Admin>>,
}

impl AdminStore {
    /// Open the admin collection inside `data_dir`.
    #[must_use]
    pub fn open(data_dir: &Path) -> Self {
        Self {
            file: JsonFile::new(data_dir.join(ADMINS_FILE)),
        }
    }

    /// List every account, in stored order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` / `StoreError::DataCorruption` when the
    /// file cannot be read or parsed.
    pub async fn list_all(&self) -> Result<Vec<Admin>, StoreError> {
        self.file.read().await
    }

    /// Look up an account by username. Usernames are case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` / `StoreError::DataCorruption` when the
    /// file cannot be read or parsed.
    pub async fn get(&self, username: &Username) -> Result<Option<Admin>, StoreError> {
        let admins = self.file.read().await?;
        Ok(admins.into_iter().find(|a| a.username == *username))
    }

    /// Insert a new account.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the username is taken, and the
    /// usual read/write errors.
    pub async fn insert(&self, admin: Admin) -> Result<Admin, StoreError> {
        self.file
            .with_mut(|admins| {
                if admins.iter().any(|a| a.username == admin.username) {
                    return Err(StoreError::Conflict(format!(
                        "username {} already exists",
                        admin.username
                    )));
                }
                admins.push(admin.clone());
                Ok(admin)
            })
            .await
    }

    /// Delete the account with the given username.
    ///
    /// Returns whether an account was removed; an unknown username leaves
    /// the file untouched. The store refuses to drop the collection to
    /// zero accounts: at least one admin must always remain.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` when the deletion would remove the
    /// last account, and the usual read/write errors.
    pub async fn delete(&self, username: &Username) -> Result<bool, StoreError> {
        let result = self
            .file
            .with_mut(|admins| {
                if !admins.iter().any(|a| a.username == *username) {
                    return Err(StoreError::NotFound);
                }
                if admins.len() == 1 {
                    return Err(StoreError::Conflict(
                        "cannot delete the last admin account".to_owned(),
                    ));
                }
                admins.retain(|a| a.username != *username);
                Ok(())
            })
            .await;

        match result {
            Ok(()) => Ok(true),
            Err(StoreError::NotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Number of accounts.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` / `StoreError::DataCorruption` when the
    /// file cannot be read or parsed.
    pub async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.file.read().await?.len())
    }
}
