//! JSON-file persistence for the rezar data directory.
//!
//! # Data directory
//!
//! - `products.json` - the catalog, an array of products
//! - `admins.json` - administrator accounts
//!
//! Each file is read and rewritten wholesale per operation, with one async
//! mutex per file serializing access. There are no transactions and no
//! retries; a missing file reads as an empty collection.

pub mod admins;
pub mod products;

use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::Mutex;

pub use admins::AdminStore;
pub use products::ProductStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error reading or writing a data file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Data on disk is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(#[from] serde_json::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate product id).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// One collection held in a JSON file.
///
/// Reads load the whole file; writes rewrite it. The guard spans every
/// read-modify-write so concurrent handlers serialize on the file.
pub(crate) struct JsonFile<T> {
    path: PathBuf,
    guard: Mutex<()>,
    _collection: PhantomData<fn() -> T>,
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            guard: Mutex::new(()),
            _collection: PhantomData,
        }
    }

    /// Read the whole collection.
    pub(crate) async fn read(&self) -> Result<T, StoreError> {
        let _guard = self.guard.lock().await;
        self.load().await
    }

    /// Read the collection, apply `apply`, and rewrite the file.
    ///
    /// The file is left untouched when `apply` fails.
    pub(crate) async fn with_mut<R>(
        &self,
        apply: impl FnOnce(&mut T) -> Result<R, StoreError>,
    ) -> Result<R, StoreError> {
        let _guard = self.guard.lock().await;
        let mut data = self.load().await?;
        let out = apply(&mut data)?;
        self.persist(&data).await?;
        Ok(out)
    }

    async fn load(&self) -> Result<T, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, data: &T) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(data)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}
