//! Product collection backed by `products.json`.

use std::path::Path;

use rezar_core::ProductId;

use super::{JsonFile, StoreError};
use crate::models::{Product, ProductStats, ProductUpdate};

/// File name of the product collection inside the data directory.
pub const PRODUCTS_FILE: &str = "products.json";

/// How many products `stats` reports as recent uploads.
const RECENT_UPLOAD_LIMIT: usize = 5;

/// Store for catalog products.
pub struct ProductStore {
    file: JsonFile<Vec<Product>>,
}

impl ProductStore {
    /// Open the product collection inside `data_dir`.
    ///
    /// The file does not need to exist yet; it reads as an empty catalog
    /// and is created on first write.
    #[must_use]
    pub fn open(data_dir: &Path) -> Self {
        Self {
            file: JsonFile::new(data_dir.join(PRODUCTS_FILE)),
        }
    }

    /// List every product, in stored order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` / `StoreError::DataCorruption` when the
    /// file cannot be read or parsed.
    pub async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        self.file.read().await
    }

    /// List products flagged for homepage promotion.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` / `StoreError::DataCorruption` when the
    /// file cannot be read or parsed.
    pub async fn list_featured(&self) -> Result<Vec<Product>, StoreError> {
        let mut products = self.file.read().await?;
        products.retain(|p| p.featured);
        Ok(products)
    }

    /// Look up a product by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` / `StoreError::DataCorruption` when the
    /// file cannot be read or parsed.
    pub async fn get(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        let products = self.file.read().await?;
        Ok(products.into_iter().find(|p| p.id == *id))
    }

    /// Insert a new product.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if a product with the same id already
    /// exists, and the usual read/write errors.
    pub async fn insert(&self, product: Product) -> Result<Product, StoreError> {
        self.file
            .with_mut(|products| {
                if products.iter().any(|p| p.id == product.id) {
                    return Err(StoreError::Conflict(format!(
                        "duplicate product id {}",
                        product.id
                    )));
                }
                products.push(product.clone());
                Ok(product)
            })
            .await
    }

    /// Insert a batch of products in one file write.
    ///
    /// Used by seeding; the whole batch is rejected if any id collides with
    /// an existing or in-batch product.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` on any duplicate id, and the usual
    /// read/write errors.
    pub async fn insert_many(&self, batch: Vec<Product>) -> Result<usize, StoreError> {
        self.file
            .with_mut(|products| {
                for product in &batch {
                    let in_store = products.iter().any(|p| p.id == product.id);
                    let in_batch = batch.iter().filter(|p| p.id == product.id).count() > 1;
                    if in_store || in_batch {
                        return Err(StoreError::Conflict(format!(
                            "duplicate product id {}",
                            product.id
                        )));
                    }
                }
                let inserted = batch.len();
                products.extend(batch);
                Ok(inserted)
            })
            .await
    }

    /// Apply a partial update to the product with the given id.
    ///
    /// Returns the updated product, or `None` (leaving the file untouched)
    /// if no product has that id.
    ///
    /// # Errors
    ///
    /// Returns the usual read/write errors.
    pub async fn update(
        &self,
        id: &ProductId,
        update: ProductUpdate,
    ) -> Result<Option<Product>, StoreError> {
        let result = self
            .file
            .with_mut(|products| {
                let product = products
                    .iter_mut()
                    .find(|p| p.id == *id)
                    .ok_or(StoreError::NotFound)?;
                product.apply(update);
                Ok(product.clone())
            })
            .await;

        match result {
            Ok(product) => Ok(Some(product)),
            Err(StoreError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Delete the product with the given id.
    ///
    /// Returns whether a product was removed; an unknown id leaves the
    /// file untouched.
    ///
    /// # Errors
    ///
    /// Returns the usual read/write errors.
    pub async fn delete(&self, id: &ProductId) -> Result<bool, StoreError> {
        let result = self
            .file
            .with_mut(|products| {
                let before = products.len();
                products.retain(|p| p.id != *id);
                if products.len() == before {
                    return Err(StoreError::NotFound);
                }
                Ok(())
            })
            .await;

        match result {
            Ok(()) => Ok(true),
            Err(StoreError::NotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Number of products in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` / `StoreError::DataCorruption` when the
    /// file cannot be read or parsed.
    pub async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.file.read().await?.len())
    }

    /// Aggregate counts plus the most recent uploads for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` / `StoreError::DataCorruption` when the
    /// file cannot be read or parsed.
    pub async fn stats(&self) -> Result<ProductStats, StoreError> {
        let products = self.file.read().await?;
        let total_products = products.len();
        let featured_count = products.iter().filter(|p| p.featured).count();

        let mut recent_uploads = products;
        recent_uploads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent_uploads.truncate(RECENT_UPLOAD_LIMIT);

        Ok(ProductStats {
            total_products,
            featured_count,
            recent_uploads,
        })
    }
}
