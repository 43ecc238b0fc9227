//! Bootstrap command for a fresh deployment.
//!
//! Ensures the default `admin` account exists and imports a product export
//! into an empty catalog. Safe to run repeatedly: an existing admin is left
//! alone and a non-empty catalog is never touched.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use rezar_core::{CurrencyCode, ProductId, ProductIdError, Slug, SlugError};
use rezar_server::models::Product;
use rezar_server::services::{AuthError, AuthService};
use rezar_server::store::{AdminStore, ProductStore, StoreError};

use super::{GENERATED_PASSWORD_LENGTH, generate_password};

/// Username of the bootstrap account.
pub const DEFAULT_ADMIN: &str = "admin";

/// Errors that can occur during seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Product export file cannot be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Product export file is not valid JSON.
    #[error("Failed to parse product export: {0}")]
    Parse(#[from] serde_json::Error),

    /// An export entry carries a malformed product id.
    #[error("Invalid product id {id:?}: {source}")]
    InvalidId { id: String, source: ProductIdError },

    /// An export entry carries a malformed slug.
    #[error("Invalid slug {slug:?}: {source}")]
    InvalidSlug { slug: String, source: SlugError },

    /// Default admin could not be created.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Catalog import failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One entry in a product export file.
///
/// Export files use snake_case keys and carry only the storefront-facing
/// fields; everything else gets its default on import. Older exports used
/// a plain `description` key, kept here as a fallback.
#[derive(Debug, Deserialize)]
struct SeedProduct {
    #[serde(default)]
    id: Option<String>,
    name: String,
    category: String,
    #[serde(default)]
    short_description: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    price: Decimal,
    #[serde(default)]
    currency: CurrencyCode,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    specs: BTreeMap<String, String>,
    #[serde(default)]
    stock: u32,
    #[serde(default)]
    slug: Option<String>,
}

impl SeedProduct {
    fn into_product(self) -> Result<Product, SeedError> {
        let id = match self.id {
            Some(raw) => {
                ProductId::parse(&raw).map_err(|source| SeedError::InvalidId { id: raw, source })?
            }
            None => ProductId::generate(),
        };
        let slug = match self.slug {
            Some(raw) => Slug::parse(&raw)
                .map_err(|source| SeedError::InvalidSlug { slug: raw, source })?,
            None => Slug::from_name(&self.name),
        };
        let short_description = self.short_description.or(self.description).unwrap_or_default();

        let now = Utc::now();
        Ok(Product {
            id,
            name: self.name,
            category: self.category,
            short_description,
            long_description: String::new(),
            price: self.price,
            currency: self.currency,
            images: self.images,
            additional_images: Vec::new(),
            specs: self.specs,
            stock: self.stock,
            slug,
            featured: false,
            video: Vec::new(),
            attachments: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Run the seed: ensure the default admin exists, then import products when
/// the catalog is empty.
///
/// # Errors
///
/// Returns `SeedError` when the export file cannot be read or parsed, an
/// entry is malformed, or a store cannot be written.
pub async fn run(
    data_dir: &Path,
    products: Option<&Path>,
    admin_password: Option<&str>,
) -> Result<(), SeedError> {
    seed_admin(data_dir, admin_password).await?;

    if let Some(path) = products {
        seed_products(data_dir, path).await?;
    }

    info!("Seeding completed");
    Ok(())
}

/// Create the default admin account unless it already exists.
async fn seed_admin(data_dir: &Path, password: Option<&str>) -> Result<(), SeedError> {
    let admins = AdminStore::open(data_dir);
    let auth = AuthService::new(&admins);

    let generated = password.is_none();
    let password =
        password.map_or_else(|| generate_password(GENERATED_PASSWORD_LENGTH), str::to_owned);

    match auth.register(DEFAULT_ADMIN, &password).await {
        Ok(_) => {
            info!(username = DEFAULT_ADMIN, "Default admin created");
            if generated {
                info!("Generated password: {password}");
            }
            Ok(())
        }
        Err(AuthError::UsernameTaken) => {
            info!(username = DEFAULT_ADMIN, "Default admin already exists");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Import products from an export file into an empty catalog.
async fn seed_products(data_dir: &Path, path: &Path) -> Result<(), SeedError> {
    let store = ProductStore::open(data_dir);

    let existing = store.count().await?;
    if existing > 0 {
        info!(existing, "Catalog already has products, skipping import");
        return Ok(());
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Read {
            path: path.to_owned(),
            source,
        })?;
    let entries: Vec<SeedProduct> = serde_json::from_str(&content)?;

    let batch = entries
        .into_iter()
        .map(SeedProduct::into_product)
        .collect::<Result<Vec<_>, _>>()?;

    let imported = store.insert_many(batch).await?;
    info!(imported, "Products imported");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn write_export(dir: &Path) -> PathBuf {
        let entries = serde_json::json!([
            {
                "id": "rezar-0a1b2c3d",
                "name": "Sliding Window X500",
                "category": "Windows",
                "short_description": "Aluminium sliding window",
                "price": "450.00",
                "currency": "GHS",
                "images": ["/assets/products/x500.jpg"],
                "specs": { "Frame": "Aluminium" },
                "stock": 12,
                "slug": "sliding-window-x500"
            },
            {
                "name": "Pivot Door",
                "category": "Doors",
                "description": "Entry pivot door"
            }
        ]);
        let path = dir.join("products-export.json");
        std::fs::write(&path, serde_json::to_vec_pretty(&entries).unwrap()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_seed_creates_admin_and_imports_products() {
        let dir = tempfile::tempdir().unwrap();
        let export = write_export(dir.path());

        run(dir.path(), Some(&export), Some("long enough password"))
            .await
            .unwrap();

        let admins = AdminStore::open(dir.path());
        AuthService::new(&admins)
            .login(DEFAULT_ADMIN, "long enough password")
            .await
            .unwrap();

        let products = ProductStore::open(dir.path());
        assert_eq!(products.count().await.unwrap(), 2);

        let known = ProductId::parse("rezar-0a1b2c3d").unwrap();
        let imported = products.get(&known).await.unwrap().unwrap();
        assert_eq!(imported.name, "Sliding Window X500");
        assert_eq!(imported.slug.as_str(), "sliding-window-x500");
        assert_eq!(imported.stock, 12);

        let all = products.list_all().await.unwrap();
        let pivot = all.iter().find(|p| p.name == "Pivot Door").unwrap();
        assert_eq!(pivot.short_description, "Entry pivot door");
        assert_eq!(pivot.slug.as_str(), "pivot-door");
        assert!(!pivot.featured);
        assert_eq!(pivot.price, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let export = write_export(dir.path());

        run(dir.path(), Some(&export), Some("long enough password"))
            .await
            .unwrap();
        run(dir.path(), Some(&export), Some("a different password"))
            .await
            .unwrap();

        let admins = AdminStore::open(dir.path());
        assert_eq!(admins.count().await.unwrap(), 1);
        // The first password still works; the rerun did not overwrite it
        AuthService::new(&admins)
            .login(DEFAULT_ADMIN, "long enough password")
            .await
            .unwrap();

        let products = ProductStore::open(dir.path());
        assert_eq!(products.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_seed_rejects_malformed_product_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products-export.json");
        std::fs::write(
            &path,
            r#"[{ "id": "not-a-product-id", "name": "X", "category": "Doors" }]"#,
        )
        .unwrap();

        let err = run(dir.path(), Some(&path), Some("long enough password"))
            .await
            .unwrap_err();
        assert!(matches!(err, SeedError::InvalidId { .. }));
    }

    #[tokio::test]
    async fn test_seed_without_export_only_creates_admin() {
        let dir = tempfile::tempdir().unwrap();

        run(dir.path(), None, Some("long enough password"))
            .await
            .unwrap();

        let admins = AdminStore::open(dir.path());
        assert_eq!(admins.count().await.unwrap(), 1);
        let products = ProductStore::open(dir.path());
        assert_eq!(products.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seed_missing_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = run(dir.path(), Some(&path), Some("long enough password"))
            .await
            .unwrap_err();
        assert!(matches!(err, SeedError::Read { .. }));
    }
}
