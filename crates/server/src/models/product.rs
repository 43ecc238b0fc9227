//! Product domain types.
//!
//! Products serialize camelCase because `products.json` and the REST API
//! share one wire shape.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rezar_core::{CurrencyCode, Price, ProductId, Slug};

/// A catalog entry for an aluminium fabrication project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique id, `rezar-<8hex>`, assigned at creation.
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    /// Quoted per project; form-created products default to 0.
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub currency: CurrencyCode,
    /// Main gallery, ordered. Uploads land here as base64 data URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Secondary gallery, populated from the upload form's attachments.
    #[serde(default)]
    pub additional_images: Vec<String>,
    #[serde(default)]
    pub specs: BTreeMap<String, String>,
    /// Units on hand; 0 means untracked.
    #[serde(default)]
    pub stock: u32,
    /// Derived from the name at creation and never re-derived.
    pub slug: Slug,
    #[serde(default)]
    pub featured: bool,
    /// 0 or 1 URL wrapped in a list.
    #[serde(default)]
    pub video: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a product from a validated draft.
    ///
    /// Generates the id, derives the slug from the name, and stamps both
    /// timestamps with the current time. Price, stock, and specs start at
    /// their defaults; they are not form-settable.
    #[must_use]
    pub fn new(draft: ProductDraft) -> Self {
        let now = Utc::now();
        Self {
            id: ProductId::generate(),
            slug: Slug::from_name(&draft.name),
            name: draft.name,
            category: draft.category,
            short_description: draft.short_description,
            long_description: draft.long_description.unwrap_or_default(),
            price: Decimal::ZERO,
            currency: CurrencyCode::GHS,
            images: draft.images,
            additional_images: draft.additional_images,
            specs: BTreeMap::new(),
            stock: 0,
            featured: draft.featured,
            video: draft.video,
            attachments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update in place.
    ///
    /// Absent fields keep their current values; media lists are replaced
    /// wholesale when present. The id and slug never change, a rename does
    /// not re-derive the slug, and the price stays whatever it is.
    pub fn apply(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(short_description) = update.short_description {
            self.short_description = short_description;
        }
        if let Some(long_description) = update.long_description {
            self.long_description = long_description;
        }
        if let Some(featured) = update.featured {
            self.featured = featured;
        }
        if let Some(images) = update.images {
            self.images = images;
        }
        if let Some(additional_images) = update.additional_images {
            self.additional_images = additional_images;
        }
        if let Some(video) = update.video {
            self.video = video;
        }
        self.updated_at = Utc::now();
    }

    /// The price with its currency attached.
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        Price::new(self.price, self.currency)
    }
}

/// Validated input for creating a product.
///
/// Built by the multipart form handler after the required-fields check;
/// uploads are already converted to their stored URL forms.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub short_description: String,
    pub long_description: Option<String>,
    pub featured: bool,
    pub images: Vec<String>,
    pub additional_images: Vec<String>,
    pub video: Vec<String>,
}

/// A partial product update with named optional fields.
///
/// Every field is optional; `None` means "leave unchanged". There is
/// deliberately no way to express an id, slug, or price change.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub featured: Option<bool>,
    pub images: Option<Vec<String>>,
    pub additional_images: Option<Vec<String>>,
    pub video: Option<Vec<String>>,
}

/// Aggregate counts for the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_products: usize,
    pub featured_count: usize,
    /// The 5 most recent products by creation time, newest first.
    pub recent_uploads: Vec<Product>,
}
