//! Session cart.
//!
//! Entries are denormalized snapshots of the product at the time it was
//! added; later catalog edits do not reach into existing carts. Every
//! mutation writes the full entry list back to the backing store, so the
//! cart survives whatever the store survives (for the session-backed store,
//! the lifetime of the browser session).

mod store;

pub use store::{CartStore, MemoryCartStore, SessionCartStore};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rezar_core::types::{CurrencyCode, ProductId};

use crate::models::Product;

/// One cart line: a product snapshot plus the chosen quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub currency: CurrencyCode,
    #[serde(default)]
    pub image: Option<String>,
    /// Stock level captured when the product was added. Zero means the
    /// product does not track stock and quantities are unbounded.
    #[serde(default)]
    pub stock: u32,
    pub quantity: u32,
}

impl CartEntry {
    fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            currency: product.currency,
            image: product.images.first().cloned(),
            stock: product.stock,
            quantity,
        }
    }

    /// Line subtotal, `price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Quantities are clamped to the stock ceiling when one exists; a stock of
/// zero means the product is untracked and any quantity is accepted.
const fn clamp_to_stock(quantity: u32, stock: u32) -> u32 {
    if stock > 0 && quantity > stock {
        stock
    } else {
        quantity
    }
}

/// Cart service over a [`CartStore`].
///
/// Loads the entry list once at construction and persists after every
/// mutation, mirroring how the storefront keeps its cart in step with the
/// page between requests.
#[derive(Debug)]
pub struct Cart<S> {
    store: S,
    entries: Vec<CartEntry>,
}

impl<S: CartStore> Cart<S> {
    /// # Errors
    ///
    /// Propagates the backing store's load error.
    pub async fn load(store: S) -> Result<Self, S::Error> {
        let entries = store.load().await?;
        Ok(Self { store, entries })
    }

    /// Add `quantity` of `product`, merging into an existing line when the
    /// product is already in the cart. Quantities below one are raised to
    /// one, and the line never exceeds the product's stock when stock is
    /// tracked.
    ///
    /// # Errors
    ///
    /// Propagates the backing store's save error.
    pub async fn add_item(&mut self, product: &Product, quantity: u32) -> Result<(), S::Error> {
        let quantity = quantity.max(1);
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == product.id) {
            let merged = entry.quantity.saturating_add(quantity);
            entry.quantity = clamp_to_stock(merged, product.stock);
            entry.stock = product.stock;
        } else {
            let quantity = clamp_to_stock(quantity, product.stock);
            self.entries.push(CartEntry::snapshot(product, quantity));
        }
        self.save().await
    }

    /// Remove the line for `id`. Removing a product that is not in the
    /// cart is a no-op, but the (unchanged) list is still persisted.
    ///
    /// # Errors
    ///
    /// Propagates the backing store's save error.
    pub async fn remove_item(&mut self, id: &ProductId) -> Result<(), S::Error> {
        self.entries.retain(|e| e.id != *id);
        self.save().await
    }

    /// Set the line for `id` to `quantity`, clamped to the stock level
    /// captured in the entry. A quantity of zero removes the line; an
    /// unknown `id` leaves the cart untouched.
    ///
    /// # Errors
    ///
    /// Propagates the backing store's save error.
    pub async fn update_quantity(&mut self, id: &ProductId, quantity: u32) -> Result<(), S::Error> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == *id) else {
            return Ok(());
        };
        let quantity = clamp_to_stock(quantity, entry.stock);
        if quantity == 0 {
            self.entries.retain(|e| e.id != *id);
        } else {
            entry.quantity = quantity;
        }
        self.save().await
    }

    /// Empty the cart and persist the empty list.
    ///
    /// # Errors
    ///
    /// Propagates the backing store's save error.
    pub async fn clear(&mut self) -> Result<(), S::Error> {
        self.entries.clear();
        self.save().await
    }

    /// Sum of `price * quantity` over all lines, in catalog precision.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Total number of units across all lines, for the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.entries
            .iter()
            .fold(0, |count, e| count.saturating_add(e.quantity))
    }

    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    async fn save(&self) -> Result<(), S::Error> {
        self.store.save(&self.entries).await
    }
}
