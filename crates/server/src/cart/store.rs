//! Cart persistence backends.
//!
//! The cart serializes its entry list under one fixed key ([`session_keys::CART`])
//! and tolerates the key being absent, which reads as an empty cart.

use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;
use tower_sessions::Session;

use super::CartEntry;
use crate::models::session_keys;

/// Key-value persistence for cart entries.
///
/// The cart loads the list once at construction and writes it back after
/// every mutation; implementations only need the two wholesale operations.
pub trait CartStore {
    type Error;

    /// Load the stored entry list; an empty store reads as an empty list.
    fn load(&self) -> impl Future<Output = Result<Vec<CartEntry>, Self::Error>> + Send;

    /// Replace the stored entry list.
    fn save(&self, entries: &[CartEntry]) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// In-memory cart store.
///
/// Shares its contents across clones, so a test can hand one to a cart and
/// later inspect what was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStore {
    entries: Arc<Mutex<Vec<CartEntry>>>,
}

impl MemoryCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The entries as last saved.
    pub async fn stored(&self) -> Vec<CartEntry> {
        self.entries.lock().await.clone()
    }
}

impl CartStore for MemoryCartStore {
    type Error = Infallible;

    async fn load(&self) -> Result<Vec<CartEntry>, Infallible> {
        Ok(self.entries.lock().await.clone())
    }

    async fn save(&self, entries: &[CartEntry]) -> Result<(), Infallible> {
        *self.entries.lock().await = entries.to_vec();
        Ok(())
    }
}

/// Session-backed cart store.
///
/// Each browser session carries its own cart, the server-side analogue of
/// a per-browser local store: not shared across browser profiles and never
/// reconciled with anything else.
#[derive(Debug, Clone)]
pub struct SessionCartStore {
    session: Session,
}

impl SessionCartStore {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

impl CartStore for SessionCartStore {
    type Error = tower_sessions::session::Error;

    async fn load(&self) -> Result<Vec<CartEntry>, Self::Error> {
        Ok(self
            .session
            .get(session_keys::CART)
            .await?
            .unwrap_or_default())
    }

    async fn save(&self, entries: &[CartEntry]) -> Result<(), Self::Error> {
        self.session.insert(session_keys::CART, entries).await
    }
}
