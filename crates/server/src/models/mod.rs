//! Domain models for the rezar backend.

pub mod admin;
pub mod product;
pub mod session;

pub use admin::{Admin, AdminInfo};
pub use product::{Product, ProductDraft, ProductStats, ProductUpdate};
pub use session::{CurrentAdmin, session_keys};
