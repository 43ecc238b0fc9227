//! Core types for rezar.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod slug;
pub mod username;

pub use id::{ProductId, ProductIdError};
pub use price::{CurrencyCode, Price};
pub use slug::{Slug, SlugError};
pub use username::{Username, UsernameError};
