//! Rezar Core - Shared domain types.
//!
//! This crate provides the common types used across all rezar components:
//! - `server` - HTTP backend: catalog API, admin sessions, cart service
//! - `cli` - Command-line tools for seeding and admin management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no file access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product ids, slugs, prices, and usernames

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
