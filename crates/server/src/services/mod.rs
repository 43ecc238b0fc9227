//! Business logic services.
//!
//! # Services
//!
//! - `auth` - Admin account management (register, login, deletion guards)

pub mod auth;

pub use auth::{AuthError, AuthService};
