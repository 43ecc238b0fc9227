//! HTTP middleware stack.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. CORS (permissive; the API serves browser pages on other origins)
//! 3. Session layer (tower-sessions with in-memory store)
//! 4. Body limit (sized for a full product upload form)

pub mod auth;
pub mod session;

pub use auth::{OptionalAdmin, RequireAdmin, clear_current_admin, set_current_admin};
pub use session::create_session_layer;
