//! End-to-end tests for a running rezar server.
//!
//! Every test under `tests/` is `#[ignore]`d by default because it needs a
//! live server to talk to. Start one over a scratch data directory, then
//! opt in:
//!
//! ```bash
//! # Terminal 1: the server under test
//! REZAR_DATA_DIR=$(mktemp -d) cargo run -p rezar-server
//!
//! # Terminal 2: the suite
//! cargo test -p rezar-integration-tests -- --ignored
//! ```
//!
//! `REZAR_BASE_URL` points the suite at a non-default address.
//!
//! The tests register their own admin accounts (unique username per test)
//! and create their own products, so runs do not step on each other; the
//! scratch data directory keeps leftovers out of real deployments.
//!
//! # Test Categories
//!
//! - `health` - Liveness and readiness probes
//! - `products_api` - Public catalog plus the authenticated CRUD
//! - `admin_accounts` - Session lifecycle and account guards
//! - `cart_checkout` - Cart flow and the WhatsApp order handoff
