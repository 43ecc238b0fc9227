//! Admin account management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create an admin with a chosen password
//! rezar-cli admin create -u kwame -p "long-enough-pass"
//!
//! # Create an admin with a generated password (printed once)
//! rezar-cli admin create -u kwame
//! ```

use std::path::Path;

use tracing::info;

use rezar_server::services::{AuthError, AuthService};
use rezar_server::store::AdminStore;

use super::{GENERATED_PASSWORD_LENGTH, generate_password};

/// Create a new admin account.
///
/// When `password` is `None`, a random alphanumeric password is generated
/// and printed exactly once; there is no way to recover it later.
///
/// # Errors
///
/// Returns an error when the username is invalid or already taken, the
/// password is too short, or the store cannot be written.
pub async fn create(
    data_dir: &Path,
    username: &str,
    password: Option<&str>,
) -> Result<(), AuthError> {
    let admins = AdminStore::open(data_dir);
    let auth = AuthService::new(&admins);

    let generated = password.is_none();
    let password =
        password.map_or_else(|| generate_password(GENERATED_PASSWORD_LENGTH), str::to_owned);

    let admin = auth.register(username, &password).await?;

    info!(username = %admin.username, "Admin account created");
    if generated {
        info!("Generated password: {password}");
    }

    Ok(())
}
