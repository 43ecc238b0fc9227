//! CLI command implementations.

pub mod admin;
pub mod seed;

use rand::Rng;

/// Length of generated passwords.
pub(crate) const GENERATED_PASSWORD_LENGTH: usize = 24;

/// Generate a random alphanumeric password.
pub(crate) fn generate_password(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            // SAFETY: idx is always within bounds since random_range returns 0..CHARSET.len()
            char::from(*CHARSET.get(idx).expect("idx within bounds"))
        })
        .collect()
}
