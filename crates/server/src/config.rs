//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! Every variable has a default aimed at local development.
//!
//! - `REZAR_HOST` - Bind address (default: 127.0.0.1)
//! - `REZAR_PORT` - Listen port (default: 3000)
//! - `REZAR_BASE_URL` - Public URL for the server (default:
//!   `http://localhost:3000`); an https scheme turns on the Secure flag of
//!   the session cookie
//! - `REZAR_DATA_DIR` - Directory holding the JSON data files
//!   (default: `data`)
//! - `REZAR_STATIC_DIR` - Directory holding admin pages and public assets
//!   (default: `crates/server/static`)
//! - `REZAR_WHATSAPP_LINK` - Deep link that receives checkout/contact
//!   handoffs (default: the shop's `wa.me` message link)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default deep link for order and contact handoffs.
pub const DEFAULT_WHATSAPP_LINK: &str = "https://wa.me/message/B42ODIFA73VQA1";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the server
    pub base_url: String,
    /// Directory holding `products.json` / `admins.json`
    pub data_dir: PathBuf,
    /// Directory holding admin pages and public assets
    pub static_dir: PathBuf,
    /// Deep link that receives order and contact handoffs
    pub whatsapp_link: Url,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// `from_env` passes the process environment; tests pass closures.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a supplied value fails to parse.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let host = get_or_default(&lookup, "REZAR_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("REZAR_HOST".to_owned(), e.to_string()))?;
        let port = get_or_default(&lookup, "REZAR_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("REZAR_PORT".to_owned(), e.to_string()))?;
        let base_url = get_or_default(&lookup, "REZAR_BASE_URL", "http://localhost:3000");
        let data_dir = PathBuf::from(get_or_default(&lookup, "REZAR_DATA_DIR", "data"));
        let static_dir = PathBuf::from(get_or_default(
            &lookup,
            "REZAR_STATIC_DIR",
            "crates/server/static",
        ));
        let whatsapp_link = get_or_default(&lookup, "REZAR_WHATSAPP_LINK", DEFAULT_WHATSAPP_LINK)
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("REZAR_WHATSAPP_LINK".to_owned(), e.to_string())
            })?;

        Ok(Self {
            host,
            port,
            base_url,
            data_dir,
            static_dir,
            whatsapp_link,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether session cookies should carry the Secure flag.
    #[must_use]
    pub fn use_secure_cookies(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value.
fn get_or_default(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> String {
    lookup(key).unwrap_or_else(|| default.to_owned())
}
