//! rezar CLI - admin account and catalog management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create an admin account with a chosen password
//! rezar-cli admin create -u kwame -p "long-enough-pass"
//!
//! # Create an admin account with a generated password (printed once)
//! rezar-cli admin create -u kwame
//!
//! # Bootstrap the default admin and import a product export
//! rezar-cli seed --products exports/products.json
//! ```
//!
//! # Commands
//!
//! - `admin create` - Create admin accounts
//! - `seed` - Bootstrap the default admin and import products
//!
//! Data lands in the same JSON files the server reads, resolved from
//! `REZAR_DATA_DIR` (default: `data`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use rezar_server::config::ServerConfig;

mod commands;

#[derive(Parser)]
#[command(name = "rezar-cli")]
#[command(author, version, about = "rezar management tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage admin accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Bootstrap the default admin account and import products
    Seed {
        /// JSON export of products, imported only when the catalog is empty
        #[arg(long)]
        products: Option<PathBuf>,

        /// Password for the default admin (generated and printed when omitted)
        #[arg(long)]
        admin_password: Option<String>,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin account
    Create {
        /// Username for the new account
        #[arg(short, long)]
        username: String,

        /// Password (generated and printed when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // The CLI writes the same data files the server serves from
    let data_dir = ServerConfig::from_env()?.data_dir;

    match cli.command {
        Commands::Admin { action } => match action {
            AdminAction::Create { username, password } => {
                commands::admin::create(&data_dir, &username, password.as_deref()).await?;
            }
        },
        Commands::Seed {
            products,
            admin_password,
        } => {
            commands::seed::run(&data_dir, products.as_deref(), admin_password.as_deref()).await?;
        }
    }
    Ok(())
}
