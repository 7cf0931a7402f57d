//! Foodie CLI - order-flow demo and checkout validation tools.
//!
//! # Usage
//!
//! ```bash
//! # Walk a full order through cart, checkout, status feed and reorder
//! foodie-cli demo
//!
//! # Validate a checkout form from a JSON file
//! foodie-cli validate checkout-form.json
//! ```
//!
//! # Environment Variables
//!
//! - `FOODIE_TAX_RATE` - tax rate as a decimal fraction (default: 0.08)
//! - `FOODIE_DELIVERY_FEE` - flat delivery fee (default: 5.00)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod store;

#[derive(Parser)]
#[command(name = "foodie-cli")]
#[command(author, version, about = "Foodie CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the mocked order flow end to end
    Demo,
    /// Validate a checkout form from a JSON file
    Validate {
        /// Path to a JSON file holding the form
        path: std::path::PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Demo => commands::demo::run()?,
        Commands::Validate { path } => commands::validate::run(&path)?,
    }
    Ok(())
}
