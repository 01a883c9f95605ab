//! Neural Commerce CLI - One-shot catalog, recommendation and cart tools.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog, optionally filtered
//! nc-cli catalog --category electronics --query ai
//!
//! # List category tabs
//! nc-cli categories
//!
//! # Show recommendations immediately
//! nc-cli recommend --threshold 90 --limit 3
//!
//! # Replay add-to-cart events
//! nc-cli cart 1 1 2
//! ```
//!
//! Every command accepts `--json` for machine-readable output.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "nc-cli")]
#[command(author, version, about = "Neural Commerce CLI tools")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog {
        /// Category id (`all`, `electronics`, `fitness`, `home`)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Case-insensitive text to find in name or description
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// List categories
    Categories,
    /// Show recommended products
    Recommend {
        /// AI-score a product must exceed (defaults to `NC_RECOMMENDATION_THRESHOLD`)
        #[arg(short, long)]
        threshold: Option<u8>,

        /// Maximum number of products (defaults to `NC_RECOMMENDATION_LIMIT`)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Add products to an empty cart in order and print the result
    Cart {
        /// Product ids, one add-to-cart event each
        #[arg(required = true)]
        product_ids: Vec<i32>,
    },
}

fn main() {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format = if cli.json {
        commands::OutputFormat::Json
    } else {
        commands::OutputFormat::Text
    };

    match cli.command {
        Commands::Catalog { category, query } => {
            commands::catalog::list(&category, &query, format)?;
        }
        Commands::Categories => commands::catalog::categories(format)?,
        Commands::Recommend { threshold, limit } => {
            commands::recommend::show(threshold, limit, format)?;
        }
        Commands::Cart { product_ids } => commands::cart::replay(&product_ids, format)?,
    }
    Ok(())
}
