//! Nearby CLI - classify search queries and business listings.
//!
//! # Usage
//!
//! ```bash
//! # Turn a search query into structured filters
//! nearby query "find all coffee shops"
//!
//! # Suggest tags for a listing
//! nearby describe -n "Joe's Diner" -d "Family friendly diner with free wifi" -c restaurant
//!
//! # Skip the model and use the keyword rules only
//! nearby query "pizza near me" --rules-only
//! ```
//!
//! # Commands
//!
//! - `query` - Classify a free-text search query
//! - `describe` - Suggest discoverability tags for a business
//!
//! Results are printed to stdout as JSON; logs go to stderr. Set `RUST_LOG` to
//! adjust verbosity and `NEARBY_LOG_JSON=1` for JSON logs.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "nearby")]
#[command(author, version, about = "Nearby directory classification tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a search query into filters
    Query {
        /// The search text, e.g. "find all coffee shops"
        text: String,

        /// Use the keyword rules even if a model is configured
        #[arg(long)]
        rules_only: bool,
    },
    /// Suggest tags for a business listing
    Describe {
        /// Business name
        #[arg(short, long)]
        name: String,

        /// Free-text business description
        #[arg(short, long)]
        description: String,

        /// Business category (e.g. `restaurant`, `cafe`)
        #[arg(short, long)]
        category: Option<String>,

        /// Use the keyword rules even if a model is configured
        #[arg(long)]
        rules_only: bool,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Query { text, rules_only } => {
            let engine = commands::engine(rules_only)?;
            commands::classify::query(&engine, &text).await?;
        }
        Commands::Describe {
            name,
            description,
            category,
            rules_only,
        } => {
            let engine = commands::engine(rules_only)?;
            commands::classify::describe(&engine, name, description, category).await?;
        }
    }
    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nearby_classifier=info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if std::env::var_os("NEARBY_LOG_JSON").is_some() {
        builder.json().init();
    } else {
        builder.init();
    }
}
