//! Luxe CLI - Command line storefront over the Luxe catalog.
//!
//! Commands:
//! - `luxe products` - Filtered, sorted product listing
//! - `luxe show` - Product details, variants and reviews
//! - `luxe search` - Quick search by name or category
//! - `luxe categories` - Categories and brands
//! - `luxe quote` - Build a cart and print its order summary
//! - `luxe checkout` - Walk a cart through checkout and place the order
//! - `luxe config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CategoriesArgs, CheckoutArgs, ConfigArgs, ProductsArgs, QuoteArgs, SearchArgs, ShowArgs,
};

/// Luxe CLI - Browse the catalog, quote carts and place orders
#[derive(Parser)]
#[command(name = "luxe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products with filters and sorting
    Products(ProductsArgs),

    /// Show a single product
    Show(ShowArgs),

    /// Quick search by name or category
    Search(SearchArgs),

    /// List categories and brands
    Categories(CategoriesArgs),

    /// Price a cart without placing an order
    Quote(QuoteArgs),

    /// Check out a cart and place the order
    Checkout(CheckoutArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Categories(args) => commands::categories::run(args, &ctx).await,
        Commands::Quote(args) => commands::quote::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
