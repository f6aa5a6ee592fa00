//! CLI entry point for pagination-links

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagination_links::commands::{self, links::OutputFormat};
use pagination_links::PaginationState;

#[derive(Parser)]
#[command(name = "pagination-links")]
#[command(version)]
#[command(about = "Plan the links of a pagination widget", long_about = None)]
struct Cli {
    /// Options file (YAML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RenderArgs {
    /// Override the configured distance
    #[arg(long)]
    distance: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the links for a page number and page count
    Links {
        /// Current page number
        #[arg(short, long, allow_hyphen_values = true)]
        page: i64,

        /// Total number of pages
        #[arg(short, long)]
        total: i64,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Print the links for a page of a collection of items
    Items {
        /// Current page number
        #[arg(short, long, allow_hyphen_values = true)]
        page: i64,

        /// Total number of items
        #[arg(short, long)]
        items: i64,

        /// Items per page
        #[arg(long, default_value = "10")]
        per_page: i64,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Print the effective options
    Config,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "pagination_links=debug,info"
    } else {
        "pagination_links=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Links {
            page,
            total,
            render,
        } => {
            let options = commands::load_options(cli.config.as_deref(), render.distance)?;
            commands::links::run(PaginationState::new(page, total), &options, render.format)?;
        }

        Commands::Items {
            page,
            items,
            per_page,
            render,
        } => {
            let options = commands::load_options(cli.config.as_deref(), render.distance)?;
            let state = PaginationState::from_items(page, items, per_page)?;
            commands::links::run(state, &options, render.format)?;
        }

        Commands::Config => {
            let options = commands::load_options(cli.config.as_deref(), None)?;
            commands::config::run(&options)?;
        }

        Commands::Version => {
            println!("pagination-links version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
