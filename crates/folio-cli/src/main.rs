use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A terminal portfolio")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Print the project table
    Projects {
        /// Show one project in full by its id
        #[arg(short, long)]
        id: Option<String>,
        /// Filter by technology (substring match)
        #[arg(short, long, default_value = "All")]
        tech: String,
        /// Filter by category (exact match)
        #[arg(short, long, default_value = "All")]
        category: String,
    },
    /// Print the blog listing
    Posts {
        /// Filter by category
        #[arg(short, long, default_value = "All")]
        category: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    tracing::debug!(config = %AppConfig::config_path().display(), "configuration loaded");

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Projects { id, tech, category }) => {
            commands::projects::run(id.as_deref(), &tech, &category)
        }
        Some(Commands::Posts { category }) => commands::posts::run(&category),
    }
}
