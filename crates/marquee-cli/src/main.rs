use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(author, version, about = "A terminal card carousel and slide rotator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Compute the page window of a layout and where paging would scroll
    Page {
        /// JSON file with viewport and card geometry
        #[arg(short, long)]
        layout: PathBuf,
        /// Page backward instead of forward
        #[arg(long)]
        prev: bool,
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the single-card step command for a layout
    Step {
        /// JSON file with viewport and card geometry
        #[arg(short, long)]
        layout: PathBuf,
        /// Step backward instead of forward
        #[arg(long)]
        prev: bool,
    },
    /// Run the slide rotator, driven by commands on stdin
    Rotate {
        /// Number of slides (defaults to the configured slides)
        #[arg(short, long)]
        slides: Option<usize>,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // Initialize logging; stderr keeps stdout clean for command output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Page { layout, prev, json }) => {
            commands::page::run(&config, &layout, prev, json)
        }
        Some(Commands::Step { layout, prev }) => commands::step::run(&config, &layout, prev),
        Some(Commands::Rotate { slides }) => commands::rotate::run(&config, slides).await,
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(force),
        },
    }
}
