use clap::{Parser, Subcommand};
use anyhow::Result;
use std::path::{Path, PathBuf};

use deck_core::{BoundaryMode, Config, Deck};

#[derive(Parser)]
#[command(name = "deck")]
#[command(about = "Terminal slide-deck presenter with live generation demos")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Override the generation model
    #[arg(long)]
    pub model: Option<String>,

    /// Wrap around at the deck boundary instead of clamping
    #[arg(long)]
    pub wrap: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Present a markdown deck full-screen
    Present {
        /// Path to the deck markdown file
        file: PathBuf,
    },
    /// Parse a deck and report its shape without presenting
    Check {
        /// Path to the deck markdown file
        file: PathBuf,
    },
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        std::env::set_var("RUST_LOG", "debug");
    }
    tracing_subscriber::fmt::init();

    let mut config = Config::from_env();
    if let Some(model) = cli.model {
        config.model = model;
    }
    if cli.wrap {
        config.boundary = BoundaryMode::Wrap;
    }

    match cli.command {
        Commands::Present { file } => deck_tui::run_present(&file, config).await,
        Commands::Check { file } => check_deck(&file).await,
    }
}

async fn check_deck(file: &Path) -> Result<()> {
    let deck = Deck::load(file).await?;
    println!("deck: {}", deck.title());
    println!("slides: {}", deck.len());
    println!("demo widgets: {}", deck.demo_count());
    Ok(())
}
