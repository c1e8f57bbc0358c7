//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod landmarks;
pub mod rank;
pub mod serve;

use clap::{Parser, Subcommand};

/// Location-aware campus guide
#[derive(Parser)]
#[command(name = "landmark-guide")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Rank the nearest landmarks from a coordinate
    Rank(rank::RankArgs),

    /// List the configured landmarks
    Landmarks(landmarks::LandmarksArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Rank(args) => rank::run(args),
        Commands::Landmarks(args) => landmarks::run(args),
        Commands::Config(args) => config::run(args),
    }
}
