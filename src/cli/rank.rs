//! Rank command handler
//!
//! Offline ranking against the configured gazetteer, without a server.

use crate::config::Config;
use crate::coord::Coordinates;
use crate::error::Result;
use crate::tracker::{MarkOutcome, Ranking, Tracker};
use clap::Args;

/// Rank command arguments
#[derive(Args)]
pub struct RankArgs {
    /// Latitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    pub lng: f64,

    /// Number of landmarks to list (defaults to guide.top_n)
    #[arg(long, short = 'n')]
    pub top: Option<usize>,

    /// Treat a landmark as already visited (repeatable)
    #[arg(long)]
    pub visited: Vec<String>,

    /// Print JSON instead of the spoken message
    #[arg(long)]
    pub json: bool,
}

/// Run the rank command
pub fn run(args: RankArgs) -> Result<()> {
    let config = Config::load()?;
    let ranking = rank(&config, &args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
    } else if ranking.nearest.is_empty() {
        println!("All landmarks visited");
    } else {
        println!("{}", ranking.message);
    }

    Ok(())
}

fn rank(config: &Config, args: &RankArgs) -> Result<Ranking> {
    let current = Coordinates::new(args.lat, args.lng);
    current.validate()?;

    let mut tracker = Tracker::new(config.gazetteer()?);
    for label in &args.visited {
        if tracker.mark_visited(label) == MarkOutcome::Unknown {
            eprintln!("Warning: unknown landmark: {}", label);
        }
    }

    Ok(tracker.rank_nearest_unvisited(current, args.top.unwrap_or(config.guide.top_n)))
}
