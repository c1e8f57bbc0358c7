//! Serve command handler
//!
//! Runs the guide's HTTP server in the foreground. Flags override the loaded
//! config for this run only; nothing is written back.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::server;
use clap::Args;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Serve command arguments
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Host address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Read settings from this file instead of the user config
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Landmarks announced per location update
    #[arg(long, short = 'n')]
    pub top_n: Option<usize>,

    /// JSON gazetteer to guide through instead of the built-in campus
    #[arg(long, value_name = "PATH")]
    pub gazetteer: Option<PathBuf>,
}

impl ServeArgs {
    /// Load the selected config file and apply the command-line overrides
    pub fn resolve_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(config)
    }

    fn apply(&self, mut config: Config) -> Result<Config> {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(top_n) = self.top_n {
            if top_n == 0 {
                return Err(Error::Config("--top-n must be at least 1".to_string()));
            }
            config.guide.top_n = top_n;
        }
        if let Some(path) = &self.gazetteer {
            config.guide.gazetteer = path.to_string_lossy().to_string();
        }
        Ok(config)
    }
}

/// Install the fmt subscriber; `RUST_LOG` wins over the `info` default
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    init_logging();

    let config = args.resolve_config()?;

    info!(
        "Starting landmark-guide v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.server_addr()
    );
    if config.guide.gazetteer.is_empty() {
        info!("Gazetteer: built-in campus, top {}", config.guide.top_n);
    } else {
        info!("Gazetteer: {}, top {}", config.guide.gazetteer, config.guide.top_n);
    }
    info!("Speech: {}", config.speech.display());
    info!("Classifier: {}", config.classifier.display());

    server::run(config).await
}
