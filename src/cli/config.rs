//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "guide.top_n")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    if args.path {
        println!("{}", Config::config_path()?.display());
        return Ok(());
    }

    if args.reset {
        Config::default().save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (args.key.as_deref(), args.value.as_deref()) {
        (None, None) => show_all_config(&config),

        (Some(key), None) => {
            let value = config.get(key).ok_or_else(|| unknown_key(key))?;
            println!("{}", value);
        }

        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }

        (None, Some(_)) => {
            return Err(Error::Config("Must specify a key to set a value".to_string()));
        }
    }

    Ok(())
}

fn unknown_key(key: &str) -> Error {
    Error::Config(format!(
        "Unknown config key: {}\nAvailable keys:\n  {}",
        key,
        Config::available_keys().join("\n  ")
    ))
}

/// Display all configuration values
fn show_all_config(config: &Config) {
    println!("[server]");
    println!("host = \"{}\"", config.server.host);
    println!("port = {}", config.server.port);
    println!("public_dir = \"{}\"", config.server.public_dir);
    println!("static_dir = \"{}\"", config.server.static_dir);
    println!("max_upload_bytes = {}", config.server.max_upload_bytes);
    println!();

    println!("[guide]");
    println!("top_n = {}", config.guide.top_n);
    if config.guide.gazetteer.is_empty() {
        println!("gazetteer = \"\" # built-in campus");
    } else {
        println!("gazetteer = \"{}\"", config.guide.gazetteer);
    }
    println!();

    println!("[speech]");
    println!("# {}", config.speech.display());
    println!("program = \"{}\"", config.speech.program);
    println!("args = {:?}", config.speech.args);
    println!();

    println!("[classifier]");
    println!("# {}", config.classifier.display());
    println!("program = \"{}\"", config.classifier.program);
    println!("args = {:?}", config.classifier.args);
}
