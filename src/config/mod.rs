//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/landmark-guide/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use crate::landmark::campus::campus_gazetteer;
use crate::landmark::file::load_gazetteer;
use crate::landmark::Gazetteer;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Guide settings
    #[serde(default)]
    pub guide: GuideConfig,

    /// Text-to-speech command
    #[serde(default = "default_speech")]
    pub speech: CommandConfig,

    /// Image classifier command
    #[serde(default = "default_classifier")]
    pub classifier: CommandConfig,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory with the client pages
    #[serde(default = "default_public_dir")]
    pub public_dir: String,

    /// Directory with static assets and generated audio
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Largest accepted image upload in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

/// Guide settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideConfig {
    /// Landmarks announced per location update
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Path to a JSON gazetteer; empty uses the built-in campus
    #[serde(default)]
    pub gazetteer: String,
}

/// An external program and its leading arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandConfig {
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,
}

// Default value functions for serde
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_public_dir() -> String {
    DEFAULT_PUBLIC_DIR.to_string()
}
fn default_static_dir() -> String {
    DEFAULT_STATIC_DIR.to_string()
}
fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}
fn default_top_n() -> usize {
    DEFAULT_TOP_N
}
fn default_speech() -> CommandConfig {
    CommandConfig::script(DEFAULT_SPEECH_SCRIPT)
}
fn default_classifier() -> CommandConfig {
    CommandConfig::script(DEFAULT_CLASSIFIER_SCRIPT)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_dir: default_public_dir(),
            static_dir: default_static_dir(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            gazetteer: String::new(),
        }
    }
}

// Implement Default traits
impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            guide: GuideConfig::default(),
            speech: default_speech(),
            classifier: default_classifier(),
        }
    }
}

impl CommandConfig {
    /// Run `script` with the default interpreter
    pub fn script(script: &str) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: vec![script.to_string()],
        }
    }

    /// Render as a single command line, for display only
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),
            ["server", "public_dir"] => Some(self.server.public_dir.clone()),
            ["server", "static_dir"] => Some(self.server.static_dir.clone()),
            ["server", "max_upload_bytes"] => Some(self.server.max_upload_bytes.to_string()),

            ["guide", "top_n"] => Some(self.guide.top_n.to_string()),
            ["guide", "gazetteer"] => Some(self.guide.gazetteer.clone()),

            ["speech", "program"] => Some(self.speech.program.clone()),
            ["speech", "args"] => Some(self.speech.args.join(" ")),

            ["classifier", "program"] => Some(self.classifier.program.clone()),
            ["classifier", "args"] => Some(self.classifier.args.join(" ")),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key". `args` values are split on whitespace.
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid port value: {}", value))
                })?;
            }
            ["server", "public_dir"] => {
                self.server.public_dir = value.to_string();
            }
            ["server", "static_dir"] => {
                self.server.static_dir = value.to_string();
            }
            ["server", "max_upload_bytes"] => {
                self.server.max_upload_bytes = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid max_upload_bytes value: {}", value))
                })?;
            }

            ["guide", "top_n"] => {
                self.guide.top_n = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid top_n value: {}", value))
                })?;
            }
            ["guide", "gazetteer"] => {
                self.guide.gazetteer = value.to_string();
            }

            ["speech", "program"] => {
                self.speech.program = value.to_string();
            }
            ["speech", "args"] => {
                self.speech.args = split_args(value);
            }

            ["classifier", "program"] => {
                self.classifier.program = value.to_string();
            }
            ["classifier", "args"] => {
                self.classifier.args = split_args(value);
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "server.host",
            "server.port",
            "server.public_dir",
            "server.static_dir",
            "server.max_upload_bytes",
            "guide.top_n",
            "guide.gazetteer",
            "speech.program",
            "speech.args",
            "classifier.program",
            "classifier.args",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build the configured gazetteer
    pub fn gazetteer(&self) -> Result<Gazetteer> {
        if self.guide.gazetteer.is_empty() {
            Ok(campus_gazetteer())
        } else {
            load_gazetteer(Path::new(&self.guide.gazetteer))
        }
    }
}

fn split_args(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.max_upload_bytes, 20 * 1024 * 1024);
        assert_eq!(config.guide.top_n, 2);
        assert!(config.guide.gazetteer.is_empty());
        assert_eq!(config.speech.program, "python");
        assert_eq!(config.speech.args, vec!["audio_conversion.py"]);
        assert_eq!(config.classifier.args, vec!["model_1.py"]);
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("guide.top_n"), Some("2".to_string()));

        config.set("guide.top_n", "3").unwrap();
        assert_eq!(config.guide.top_n, 3);

        config.set("classifier.args", "-u  classify.py").unwrap();
        assert_eq!(config.classifier.args, vec!["-u", "classify.py"]);
        assert_eq!(config.get("classifier.args"), Some("-u classify.py".to_string()));

        config.set("server.max_upload_bytes", "1048576").unwrap();
        assert_eq!(config.get("server.max_upload_bytes"), Some("1048576".to_string()));
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
        assert_eq!(config.get("server"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("server.port", "not_a_number").is_err());
        assert!(config.set("guide.top_n", "-1").is_err());
        assert!(config.set("server.max_upload_bytes", "20MB").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.server.port = 8080;
        config.speech = CommandConfig {
            program: "espeak-wrapper".to_string(),
            args: Vec::new(),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.server.port, 8080);
        assert_eq!(loaded.speech.program, "espeak-wrapper");
        assert_eq!(loaded.classifier, default_classifier());
    }

    #[test]
    fn test_load_creates_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[server]\nport = 9000\n").unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.guide.top_n, 2);
        assert_eq!(config.speech.args, vec!["audio_conversion.py"]);
    }

    #[test]
    fn test_serialization_format() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();

        assert!(toml.contains("[server]"));
        assert!(toml.contains("[guide]"));
        assert!(toml.contains("[speech]"));
        assert!(toml.contains("[classifier]"));
    }

    #[test]
    fn test_server_addr() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_gazetteer_default_and_file() {
        let config = Config::default();
        assert_eq!(config.gazetteer().unwrap().len(), 7);

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("landmarks.json");
        fs::write(&path, r#"{ "gate": { "gps": [21.13, 81.77], "description": "Main gate" } }"#)
            .unwrap();

        let mut config = Config::default();
        config.guide.gazetteer = path.to_string_lossy().to_string();
        let gazetteer = config.gazetteer().unwrap();
        assert_eq!(gazetteer.len(), 1);
        assert_eq!(gazetteer.landmarks()[0].name, "gate");
    }

    #[test]
    fn test_available_keys() {
        let keys = Config::available_keys();
        assert!(keys.contains(&"server.port"));
        assert!(keys.contains(&"guide.top_n"));
        assert!(keys.contains(&"classifier.program"));
    }
}
