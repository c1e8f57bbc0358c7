//! Classifier backed by an external program
//!
//! The image is written to a temp file whose path is passed as the last
//! argument. The program prints its result as a JSON object on stdout.

use crate::classify::{parse_classifier_output, Classification, Classifier};
use crate::config::CommandConfig;
use crate::constants::files::{UPLOAD_EXTENSION, UPLOAD_PREFIX};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, warn};
use uuid::Uuid;

/// Runs `program args... <image path>`
#[derive(Debug, Clone)]
pub struct CommandClassifier {
    program: String,
    args: Vec<String>,
    temp_dir: PathBuf,
}

impl CommandClassifier {
    /// Create a classifier from command settings, using the system temp dir
    pub fn new(command: &CommandConfig) -> Self {
        Self::with_temp_dir(command, std::env::temp_dir())
    }

    /// Create a classifier that writes uploads into `temp_dir`
    pub fn with_temp_dir(command: &CommandConfig, temp_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: command.program.clone(),
            args: command.args.clone(),
            temp_dir: temp_dir.into(),
        }
    }

    fn upload_path(&self) -> PathBuf {
        self.temp_dir.join(format!(
            "{}{}.{}",
            UPLOAD_PREFIX,
            Uuid::new_v4().simple(),
            UPLOAD_EXTENSION
        ))
    }

    async fn run(&self, image_path: &Path) -> Result<Classification> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(image_path)
            .output()
            .await
            .map_err(|e| {
                Error::Classification(format!("Failed to start {}: {}", self.program, e))
            })?;

        if !output.status.success() {
            return Err(Error::Classification(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_classifier_output(&stdout).ok_or_else(|| {
            debug!("Raw classifier output: {}", stdout);
            Error::MalformedOutput("No valid JSON found in classifier output".to_string())
        })
    }
}

#[async_trait]
impl Classifier for CommandClassifier {
    fn name(&self) -> &str {
        &self.program
    }

    async fn classify(&self, image: &[u8]) -> Result<Classification> {
        let path = self.upload_path();
        tokio::fs::write(&path, image)
            .await
            .map_err(|e| Error::Upload(format!("{}: {}", path.display(), e)))?;

        let result = self.run(&path).await;

        if let Err(e) = tokio::fs::remove_file(&path).await {
            warn!("Failed to delete temp image {}: {}", path.display(), e);
        }

        result
    }
}
