//! Synthesizer backed by an external program
//!
//! The message is passed as the last argument (never through a shell). The
//! program prints the path of the audio file it wrote as its last stdout line.

use crate::config::CommandConfig;
use crate::error::{Error, Result};
use crate::speech::{AudioClip, Synthesizer};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// Runs `program args... <text>`
#[derive(Debug, Clone)]
pub struct CommandSynthesizer {
    program: String,
    args: Vec<String>,
}

impl CommandSynthesizer {
    /// Create a synthesizer from command settings
    pub fn new(command: &CommandConfig) -> Self {
        Self {
            program: command.program.clone(),
            args: command.args.clone(),
        }
    }
}

/// Take the file name from the last non-empty line of the program's stdout
fn clip_from_output(stdout: &str) -> Result<AudioClip> {
    let line = stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .ok_or_else(|| Error::Synthesis("Synthesizer printed no audio path".to_string()))?;

    // Scripts on Windows print backslash paths
    let normalized = line.replace('\\', "/");
    let file_name = Path::new(&normalized)
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::Synthesis(format!("Not an audio path: {}", line)))?;

    Ok(AudioClip {
        file_name: file_name.to_string(),
    })
}

#[async_trait]
impl Synthesizer for CommandSynthesizer {
    fn name(&self) -> &str {
        &self.program
    }

    async fn speak(&self, text: &str) -> Result<AudioClip> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .output()
            .await
            .map_err(|e| Error::Synthesis(format!("Failed to start {}: {}", self.program, e)))?;

        if !output.status.success() {
            return Err(Error::Synthesis(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        clip_from_output(&String::from_utf8_lossy(&output.stdout))
    }
}
