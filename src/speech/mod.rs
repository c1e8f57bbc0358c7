//! Speech synthesis
//!
//! This module defines the `Synthesizer` trait used to turn guidance messages
//! into audio, and the store that hands each generated clip out once.

pub mod audio;
pub mod command;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A generated audio file waiting to be fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioClip {
    /// File name inside the audio directory
    pub file_name: String,
}

impl AudioClip {
    /// URL path the client fetches the clip from
    pub fn url(&self) -> String {
        format!("/audio/{}", self.file_name)
    }
}

/// Trait for text-to-speech backends
///
/// Implementations must be thread-safe (Send + Sync) to work with async server.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Returns the synthesizer name for logging
    fn name(&self) -> &str;

    /// Synthesize `text` into an audio file in the audio directory
    async fn speak(&self, text: &str) -> Result<AudioClip>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_url() {
        let clip = AudioClip {
            file_name: "audio_3f2a.mp3".to_string(),
        };
        assert_eq!(clip.url(), "/audio/audio_3f2a.mp3");
    }
}
