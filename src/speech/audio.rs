//! Audio clip storage
//!
//! Clips are written by the synthesizer into one directory and deleted as
//! soon as they have been read back for a client.

use crate::error::{Error, Result};
use std::path::PathBuf;
use tracing::{info, warn};

/// Directory of generated audio clips
#[derive(Debug, Clone)]
pub struct AudioStore {
    dir: PathBuf,
}

impl AudioStore {
    /// Create a store over `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of a clip, rejecting anything that is not a plain file name
    pub fn path_for(&self, file_name: &str) -> Result<PathBuf> {
        let plain = !file_name.is_empty()
            && file_name != "."
            && file_name != ".."
            && !file_name.contains(['/', '\\'])
            && !file_name.contains("..");
        if !plain {
            return Err(Error::InvalidFileName(file_name.to_string()));
        }
        Ok(self.dir.join(file_name))
    }

    /// Read a clip and delete it
    ///
    /// A failed delete is logged; the clip contents are still returned.
    pub async fn take(&self, file_name: &str) -> Result<Vec<u8>> {
        let path = self.path_for(file_name)?;
        let bytes = tokio::fs::read(&path).await?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => info!("Deleted audio file: {}", file_name),
            Err(e) => warn!("Failed to delete audio file {}: {}", file_name, e),
        }

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_for_rejects_traversal() {
        let store = AudioStore::new("static");

        assert!(store.path_for("audio_1.mp3").is_ok());
        for bad in ["", ".", "..", "../secret", "a/b.mp3", "a\\b.mp3", "x..mp3"] {
            assert!(
                matches!(store.path_for(bad), Err(Error::InvalidFileName(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[tokio::test]
    async fn test_take_reads_once() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("clip.mp3"), b"ID3").unwrap();
        let store = AudioStore::new(dir.path());

        assert_eq!(store.take("clip.mp3").await.unwrap(), b"ID3");
        assert!(!dir.path().join("clip.mp3").exists());

        let second = store.take("clip.mp3").await;
        assert!(matches!(
            second,
            Err(Error::Io(ref e)) if e.kind() == std::io::ErrorKind::NotFound
        ));
    }
}
