//! Most recently recognized landmark, as shown on the display client

use serde::{Deserialize, Serialize};

/// Label and description of the last successful classification
///
/// Both fields start empty. Each update replaces the whole value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recognition {
    pub label: String,
    pub description: String,
}

impl Recognition {
    /// Create a recognition; a missing description becomes empty
    pub fn new(label: impl Into<String>, description: Option<String>) -> Self {
        Self {
            label: label.into(),
            description: description.unwrap_or_default(),
        }
    }

    /// True before anything has been recognized
    pub fn is_empty(&self) -> bool {
        self.label.is_empty() && self.description.is_empty()
    }
}
