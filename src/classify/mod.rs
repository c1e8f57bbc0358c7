//! Image classification
//!
//! This module defines the `Classifier` trait the classification route talks
//! to. Recognizing a landmark from pixels happens outside this crate; the
//! default implementation runs an external classifier program.

pub mod command;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result reported by a classifier
///
/// The classifier's JSON object is kept as-is and echoed back to the client.
/// Only `label` and `description` drive guide state; both are read loosely
/// so a numeric or boolean label still counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Classification(Map<String, Value>);

impl Classification {
    /// An empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Raw field access
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Recognized label; `None` when missing, null, false, zero or empty
    pub fn label(&self) -> Option<String> {
        self.get("label").and_then(truthy_text)
    }

    /// Landmark description; `None` under the same rules as `label`
    pub fn description(&self) -> Option<String> {
        self.get("description").and_then(truthy_text)
    }

    /// Classifier confidence, if numeric
    pub fn confidence(&self) -> Option<f64> {
        self.get("confidence").and_then(Value::as_f64)
    }

    /// Classifier-side failure message (e.g. unreadable image)
    pub fn error(&self) -> Option<&str> {
        self.get("error").and_then(Value::as_str)
    }
}

/// Text form of a scalar that is not falsy. Arrays and objects are never labels.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Trait for image classifiers
///
/// Implementations must be thread-safe (Send + Sync) to work with async server.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Returns the classifier name for logging
    fn name(&self) -> &str;

    /// Classify an encoded image
    async fn classify(&self, image: &[u8]) -> Result<Classification>;
}

/// Find the classifier's JSON result in its stdout
///
/// Scans lines from last to first and returns the first one that looks like
/// a JSON object and parses. Earlier lines may be arbitrary log output.
pub fn parse_classifier_output(output: &str) -> Option<Classification> {
    output
        .trim()
        .lines()
        .rev()
        .map(str::trim)
        .filter(|line| line.starts_with('{') && line.ends_with('}'))
        .find_map(|line| serde_json::from_str(line).ok())
}
