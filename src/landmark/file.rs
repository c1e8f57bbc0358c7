//! Gazetteer files
//!
//! JSON object keyed by landmark name; key order is gazetteer order:
//!
//! ```json
//! {
//!   "canteen": { "gps": [21.128007, 81.765831], "description": "Canteen serving food." }
//! }
//! ```

use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::landmark::{Gazetteer, Landmark};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One entry of a gazetteer file
#[derive(Debug, Deserialize)]
struct LandmarkEntry {
    gps: (f64, f64),
    #[serde(default)]
    description: String,
}

/// Parse a gazetteer from JSON text
pub fn parse_gazetteer(json: &str) -> Result<Gazetteer> {
    let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

    let mut landmarks = Vec::with_capacity(entries.len());
    for (name, value) in entries {
        let entry: LandmarkEntry = serde_json::from_value(value).map_err(|e| {
            Error::Gazetteer(format!("Invalid entry for landmark {}: {}", name, e))
        })?;
        let coords = Coordinates::from(entry.gps);
        coords.validate().map_err(|e| {
            Error::Gazetteer(format!("Landmark {}: {}", name, e))
        })?;
        landmarks.push(Landmark::new(name, coords, entry.description));
    }

    Gazetteer::new(landmarks)
}

/// Load a gazetteer from a JSON file
pub fn load_gazetteer(path: &Path) -> Result<Gazetteer> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Gazetteer(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_gazetteer(&content)
}
