//! Geographic coordinates and distance
//!
//! This module handles:
//! - The `Coordinates` type shared by the gazetteer and the HTTP boundary
//! - Range validation for coordinates received from clients
//! - Great-circle distance between two coordinates

pub mod distance;

pub use distance::haversine_distance;

use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude) in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that coordinates are finite and within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    ///
    /// Only the boundary layer calls this; distance and ranking accept any input.
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Coordinates ({}, {}) must be finite numbers",
                self.lat, self.lng
            )));
        }
        if self.lat < -90.0 || self.lat > 90.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if self.lng < -180.0 || self.lng > 180.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
