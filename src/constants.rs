//! Centralized constants for the landmark-guide crate
//!
//! Constants shared by more than one module live here.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in meters
    pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
}

/// Landmark ranking
pub mod guide {
    /// How many unvisited landmarks are announced per location update
    pub const DEFAULT_TOP_N: usize = 2;
}

/// File naming for the boundary collaborators
pub mod files {
    /// Prefix for uploaded images written to the temp dir
    pub const UPLOAD_PREFIX: &str = "upload_";

    /// Extension given to uploaded images
    pub const UPLOAD_EXTENSION: &str = "jpg";

    /// Content type used when serving synthesized audio
    pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";
}
