//! landmark-guide: Location-aware campus guide
//!
//! A library and server that tells a walking visitor which landmarks are
//! nearest and not yet visited, and keeps track of the landmark most
//! recently recognized from a photo.
//!
//! ## Features
//!
//! - Haversine distance between coordinates
//! - Ranking of the nearest unvisited landmarks with a spoken-style message
//! - Monotonic visitation tracking driven by image classification
//! - Pluggable speech synthesis and image classification backends
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use landmark_guide::landmark::campus::campus_gazetteer;
//! use landmark_guide::{Coordinates, Tracker};
//!
//! let mut tracker = Tracker::new(campus_gazetteer());
//! let here = Coordinates::new(21.128007, 81.765831);
//!
//! let ranking = tracker.rank_nearest_unvisited(here, 2);
//! assert_eq!(ranking.message, "Canteen is 0 meters away. Auditorium is 56 meters away.");
//!
//! tracker.mark_visited("canteen");
//! let ranking = tracker.rank_nearest_unvisited(here, 2);
//! assert_eq!(ranking.nearest[0].name, "auditorium");
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod landmark;
pub mod server;
pub mod speech;
pub mod tracker;

// Re-export commonly used types
pub use config::Config;
pub use coord::Coordinates;
pub use error::{Error, Result};
pub use landmark::{Gazetteer, Landmark};
pub use tracker::{Ranking, Recognition, Tracker};
