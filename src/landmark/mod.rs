//! Landmark gazetteer
//!
//! The fixed set of landmarks the guide knows about. A gazetteer is built
//! once at startup and never changes afterwards: labels resolve against it
//! to a `LandmarkId`, and its iteration order is the ranking tie-break.

pub mod campus;
pub mod file;

use crate::coord::Coordinates;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub name: String,
    pub coords: Coordinates,
    pub description: String,
}

impl Landmark {
    /// Create a landmark
    pub fn new(
        name: impl Into<String>,
        coords: Coordinates,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            coords,
            description: description.into(),
        }
    }
}

/// Index of a landmark within its gazetteer
///
/// Only a `Gazetteer` hands these out, so an id is always in range for the
/// gazetteer that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LandmarkId(usize);

impl LandmarkId {
    /// Position of the landmark in gazetteer order
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a label refers to in a gazetteer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackedKey {
    /// A real landmark
    Landmark(LandmarkId),
    /// An extra tracked key with no landmark behind it
    Inert(usize),
}

/// Ordered, closed set of landmarks
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    landmarks: Vec<Landmark>,
    index: HashMap<String, LandmarkId>,
    extra_tracked: Vec<String>,
}

impl Gazetteer {
    /// Build a gazetteer from landmarks in the given order
    ///
    /// Returns an error if two landmarks share a name.
    pub fn new(landmarks: Vec<Landmark>) -> Result<Self> {
        let mut index = HashMap::with_capacity(landmarks.len());
        for (i, landmark) in landmarks.iter().enumerate() {
            if index.insert(landmark.name.clone(), LandmarkId(i)).is_some() {
                return Err(Error::Gazetteer(format!(
                    "Duplicate landmark name: {}",
                    landmark.name
                )));
            }
        }

        Ok(Self {
            landmarks,
            index,
            extra_tracked: Vec::new(),
        })
    }

    /// Track additional keys that have no landmark
    ///
    /// Keys that collide with a landmark name or repeat are ignored.
    pub fn with_extra_tracked<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            let key = key.into();
            if !self.index.contains_key(&key) && !self.extra_tracked.contains(&key) {
                self.extra_tracked.push(key);
            }
        }
        self
    }

    /// Number of landmarks
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// True if there are no landmarks
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// All landmarks in gazetteer order
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Iterate landmarks with their ids, in gazetteer order
    pub fn iter(&self) -> impl Iterator<Item = (LandmarkId, &Landmark)> {
        self.landmarks
            .iter()
            .enumerate()
            .map(|(i, landmark)| (LandmarkId(i), landmark))
    }

    /// Look up a landmark by id
    pub fn get(&self, id: LandmarkId) -> &Landmark {
        &self.landmarks[id.0]
    }

    /// Resolve a landmark name to its id
    pub fn resolve(&self, name: &str) -> Option<LandmarkId> {
        self.index.get(name).copied()
    }

    /// Extra tracked keys, in the order they were added
    pub fn extra_tracked(&self) -> &[String] {
        &self.extra_tracked
    }

    /// Resolve a label to anything the visitation state tracks
    pub fn tracked_key(&self, label: &str) -> Option<TrackedKey> {
        if let Some(id) = self.resolve(label) {
            return Some(TrackedKey::Landmark(id));
        }
        self.extra_tracked
            .iter()
            .position(|k| k == label)
            .map(TrackedKey::Inert)
    }
}
