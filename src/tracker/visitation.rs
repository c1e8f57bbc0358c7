//! Per-landmark visitation flags
//!
//! Each tracked key moves `unvisited -> visited` exactly once and never back.

use crate::landmark::{Gazetteer, LandmarkId, TrackedKey};
use serde::Serialize;

/// Result of a mark-visited request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkOutcome {
    /// A landmark went from unvisited to visited
    Visited,
    /// The landmark was already visited; nothing changed
    AlreadyVisited,
    /// The label is an extra tracked key without a landmark
    Inert,
    /// The label is not tracked; nothing changed
    Unknown,
}

/// Visitation flags, parallel to a gazetteer
#[derive(Debug, Clone)]
pub struct VisitationState {
    landmarks: Vec<bool>,
    inert: Vec<bool>,
}

impl VisitationState {
    /// All flags start unvisited
    pub fn new(gazetteer: &Gazetteer) -> Self {
        Self {
            landmarks: vec![false; gazetteer.len()],
            inert: vec![false; gazetteer.extra_tracked().len()],
        }
    }

    /// Whether a landmark has been visited
    pub fn is_visited(&self, id: LandmarkId) -> bool {
        self.landmarks[id.index()]
    }

    /// Set a tracked key's flag
    pub fn mark(&mut self, key: TrackedKey) -> MarkOutcome {
        match key {
            TrackedKey::Landmark(id) => {
                let flag = &mut self.landmarks[id.index()];
                if *flag {
                    MarkOutcome::AlreadyVisited
                } else {
                    *flag = true;
                    MarkOutcome::Visited
                }
            }
            TrackedKey::Inert(i) => {
                self.inert[i] = true;
                MarkOutcome::Inert
            }
        }
    }

    /// Number of visited landmarks (inert keys excluded)
    pub fn visited_count(&self) -> usize {
        self.landmarks.iter().filter(|v| **v).count()
    }

    /// Whether an inert key has been reported
    pub fn is_inert_marked(&self, i: usize) -> bool {
        self.inert.get(i).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::campus::campus_gazetteer;

    #[test]
    fn test_marking_is_monotonic() {
        let gazetteer = campus_gazetteer();
        let mut state = VisitationState::new(&gazetteer);
        let lab = gazetteer.resolve("lab").unwrap();

        assert!(!state.is_visited(lab));
        assert_eq!(state.mark(TrackedKey::Landmark(lab)), MarkOutcome::Visited);
        assert_eq!(state.mark(TrackedKey::Landmark(lab)), MarkOutcome::AlreadyVisited);
        assert!(state.is_visited(lab));
        assert_eq!(state.visited_count(), 1);
    }

    #[test]
    fn test_inert_keys_do_not_count() {
        let gazetteer = campus_gazetteer();
        let mut state = VisitationState::new(&gazetteer);
        let raman = gazetteer.tracked_key("raman").unwrap();

        assert!(!state.is_inert_marked(0));
        assert_eq!(state.mark(raman), MarkOutcome::Inert);
        assert!(state.is_inert_marked(0));
        assert!(!state.is_inert_marked(1));
        assert_eq!(state.visited_count(), 0);
    }
}
