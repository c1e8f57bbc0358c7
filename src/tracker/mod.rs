//! Landmark visitation tracker
//!
//! Owns the gazetteer together with all mutable guide state:
//! - which landmarks have been visited
//! - the most recently recognized landmark
//!
//! Every operation here is synchronous, infallible and O(landmarks). Callers
//! that share a tracker across threads wrap it in a lock.

pub mod ranking;
pub mod recognition;
pub mod visitation;

pub use ranking::{RankedLandmark, Ranking};
pub use recognition::Recognition;
pub use visitation::{MarkOutcome, VisitationState};

use crate::classify::Classification;
use crate::coord::Coordinates;
use crate::landmark::{Gazetteer, Landmark};
use serde::Serialize;
use std::sync::Arc;

/// A landmark and whether it has been visited
#[derive(Debug, Clone, Serialize)]
pub struct LandmarkStatus {
    #[serde(flatten)]
    pub landmark: Landmark,
    pub visited: bool,
}

/// An extra tracked key with no landmark behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InertStatus {
    pub name: String,
    pub reported: bool,
}

/// Guide state for one process
#[derive(Debug, Clone)]
pub struct Tracker {
    gazetteer: Arc<Gazetteer>,
    visitation: VisitationState,
    recognition: Recognition,
}

impl Tracker {
    /// Create a tracker with every landmark unvisited and nothing recognized
    pub fn new(gazetteer: impl Into<Arc<Gazetteer>>) -> Self {
        let gazetteer = gazetteer.into();
        let visitation = VisitationState::new(&gazetteer);
        Self {
            gazetteer,
            visitation,
            recognition: Recognition::default(),
        }
    }

    /// The gazetteer this tracker ranks against
    pub fn gazetteer(&self) -> &Arc<Gazetteer> {
        &self.gazetteer
    }

    /// Rank the nearest unvisited landmarks from `current`
    ///
    /// Returns at most `top_n` entries, fewer when fewer landmarks remain.
    /// Coordinates are not validated.
    pub fn rank_nearest_unvisited(&self, current: Coordinates, top_n: usize) -> Ranking {
        let candidates = self
            .gazetteer
            .iter()
            .filter(|(id, _)| !self.visitation.is_visited(*id))
            .map(|(_, landmark)| landmark);

        ranking::rank_landmarks(candidates, current, top_n)
    }

    /// Mark the landmark named `label` as visited
    ///
    /// Unknown labels are ignored. Marking twice has the same effect as once.
    pub fn mark_visited(&mut self, label: &str) -> MarkOutcome {
        match self.gazetteer.tracked_key(label) {
            Some(key) => self.visitation.mark(key),
            None => MarkOutcome::Unknown,
        }
    }

    /// Whether `label` names a visited landmark
    pub fn is_visited(&self, label: &str) -> bool {
        self.gazetteer
            .resolve(label)
            .is_some_and(|id| self.visitation.is_visited(id))
    }

    /// Number of visited landmarks
    pub fn visited_count(&self) -> usize {
        self.visitation.visited_count()
    }

    /// Every landmark with its visited flag, in gazetteer order
    pub fn landmark_statuses(&self) -> Vec<LandmarkStatus> {
        self.gazetteer
            .iter()
            .map(|(id, landmark)| LandmarkStatus {
                landmark: landmark.clone(),
                visited: self.visitation.is_visited(id),
            })
            .collect()
    }

    /// Extra tracked keys and whether each has been reported
    pub fn inert_statuses(&self) -> Vec<InertStatus> {
        self.gazetteer
            .extra_tracked()
            .iter()
            .enumerate()
            .map(|(i, name)| InertStatus {
                name: name.clone(),
                reported: self.visitation.is_inert_marked(i),
            })
            .collect()
    }

    /// Replace the current recognition
    ///
    /// The label is not checked against the gazetteer.
    pub fn set_current_recognition(
        &mut self,
        label: impl Into<String>,
        description: Option<String>,
    ) {
        self.recognition = Recognition::new(label, description);
    }

    /// The current recognition
    pub fn current_recognition(&self) -> &Recognition {
        &self.recognition
    }

    /// Apply a classifier result: update the recognition, then the visit flag
    ///
    /// Results without a label leave all state untouched.
    pub fn record_classification(
        &mut self,
        classification: &Classification,
    ) -> Option<MarkOutcome> {
        let label = classification.label()?;
        self.set_current_recognition(label.as_str(), classification.description());
        Some(self.mark_visited(&label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::campus::campus_gazetteer;

    fn abc() -> Tracker {
        let gazetteer = Gazetteer::new(vec![
            Landmark::new("A", Coordinates::new(0.0, 0.0), "a"),
            Landmark::new("B", Coordinates::new(0.0, 0.001), "b"),
            Landmark::new("C", Coordinates::new(0.0, 0.002), "c"),
        ])
        .unwrap();
        Tracker::new(gazetteer)
    }

    fn names(ranking: &Ranking) -> Vec<&str> {
        ranking.nearest.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn test_rank_all_unvisited() {
        let tracker = abc();
        let ranking = tracker.rank_nearest_unvisited(Coordinates::new(0.0, 0.0), 2);

        assert_eq!(names(&ranking), vec!["A", "B"]);
        assert_eq!(ranking.nearest[0].distance, 0.0);
        assert!((ranking.nearest[1].distance - 111.19).abs() < 0.01);
        assert_eq!(ranking.message, "A is 0 meters away. B is 111 meters away.");
    }

    #[test]
    fn test_rank_skips_visited() {
        let mut tracker = abc();
        assert_eq!(tracker.mark_visited("A"), MarkOutcome::Visited);

        let ranking = tracker.rank_nearest_unvisited(Coordinates::new(0.0, 0.0), 2);
        assert_eq!(names(&ranking), vec!["B", "C"]);
        assert_eq!(ranking.message, "B is 111 meters away. C is 222 meters away.");
    }

    #[test]
    fn test_rank_all_visited() {
        let mut tracker = abc();
        for label in ["A", "B", "C"] {
            tracker.mark_visited(label);
        }

        let ranking = tracker.rank_nearest_unvisited(Coordinates::new(0.0, 0.0), 2);
        assert!(ranking.nearest.is_empty());
        assert_eq!(ranking.message, "");
    }

    #[test]
    fn test_rank_fewer_than_top_n() {
        let mut tracker = abc();
        tracker.mark_visited("B");

        let ranking = tracker.rank_nearest_unvisited(Coordinates::new(0.0, 0.0), 5);
        assert_eq!(names(&ranking), vec!["A", "C"]);
    }

    #[test]
    fn test_rank_is_non_decreasing() {
        let tracker = Tracker::new(campus_gazetteer());
        let ranking = tracker.rank_nearest_unvisited(Coordinates::new(21.1285, 81.7660), 7);

        assert_eq!(ranking.nearest.len(), 7);
        for pair in ranking.nearest.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn test_campus_from_canteen() {
        let tracker = Tracker::new(campus_gazetteer());
        let canteen = Coordinates::new(21.128007, 81.765831);
        let ranking = tracker.rank_nearest_unvisited(canteen, 3);

        assert_eq!(names(&ranking), vec!["canteen", "auditorium", "acad"]);
        assert_eq!(
            ranking.message,
            "Canteen is 0 meters away. Auditorium is 56 meters away. Acad is 57 meters away."
        );
    }

    #[test]
    fn test_mark_visited_excludes_acad() {
        let mut tracker = Tracker::new(campus_gazetteer());
        tracker.mark_visited("acad");

        let acad = Coordinates::new(21.128032655514257, 81.76637771291134);
        let ranking = tracker.rank_nearest_unvisited(acad, 7);
        assert_eq!(ranking.nearest.len(), 6);
        assert!(ranking.nearest.iter().all(|l| l.name != "acad"));
        assert!(tracker.is_visited("acad"));
    }

    #[test]
    fn test_mark_unknown_is_noop() {
        let mut tracker = abc();
        assert_eq!(tracker.mark_visited("Z"), MarkOutcome::Unknown);
        assert_eq!(tracker.mark_visited("a"), MarkOutcome::Unknown);
        assert_eq!(tracker.visited_count(), 0);
        assert!(tracker.landmark_statuses().iter().all(|s| !s.visited));
    }

    #[test]
    fn test_mark_visited_idempotent() {
        let mut tracker = abc();
        assert_eq!(tracker.mark_visited("B"), MarkOutcome::Visited);
        let flags = |t: &Tracker| -> Vec<bool> {
            t.landmark_statuses().iter().map(|s| s.visited).collect()
        };
        let once = flags(&tracker);

        assert_eq!(tracker.mark_visited("B"), MarkOutcome::AlreadyVisited);
        let twice = flags(&tracker);

        assert_eq!(once, twice);
        assert_eq!(tracker.visited_count(), 1);
    }

    #[test]
    fn test_inert_key_tracked_but_never_ranked() {
        let mut tracker = Tracker::new(campus_gazetteer());
        assert_eq!(tracker.mark_visited("raman"), MarkOutcome::Inert);
        assert_eq!(tracker.visited_count(), 0);
        assert!(!tracker.is_visited("raman"));

        let ranking = tracker.rank_nearest_unvisited(Coordinates::new(21.1285, 81.7660), 10);
        assert_eq!(ranking.nearest.len(), 7);
    }

    #[test]
    fn test_set_current_recognition() {
        let mut tracker = abc();
        assert!(tracker.current_recognition().is_empty());

        tracker.set_current_recognition("bose", Some("desc".to_string()));
        assert_eq!(
            tracker.current_recognition(),
            &Recognition {
                label: "bose".to_string(),
                description: "desc".to_string()
            }
        );

        // No gazetteer check, and a missing description clears the old one
        tracker.set_current_recognition("somewhere", None);
        assert_eq!(tracker.current_recognition().label, "somewhere");
        assert_eq!(tracker.current_recognition().description, "");
        assert_eq!(tracker.visited_count(), 0);
    }

    #[test]
    fn test_record_classification() {
        let mut tracker = abc();
        let classification = Classification::new()
            .with("label", "C")
            .with("description", "third");

        assert_eq!(
            tracker.record_classification(&classification),
            Some(MarkOutcome::Visited)
        );
        assert_eq!(tracker.current_recognition().label, "C");
        assert_eq!(tracker.current_recognition().description, "third");
        assert!(tracker.is_visited("C"));
    }

    #[test]
    fn test_record_classification_without_label() {
        let mut tracker = abc();
        tracker.set_current_recognition("A", Some("first".to_string()));

        let empty = Classification::new().with("label", "");
        assert_eq!(tracker.record_classification(&empty), None);
        assert_eq!(tracker.record_classification(&Classification::new()), None);
        assert_eq!(tracker.current_recognition().label, "A");
    }

    #[test]
    fn test_record_numeric_label() {
        let gazetteer = Gazetteer::new(vec![Landmark::new("3", Coordinates::new(0.0, 0.0), "")])
            .unwrap();
        let mut tracker = Tracker::new(gazetteer);

        let classification = Classification::new().with("label", 3).with("description", 5);
        assert_eq!(
            tracker.record_classification(&classification),
            Some(MarkOutcome::Visited)
        );
        assert_eq!(tracker.current_recognition().description, "5");
        assert!(tracker.is_visited("3"));
    }

    #[test]
    fn test_inert_statuses() {
        let mut tracker = Tracker::new(campus_gazetteer());
        let raman = |t: &Tracker| t.inert_statuses();

        assert_eq!(
            raman(&tracker),
            vec![InertStatus {
                name: "raman".to_string(),
                reported: false
            }]
        );

        tracker.mark_visited("raman");
        assert!(raman(&tracker)[0].reported);
        assert!(abc().inert_statuses().is_empty());
    }
}
