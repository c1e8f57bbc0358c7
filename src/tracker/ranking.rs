//! Nearest-landmark ranking and the spoken guidance message

use crate::coord::{haversine_distance, Coordinates};
use crate::landmark::Landmark;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A landmark with its distance from the query point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedLandmark {
    pub name: String,
    /// Distance in meters, unrounded
    pub distance: f64,
}

/// Ranked landmarks plus the message announcing them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub message: String,
    pub nearest: Vec<RankedLandmark>,
}

/// Rank candidate landmarks by distance from `current` and keep the first `top_n`
///
/// Candidates are expected in gazetteer order; the sort is stable so equal
/// distances keep that order. NaN distances sort after every number.
pub fn rank_landmarks<'a, I>(candidates: I, current: Coordinates, top_n: usize) -> Ranking
where
    I: IntoIterator<Item = &'a Landmark>,
{
    let mut ranked: Vec<RankedLandmark> = candidates
        .into_iter()
        .map(|landmark| RankedLandmark {
            name: landmark.name.clone(),
            distance: haversine_distance(current, landmark.coords),
        })
        .collect();

    ranked.sort_by(|a, b| compare_distance(a.distance, b.distance));
    ranked.truncate(top_n);

    Ranking {
        message: guidance_message(&ranked),
        nearest: ranked,
    }
}

fn compare_distance(a: f64, b: f64) -> Ordering {
    a.is_nan()
        .cmp(&b.is_nan())
        .then_with(|| a.total_cmp(&b))
}

/// Build the spoken message, e.g. `"Acad is 57 meters away. Lab is 125 meters away."`
///
/// Distances are rounded half away from zero. An empty list gives an empty message.
pub fn guidance_message(ranked: &[RankedLandmark]) -> String {
    ranked
        .iter()
        .map(|l| format!("{} is {:.0} meters away.", capitalize(&l.name), l.distance.round()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character, leave the rest alone
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(name: &str, distance: f64) -> RankedLandmark {
        RankedLandmark {
            name: name.to_string(),
            distance,
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("acad"), "Acad");
        assert_eq!(capitalize("Bose"), "Bose");
        assert_eq!(capitalize("ramanujan block"), "Ramanujan block");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_message_rounds_half_away_from_zero() {
        let message = guidance_message(&[ranked("lab", 124.5), ranked("bose", 149.49)]);
        assert_eq!(message, "Lab is 125 meters away. Bose is 149 meters away.");
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(guidance_message(&[]), "");
    }

    #[test]
    fn test_stable_tie_break() {
        let landmarks = vec![
            Landmark::new("east", Coordinates::new(0.0, 0.001), ""),
            Landmark::new("north", Coordinates::new(0.001, 0.0), ""),
            Landmark::new("west", Coordinates::new(0.0, -0.001), ""),
        ];

        let ranking = rank_landmarks(&landmarks, Coordinates::new(0.0, 0.0), 3);
        let names: Vec<_> = ranking.nearest.iter().map(|l| l.name.as_str()).collect();

        // all three are exactly 0.001 degrees from the origin
        assert_eq!(names, vec!["east", "north", "west"]);
    }

    #[test]
    fn test_nan_sorts_last() {
        let landmarks = vec![
            Landmark::new("broken", Coordinates::new(f64::NAN, 0.0), ""),
            Landmark::new("near", Coordinates::new(0.0, 0.001), ""),
        ];

        let ranking = rank_landmarks(&landmarks, Coordinates::new(0.0, 0.0), 2);
        assert_eq!(ranking.nearest[0].name, "near");
        assert!(ranking.nearest[1].distance.is_nan());
        assert_eq!(
            ranking.message,
            "Near is 111 meters away. Broken is NaN meters away."
        );
    }

    #[test]
    fn test_top_n_zero() {
        let landmarks = vec![Landmark::new("a", Coordinates::new(0.0, 0.0), "")];
        let ranking = rank_landmarks(&landmarks, Coordinates::new(0.0, 0.0), 0);
        assert!(ranking.nearest.is_empty());
        assert_eq!(ranking.message, "");
    }
}
