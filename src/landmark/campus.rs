//! Built-in campus gazetteer

use crate::coord::Coordinates;
use crate::error::Result;
use crate::landmark::{Gazetteer, Landmark};

/// Campus landmarks, in announcement tie-break order
const CAMPUS_LANDMARKS: &[(&str, f64, f64, &str)] = &[
    ("auditorium", 21.12845541824991, 81.76558735795037, "Auditorium for events and lectures."),
    ("canteen", 21.128007, 81.765831, "Canteen serving food and beverages."),
    ("acad", 21.128032655514257, 81.76637771291134, "Academic building with classrooms."),
    ("lab", 21.128412142412103, 81.76695549822541, "Laboratories for practical work."),
    ("complex", 21.129094161698102, 81.76708780512256, "Main complex with offices."),
    ("ramanujan", 21.12987090580691, 81.76611197236053, "Ramanujan block with research labs."),
    ("bose", 21.12778689753694, 81.76441243040722, "Bose building for physics department."),
];

/// Labels the classifier can report that have no landmark entry.
/// Tracked for visitation but never ranked.
const CAMPUS_EXTRA_TRACKED: &[&str] = &["raman"];

/// The built-in campus gazetteer
pub fn campus_gazetteer() -> Gazetteer {
    from_table(CAMPUS_LANDMARKS, CAMPUS_EXTRA_TRACKED)
        .expect("campus landmark names are unique")
}

/// Build a gazetteer from `(name, lat, lng, description)` rows
fn from_table(rows: &[(&str, f64, f64, &str)], extra_tracked: &[&str]) -> Result<Gazetteer> {
    let landmarks = rows
        .iter()
        .map(|&(name, lat, lng, description)| {
            Landmark::new(name, Coordinates::new(lat, lng), description)
        })
        .collect();

    Ok(Gazetteer::new(landmarks)?.with_extra_tracked(extra_tracked.iter().copied()))
}
