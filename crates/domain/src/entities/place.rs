//! Resolved place entity

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::Position;

/// A named location resolved from a position via reverse search
///
/// Identity is the location service's where-on-earth id; the remaining fields
/// are display data from the same response. At most one place is held at a
/// time, and only after a position is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Where-on-earth identifier assigned by the location service
    pub woeid: i64,
    /// Human-readable name, e.g. "San Francisco"
    pub title: String,
    /// Kind of place the service resolved, e.g. "City"
    pub location_type: String,
    /// The place's own coordinates
    pub position: Position,
    /// Distance in meters from the searched position, when reported
    pub distance: Option<u64>,
}

impl Place {
    /// Create a new place
    #[must_use]
    pub fn new(
        woeid: i64,
        title: impl Into<String>,
        location_type: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            woeid,
            title: title.into(),
            location_type: location_type.into(),
            position,
            distance: None,
        }
    }

    /// Attach the reported distance from the searched position
    #[must_use]
    pub const fn with_distance(mut self, meters: u64) -> Self {
        self.distance = Some(meters);
        self
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_place() -> Place {
        Place::new(
            2_487_956,
            "San Francisco",
            "City",
            Position::new_unchecked(37.777_119, -122.419_64),
        )
    }

    #[test]
    fn new_sets_fields() {
        let place = sample_place();
        assert_eq!(place.woeid, 2_487_956);
        assert_eq!(place.title, "San Francisco");
        assert_eq!(place.location_type, "City");
        assert!(place.distance.is_none());
    }

    #[test]
    fn with_distance_attaches_meters() {
        let place = sample_place().with_distance(1_836);
        assert_eq!(place.distance, Some(1_836));
    }

    #[test]
    fn display_is_the_title() {
        assert_eq!(sample_place().to_string(), "San Francisco");
    }

    #[test]
    fn serialization_round_trip() {
        let place = sample_place().with_distance(500);
        let json = serde_json::to_string(&place).expect("serialize");
        let parsed: Place = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, place);
    }
}
