//! Map view region value object

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::Position;

/// The rectangular region a map widget displays: a center position plus
/// fixed half-extents (the zoom deltas) on each axis
///
/// Deltas are set once when the region is built and never change from user
/// input; moving the view means re-centering with the same deltas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    center: Position,
    latitude_delta: f64,
    longitude_delta: f64,
}

impl MapRegion {
    /// Create a region with explicit per-axis deltas
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidZoomDelta` if a delta is not a positive
    /// number or exceeds the half-extent of its axis.
    pub fn new(
        center: Position,
        latitude_delta: f64,
        longitude_delta: f64,
    ) -> Result<Self, DomainError> {
        if !(latitude_delta > 0.0 && latitude_delta <= 90.0) {
            return Err(DomainError::InvalidZoomDelta(latitude_delta));
        }
        if !(longitude_delta > 0.0 && longitude_delta <= 180.0) {
            return Err(DomainError::InvalidZoomDelta(longitude_delta));
        }
        Ok(Self {
            center,
            latitude_delta,
            longitude_delta,
        })
    }

    /// Create a square region with the same delta on both axes
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidZoomDelta` for a non-positive or
    /// out-of-range delta.
    pub fn centered(center: Position, zoom_delta: f64) -> Result<Self, DomainError> {
        Self::new(center, zoom_delta, zoom_delta)
    }

    /// Same deltas, new center
    #[must_use]
    pub const fn recentered(&self, center: Position) -> Self {
        Self {
            center,
            latitude_delta: self.latitude_delta,
            longitude_delta: self.longitude_delta,
        }
    }

    /// Get the center position
    #[must_use]
    pub const fn center(&self) -> Position {
        self.center
    }

    /// Get the latitude half-extent in degrees
    #[must_use]
    pub const fn latitude_delta(&self) -> f64 {
        self.latitude_delta
    }

    /// Get the longitude half-extent in degrees
    #[must_use]
    pub const fn longitude_delta(&self) -> f64 {
        self.longitude_delta
    }

    /// Longitude bounds for a canvas, clamped to the valid axis range
    #[must_use]
    pub fn x_bounds(&self) -> [f64; 2] {
        [
            (self.center.longitude() - self.longitude_delta).max(-180.0),
            (self.center.longitude() + self.longitude_delta).min(180.0),
        ]
    }

    /// Latitude bounds for a canvas, clamped to the valid axis range
    #[must_use]
    pub fn y_bounds(&self) -> [f64; 2] {
        [
            (self.center.latitude() - self.latitude_delta).max(-90.0),
            (self.center.latitude() + self.latitude_delta).min(90.0),
        ]
    }
}
