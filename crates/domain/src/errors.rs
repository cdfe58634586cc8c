//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Latitude or longitude outside the valid degree ranges
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Coordinate pair string that does not parse as "lat,lon"
    #[error("Invalid coordinate pair: {0}")]
    InvalidCoordinatePair(String),

    /// Map zoom delta outside the usable range
    #[error("Invalid zoom delta: {0}")]
    InvalidZoomDelta(f64),
}
