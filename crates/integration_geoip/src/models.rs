//! Geolocation data models
//!
//! Types for representing responses from the ip-api.com API.

use serde::{Deserialize, Serialize};

/// Response from the IP geolocation endpoint
///
/// Fields besides `status` are only populated on successful lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpLocation {
    /// Lookup status, `success` or `fail`
    pub status: String,
    /// Failure reason, present when status is `fail`
    #[serde(default)]
    pub message: Option<String>,
    /// Country name
    #[serde(default)]
    pub country: Option<String>,
    /// City name
    #[serde(default)]
    pub city: Option<String>,
    /// Latitude in decimal degrees
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude in decimal degrees
    #[serde(default)]
    pub lon: Option<f64>,
    /// Timezone at the located position
    #[serde(default)]
    pub timezone: Option<String>,
    /// The IP address the lookup ran against
    #[serde(default)]
    pub query: Option<String>,
}

impl IpLocation {
    /// Latitude and longitude, when both were reported
    #[must_use]
    pub const fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Whether the lookup succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
