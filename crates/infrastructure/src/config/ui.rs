//! User interface configuration.

use domain::{DomainError, MapRegion, Position};
use serde::{Deserialize, Serialize};

/// Terminal user interface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiAppConfig {
    /// Latitude the map starts at before geolocation resolves
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,

    /// Longitude the map starts at before geolocation resolves
    #[serde(default = "default_longitude")]
    pub default_longitude: f64,

    /// Width and height of the map view in degrees
    #[serde(default = "default_zoom_delta")]
    pub zoom_delta: f64,

    /// Milliseconds between terminal input polls
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

const fn default_latitude() -> f64 {
    Position::san_francisco().latitude()
}

const fn default_longitude() -> f64 {
    Position::san_francisco().longitude()
}

const fn default_zoom_delta() -> f64 {
    12.0
}

const fn default_tick_rate_ms() -> u64 {
    16
}

impl Default for UiAppConfig {
    fn default() -> Self {
        Self {
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
            zoom_delta: default_zoom_delta(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiAppConfig {
    /// Starting map region centered on the configured position
    ///
    /// # Errors
    ///
    /// Returns an error if the configured coordinates or zoom delta are
    /// out of range.
    pub fn to_map_region(&self) -> Result<MapRegion, DomainError> {
        let center = Position::new(self.default_latitude, self.default_longitude)?;
        MapRegion::centered(center, self.zoom_delta)
    }
}
