//! Application configuration
//!
//! Split into focused sub-modules:
//! - `ui`: starting map region and input polling
//! - `integrations`: geolocation and weather provider settings

mod integrations;
mod ui;

use serde::{Deserialize, Serialize};

pub use integrations::{GeoIpAppConfig, WeatherAppConfig};
pub use ui::UiAppConfig;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// User interface configuration
    #[serde(default)]
    pub ui: UiAppConfig,

    /// IP geolocation configuration
    #[serde(default)]
    pub geoip: GeoIpAppConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` and environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file or environment carries invalid values.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a named file and environment
    ///
    /// The file may be absent, in which case defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or environment carries invalid values.
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name(path).required(false))
            // Override with environment variables (e.g., HERECAST_WEATHER__BASE_URL)
            .add_source(
                config::Environment::with_prefix("HERECAST")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
