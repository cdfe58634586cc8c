//! Integration configurations: IP geolocation and the weather provider.

use serde::{Deserialize, Serialize};

// ==============================
// Geolocation Configuration
// ==============================

/// IP geolocation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoIpAppConfig {
    /// ip-api.com base URL
    #[serde(default = "default_geoip_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_geoip_timeout")]
    pub timeout_secs: u64,
}

fn default_geoip_base_url() -> String {
    "http://ip-api.com".to_string()
}

const fn default_geoip_timeout() -> u64 {
    10
}

impl Default for GeoIpAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_geoip_base_url(),
            timeout_secs: default_geoip_timeout(),
        }
    }
}

impl GeoIpAppConfig {
    /// Convert to `integration_geoip` config
    #[must_use]
    pub fn to_geoip_config(&self) -> integration_geoip::GeoIpConfig {
        integration_geoip::GeoIpConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

// ==============================
// Weather Configuration
// ==============================

/// Weather provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// MetaWeather API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

fn default_weather_base_url() -> String {
    "https://www.metaweather.com/api".to_string()
}

const fn default_weather_timeout() -> u64 {
    30
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_secs: default_weather_timeout(),
        }
    }
}

impl WeatherAppConfig {
    /// Convert to `integration_weather` config
    #[must_use]
    pub fn to_weather_config(&self) -> integration_weather::WeatherConfig {
        integration_weather::WeatherConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
