//! Weather service port
//!
//! Defines the interface for location search and forecast retrieval.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};
use domain::{
    entities::Place,
    value_objects::{Position, Temperature},
};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Weather forecast for a specific day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyWeather {
    /// The date this forecast applies to
    pub date: NaiveDate,
    /// Weather state for the day
    pub state: WeatherState,
    /// Expected temperature
    pub temp: Temperature,
    /// Minimum temperature
    pub temp_min: Temperature,
    /// Maximum temperature
    pub temp_max: Temperature,
    /// Wind speed in mph
    pub wind_speed: f64,
    /// Compass point the wind blows from
    pub wind_direction: String,
    /// Relative humidity in percent (0-100)
    pub humidity: u8,
    /// Air pressure in mbar
    pub air_pressure: f64,
    /// Visibility in miles, when reported
    pub visibility: Option<f64>,
    /// Forecast confidence in percent (0-100)
    pub predictability: u8,
}

/// Forecast for a resolved place
///
/// Days are ordered by date, today first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceForecast {
    /// Local sunrise time
    pub sun_rise: DateTime<FixedOffset>,
    /// Local sunset time
    pub sun_set: DateTime<FixedOffset>,
    /// Local time at the place when the forecast was issued
    pub time: DateTime<FixedOffset>,
    /// Timezone name of the place
    pub timezone: String,
    /// Daily forecasts
    pub days: Vec<DailyWeather>,
}

/// Weather states reported by the forecast provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherState {
    /// Snow
    Snow,
    /// Sleet
    Sleet,
    /// Hail
    Hail,
    /// Thunderstorm
    Thunderstorm,
    /// Heavy rain
    HeavyRain,
    /// Light rain
    LightRain,
    /// Showers
    Showers,
    /// Heavy cloud cover
    HeavyCloud,
    /// Light cloud cover
    LightCloud,
    /// Clear sky
    Clear,
    /// Unknown state
    Unknown,
}

impl WeatherState {
    /// Get a human-readable description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Snow => "Snow",
            Self::Sleet => "Sleet",
            Self::Hail => "Hail",
            Self::Thunderstorm => "Thunderstorm",
            Self::HeavyRain => "Heavy rain",
            Self::LightRain => "Light rain",
            Self::Showers => "Showers",
            Self::HeavyCloud => "Heavy cloud",
            Self::LightCloud => "Light cloud",
            Self::Clear => "Clear",
            Self::Unknown => "Unknown",
        }
    }

    /// Get an emoji representation
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Snow => "❄️",
            Self::Sleet | Self::Hail => "🌨️",
            Self::Thunderstorm => "⛈️",
            Self::HeavyRain | Self::Showers => "🌧️",
            Self::LightRain => "🌦️",
            Self::HeavyCloud => "☁️",
            Self::LightCloud => "⛅",
            Self::Clear => "☀️",
            Self::Unknown => "❓",
        }
    }
}

impl std::fmt::Display for WeatherState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Port for weather provider operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Search for places near a position, nearest first
    async fn search_by_position(
        &self,
        position: &Position,
    ) -> Result<Vec<Place>, ApplicationError>;

    /// Fetch the forecast for a place by its identifier
    async fn place_forecast(&self, woeid: i64) -> Result<PlaceForecast, ApplicationError>;
}
