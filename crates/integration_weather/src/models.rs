//! Weather data models
//!
//! Types for representing weather data from the MetaWeather API.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Weather state derived from MetaWeather abbreviation codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherState {
    /// Snow (`sn`)
    Snow,
    /// Sleet (`sl`)
    Sleet,
    /// Hail (`h`)
    Hail,
    /// Thunderstorm (`t`)
    Thunderstorm,
    /// Heavy rain (`hr`)
    HeavyRain,
    /// Light rain (`lr`)
    LightRain,
    /// Showers (`s`)
    Showers,
    /// Heavy cloud cover (`hc`)
    HeavyCloud,
    /// Light cloud cover (`lc`)
    LightCloud,
    /// Clear sky (`c`)
    Clear,
    /// Unknown state
    Unknown,
}

impl WeatherState {
    /// Convert a MetaWeather abbreviation code to a `WeatherState`
    ///
    /// See: <https://www.metaweather.com/api/> for the code reference
    #[must_use]
    pub fn from_abbr(abbr: &str) -> Self {
        match abbr {
            "sn" => Self::Snow,
            "sl" => Self::Sleet,
            "h" => Self::Hail,
            "t" => Self::Thunderstorm,
            "hr" => Self::HeavyRain,
            "lr" => Self::LightRain,
            "s" => Self::Showers,
            "hc" => Self::HeavyCloud,
            "lc" => Self::LightCloud,
            "c" => Self::Clear,
            _ => Self::Unknown,
        }
    }

    /// Get a human-readable description of the weather state
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
}

impl std::fmt::Display for WeatherState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A location matched by a coordinate or text search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationCandidate {
    /// Location name
    pub title: String,
    /// Kind of location, e.g. `City` or `Region`
    pub location_type: String,
    /// Where-on-earth identifier
    pub woeid: i64,
    /// Comma separated latitude and longitude
    pub latt_long: String,
    /// Distance from the searched coordinates in meters,
    /// only present on coordinate searches
    #[serde(default)]
    pub distance: Option<u64>,
}

/// Weather for a single day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidatedWeather {
    /// Forecast identifier
    pub id: i64,
    /// Human-readable weather state name
    pub weather_state_name: String,
    /// Weather state abbreviation code
    pub weather_state_abbr: String,
    /// Compass point the wind blows from
    pub wind_direction_compass: String,
    /// The date this forecast applies to
    pub applicable_date: NaiveDate,
    /// Minimum temperature in Celsius
    pub min_temp: f64,
    /// Maximum temperature in Celsius
    pub max_temp: f64,
    /// Expected temperature in Celsius
    pub the_temp: f64,
    /// Wind speed in mph
    pub wind_speed: f64,
    /// Wind direction in degrees
    pub wind_direction: f64,
    /// Air pressure in mbar
    pub air_pressure: f64,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Visibility in miles, when reported
    #[serde(default)]
    pub visibility: Option<f64>,
    /// Forecast confidence in percent
    pub predictability: u8,
}

impl ConsolidatedWeather {
    /// Weather state for this day
    #[must_use]
    pub fn state(&self) -> WeatherState {
        WeatherState::from_abbr(&self.weather_state_abbr)
    }
}

/// Full weather report for a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationWeather {
    /// Location name
    pub title: String,
    /// Kind of location
    pub location_type: String,
    /// Where-on-earth identifier
    pub woeid: i64,
    /// Comma separated latitude and longitude
    pub latt_long: String,
    /// Timezone name of the location, e.g. `US/Pacific`
    pub timezone: String,
    /// Local time at the location when the report was issued
    pub time: DateTime<FixedOffset>,
    /// Local sunrise time
    pub sun_rise: DateTime<FixedOffset>,
    /// Local sunset time
    pub sun_set: DateTime<FixedOffset>,
    /// Daily forecasts ordered by date, today first
    pub consolidated_weather: Vec<ConsolidatedWeather>,
}
