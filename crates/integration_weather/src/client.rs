//! MetaWeather client
//!
//! HTTP client for the MetaWeather location and forecast API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{LocationCandidate, LocationWeather};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// MetaWeather API base URL (default: <https://www.metaweather.com/api>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://www.metaweather.com/api".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for location search and forecast retrieval
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Search for locations near a coordinate pair, nearest first
    async fn search_locations(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<LocationCandidate>, WeatherError>;

    /// Fetch the full weather report for a location
    async fn location_weather(&self, woeid: i64) -> Result<LocationWeather, WeatherError>;
}

/// MetaWeather HTTP client implementation
#[derive(Debug)]
pub struct MetaWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl MetaWeatherClient {
    /// Create a new MetaWeather client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Build the API URL for a coordinate search
    fn build_search_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/location/search/?lattlong={},{}",
            self.config.base_url, latitude, longitude
        )
    }

    /// Build the API URL for a location weather report
    fn build_location_url(&self, woeid: i64) -> String {
        format!("{}/location/{}/", self.config.base_url, woeid)
    }
}

#[async_trait]
impl WeatherClient for MetaWeatherClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn search_locations(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<LocationCandidate>, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.build_search_url(latitude, longitude);
        debug!(url = %url, "Searching locations by coordinates");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let candidates: Vec<LocationCandidate> = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        Ok(candidates)
    }

    #[instrument(skip(self), fields(woeid = %woeid))]
    async fn location_weather(&self, woeid: i64) -> Result<LocationWeather, WeatherError> {
        let url = self.build_location_url(woeid);
        debug!(url = %url, "Fetching location weather");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let weather: LocationWeather = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        Ok(weather)
    }
}
