//! ip-api.com geolocation client
//!
//! HTTP client for the ip-api.com IP geolocation API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::IpLocation;

/// Geolocation client errors
#[derive(Debug, Error)]
pub enum GeolocationError {
    /// Connection to the geolocation service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the geolocation service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from geolocation service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The service answered but could not locate this address
    #[error("Lookup failed: {0}")]
    LookupFailed(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Geolocation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoIpConfig {
    /// ip-api.com base URL (default: <http://ip-api.com>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://ip-api.com".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for GeoIpConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Geolocation client trait for resolving the calling machine's position
#[async_trait]
pub trait GeolocationClient: Send + Sync {
    /// Look up the location of the calling IP address
    async fn locate(&self) -> Result<IpLocation, GeolocationError>;
}

/// ip-api.com HTTP client implementation
#[derive(Debug)]
pub struct IpApiClient {
    client: Client,
    config: GeoIpConfig,
}

impl IpApiClient {
    /// Create a new ip-api.com client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: GeoIpConfig) -> Result<Self, GeolocationError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeolocationError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, GeolocationError> {
        Self::new(GeoIpConfig::default())
    }

    /// Build the lookup URL for the caller's own address
    fn build_lookup_url(&self) -> String {
        format!(
            "{}/json/?fields={}",
            self.config.base_url, "status,message,country,city,lat,lon,timezone,query"
        )
    }
}

#[async_trait]
impl GeolocationClient for IpApiClient {
    #[instrument(skip(self))]
    async fn locate(&self) -> Result<IpLocation, GeolocationError> {
        let url = self.build_lookup_url();
        debug!(url = %url, "Looking up IP geolocation");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GeolocationError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeolocationError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(GeolocationError::ServiceUnavailable(format!(
                "HTTP {status}"
            )));
        }
        if !status.is_success() {
            return Err(GeolocationError::RequestFailed(format!("HTTP {status}")));
        }

        let location: IpLocation = response
            .json()
            .await
            .map_err(|e| GeolocationError::ParseError(e.to_string()))?;

        if !location.is_success() {
            let reason = location
                .message
                .unwrap_or_else(|| "unknown reason".to_string());
            return Err(GeolocationError::LookupFailed(reason));
        }

        Ok(location)
    }
}
