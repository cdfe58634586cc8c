//! Geolocation adapter - Implements GeolocationPort using integration_geoip

use application::error::ApplicationError;
use application::ports::GeolocationPort;
use async_trait::async_trait;
use domain::value_objects::Position;
use integration_geoip::{GeoIpConfig, GeolocationClient, GeolocationError, IpApiClient};
use tracing::{debug, instrument};

/// Adapter resolving the device position through ip-api.com
pub struct GeolocationAdapter {
    client: IpApiClient,
}

impl std::fmt::Debug for GeolocationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeolocationAdapter")
            .field("client", &"IpApiClient")
            .finish()
    }
}

impl GeolocationAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = IpApiClient::with_defaults()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: GeoIpConfig) -> Result<Self, ApplicationError> {
        let client =
            IpApiClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration geolocation error to application error
    fn map_error(err: GeolocationError) -> ApplicationError {
        match err {
            GeolocationError::ConnectionFailed(e)
            | GeolocationError::RequestFailed(e)
            | GeolocationError::ServiceUnavailable(e)
            | GeolocationError::LookupFailed(e) => ApplicationError::Geolocation(e),
            GeolocationError::ParseError(e) => ApplicationError::Internal(e),
            GeolocationError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }
}

#[async_trait]
impl GeolocationPort for GeolocationAdapter {
    #[instrument(skip(self))]
    async fn current_position(&self) -> Result<Position, ApplicationError> {
        let location = self.client.locate().await.map_err(Self::map_error)?;

        let (latitude, longitude) = location.coordinates().ok_or_else(|| {
            ApplicationError::Geolocation("Lookup response carries no coordinates".to_string())
        })?;

        let position = Position::new(latitude, longitude)?;
        debug!(
            %position,
            city = location.city.as_deref().unwrap_or("unknown"),
            "Resolved position from IP geolocation"
        );
        Ok(position)
    }
}
