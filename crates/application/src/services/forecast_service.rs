//! Forecast service
//!
//! Runs the weather lookup pipeline: resolve the device position, find the
//! nearest known place, then fetch that place's forecast.

use std::sync::Arc;

use domain::{entities::Place, value_objects::Position};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{DailyWeather, GeolocationPort, PlaceForecast, WeatherPort},
};

/// Result of a completed weather lookup
#[derive(Debug, Clone)]
pub struct WeatherSnapshot {
    /// Position the lookup started from
    pub position: Position,
    /// Place the position resolved to
    pub place: Place,
    /// Forecast for that place
    pub forecast: PlaceForecast,
}

impl WeatherSnapshot {
    /// Today's weather, if the provider returned any days
    #[must_use]
    pub fn current(&self) -> Option<&DailyWeather> {
        self.forecast.days.first()
    }
}

/// Service coordinating geolocation and weather lookups
pub struct ForecastService {
    geolocation: Arc<dyn GeolocationPort>,
    weather: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastService").finish_non_exhaustive()
    }
}

impl ForecastService {
    /// Create a new forecast service
    #[must_use]
    pub fn new(geolocation: Arc<dyn GeolocationPort>, weather: Arc<dyn WeatherPort>) -> Self {
        Self {
            geolocation,
            weather,
        }
    }

    /// Resolve the device position and fetch the weather for it
    #[instrument(skip(self))]
    pub async fn fetch_local_weather(&self) -> Result<WeatherSnapshot, ApplicationError> {
        let position = self.geolocation.current_position().await?;
        debug!(%position, "resolved current position");

        let place = self.resolve_place(&position).await?;
        debug!(woeid = place.woeid, title = %place.title, "resolved nearest place");

        let forecast = self.weather.place_forecast(place.woeid).await?;
        info!(
            woeid = place.woeid,
            days = forecast.days.len(),
            "fetched weather forecast"
        );

        Ok(WeatherSnapshot {
            position,
            place,
            forecast,
        })
    }

    /// Find the place nearest to a position
    ///
    /// Search results come back nearest first, so the first candidate wins.
    async fn resolve_place(&self, position: &Position) -> Result<Place, ApplicationError> {
        let mut candidates = self.weather.search_by_position(position).await?;
        if candidates.is_empty() {
            warn!(%position, "location search returned no candidates");
            return Err(ApplicationError::NoLocationFound(position.to_string()));
        }
        Ok(candidates.remove(0))
    }
}
