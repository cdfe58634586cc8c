//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::{DailyWeather, PlaceForecast, WeatherPort, WeatherState};
use async_trait::async_trait;
use domain::entities::Place;
use domain::value_objects::{Position, Temperature};
use integration_weather::{
    ConsolidatedWeather, LocationCandidate, LocationWeather, MetaWeatherClient, WeatherClient,
    WeatherConfig, WeatherError, WeatherState as IntegrationState,
};
use tracing::{debug, instrument};

/// Adapter for the MetaWeather location and forecast API
pub struct WeatherAdapter {
    client: MetaWeatherClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"MetaWeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = MetaWeatherClient::with_defaults()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            MetaWeatherClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
            WeatherError::InvalidCoordinates => {
                ApplicationError::Internal("Invalid coordinates".to_string())
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Convert integration weather state to application weather state
    const fn map_state(state: IntegrationState) -> WeatherState {
        match state {
            IntegrationState::Snow => WeatherState::Snow,
            IntegrationState::Sleet => WeatherState::Sleet,
            IntegrationState::Hail => WeatherState::Hail,
            IntegrationState::Thunderstorm => WeatherState::Thunderstorm,
            IntegrationState::HeavyRain => WeatherState::HeavyRain,
            IntegrationState::LightRain => WeatherState::LightRain,
            IntegrationState::Showers => WeatherState::Showers,
            IntegrationState::HeavyCloud => WeatherState::HeavyCloud,
            IntegrationState::LightCloud => WeatherState::LightCloud,
            IntegrationState::Clear => WeatherState::Clear,
            IntegrationState::Unknown => WeatherState::Unknown,
        }
    }

    /// Convert a search candidate to a place entity
    fn map_candidate(candidate: LocationCandidate) -> Result<Place, ApplicationError> {
        let position = candidate.latt_long.parse::<Position>()?;
        let mut place = Place::new(
            candidate.woeid,
            candidate.title,
            candidate.location_type,
            position,
        );
        if let Some(distance) = candidate.distance {
            place = place.with_distance(distance);
        }
        Ok(place)
    }

    /// Convert a single day of integration weather to the port representation
    fn map_day(day: &ConsolidatedWeather) -> DailyWeather {
        DailyWeather {
            date: day.applicable_date,
            state: Self::map_state(day.state()),
            temp: Temperature::from_celsius(day.the_temp),
            temp_min: Temperature::from_celsius(day.min_temp),
            temp_max: Temperature::from_celsius(day.max_temp),
            wind_speed: day.wind_speed,
            wind_direction: day.wind_direction_compass.clone(),
            humidity: day.humidity,
            air_pressure: day.air_pressure,
            visibility: day.visibility,
            predictability: day.predictability,
        }
    }

    /// Convert a location weather report to the port representation
    fn map_weather(weather: LocationWeather) -> PlaceForecast {
        let mut days: Vec<DailyWeather> = weather
            .consolidated_weather
            .iter()
            .map(Self::map_day)
            .collect();
        days.sort_by_key(|day| day.date);

        PlaceForecast {
            sun_rise: weather.sun_rise,
            sun_set: weather.sun_set,
            time: weather.time,
            timezone: weather.timezone,
            days,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = position.latitude(), lon = position.longitude()))]
    async fn search_by_position(
        &self,
        position: &Position,
    ) -> Result<Vec<Place>, ApplicationError> {
        let candidates = self
            .client
            .search_locations(position.latitude(), position.longitude())
            .await
            .map_err(Self::map_error)?;

        debug!(count = candidates.len(), "Retrieved location candidates");

        candidates
            .into_iter()
            .map(Self::map_candidate)
            .collect::<Result<Vec<_>, _>>()
    }

    #[instrument(skip(self), fields(woeid = %woeid))]
    async fn place_forecast(&self, woeid: i64) -> Result<PlaceForecast, ApplicationError> {
        let weather = self
            .client
            .location_weather(woeid)
            .await
            .map_err(Self::map_error)?;

        debug!(
            title = %weather.title,
            days = weather.consolidated_weather.len(),
            "Retrieved location weather"
        );

        Ok(Self::map_weather(weather))
    }
}
