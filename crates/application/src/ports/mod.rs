//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geolocation_port;
mod weather_port;

pub use geolocation_port::GeolocationPort;
#[cfg(test)]
pub use geolocation_port::MockGeolocationPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::{DailyWeather, PlaceForecast, WeatherPort, WeatherState};
