//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod geolocation_adapter;
mod weather_adapter;

pub use geolocation_adapter::GeolocationAdapter;
pub use weather_adapter::WeatherAdapter;
