//! Application services - Use case implementations

mod forecast_service;

pub use forecast_service::{ForecastService, WeatherSnapshot};
