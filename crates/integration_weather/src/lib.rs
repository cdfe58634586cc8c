//! MetaWeather forecast integration
//!
//! Client for the MetaWeather API (<https://www.metaweather.com/api/>).
//! Resolves coordinates to known locations and fetches their five day
//! forecasts without requiring an API key.

pub mod client;
mod models;

pub use client::{MetaWeatherClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{ConsolidatedWeather, LocationCandidate, LocationWeather, WeatherState};
