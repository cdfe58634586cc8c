//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and holds the
//! configuration loader.

pub mod adapters;
pub mod config;

pub use adapters::*;
pub use config::{AppConfig, GeoIpAppConfig, UiAppConfig, WeatherAppConfig};
