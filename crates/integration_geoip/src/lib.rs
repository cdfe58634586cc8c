//! IP geolocation integration
//!
//! Client for the ip-api.com geolocation API (<https://ip-api.com>).
//! Resolves the calling machine's approximate position without requiring
//! an API key.

pub mod client;
mod models;

pub use client::{GeoIpConfig, GeolocationClient, GeolocationError, IpApiClient};
pub use models::IpLocation;
