//! Integration tests for infrastructure crate
//!
//! Wires both adapters into the forecast service against a single mock
//! HTTP server, covering the full position - search - forecast pipeline.

use std::sync::Arc;

use application::{ApplicationError, ForecastService, WeatherState};
use infrastructure::{GeolocationAdapter, WeatherAdapter};
use integration_geoip::GeoIpConfig;
use integration_weather::WeatherConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Geolocation response placing the caller in San Francisco
fn geoip_response() -> serde_json::Value {
    serde_json::json!({
        "status": "success",
        "country": "United States",
        "city": "San Francisco",
        "lat": 37.78825,
        "lon": -122.4324,
        "timezone": "America/Los_Angeles",
        "query": "203.0.113.7"
    })
}

/// Search response with a single matching location
fn search_response() -> serde_json::Value {
    serde_json::json!([
        {
            "distance": 1836,
            "title": "San Francisco",
            "location_type": "City",
            "woeid": 2487956,
            "latt_long": "37.777119, -122.41964"
        }
    ])
}

/// Location weather response with two forecast days
fn weather_response() -> serde_json::Value {
    serde_json::json!({
        "consolidated_weather": [
            {
                "id": 6214227354918912u64,
                "weather_state_name": "Light Cloud",
                "weather_state_abbr": "lc",
                "wind_direction_compass": "WSW",
                "applicable_date": "2020-07-08",
                "min_temp": 13.89,
                "max_temp": 19.38,
                "the_temp": 18.04,
                "wind_speed": 10.06,
                "wind_direction": 259.5,
                "air_pressure": 1014.0,
                "humidity": 79,
                "visibility": 9.97,
                "predictability": 71
            },
            {
                "id": 5022331016216576u64,
                "weather_state_name": "Showers",
                "weather_state_abbr": "s",
                "wind_direction_compass": "SW",
                "applicable_date": "2020-07-09",
                "min_temp": 12.02,
                "max_temp": 17.54,
                "the_temp": 16.24,
                "wind_speed": 8.41,
                "wind_direction": 225.75,
                "air_pressure": 1011.5,
                "humidity": 82,
                "visibility": null,
                "predictability": 73
            }
        ],
        "time": "2020-07-08T09:17:45.146783-07:00",
        "sun_rise": "2020-07-08T05:55:11.527754-07:00",
        "sun_set": "2020-07-08T20:33:48.376224-07:00",
        "timezone_name": "LMT",
        "title": "San Francisco",
        "location_type": "City",
        "woeid": 2487956,
        "latt_long": "37.777119,-122.41964",
        "timezone": "US/Pacific"
    })
}

/// Build a forecast service whose adapters all talk to the mock server
///
/// # Panics
///
/// Panics if an adapter cannot be created (should not happen in tests).
fn create_service(mock_server: &MockServer) -> ForecastService {
    #[allow(clippy::expect_used)]
    let geolocation = GeolocationAdapter::with_config(GeoIpConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    })
    .expect("Failed to create geolocation adapter");

    #[allow(clippy::expect_used)]
    let weather = WeatherAdapter::with_config(WeatherConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    })
    .expect("Failed to create weather adapter");

    ForecastService::new(Arc::new(geolocation), Arc::new(weather))
}

async fn mount_geoip(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Full pipeline
// ============================================================================

#[tokio::test]
async fn pipeline_resolves_weather_from_ip_position() {
    let mock_server = MockServer::start().await;

    mount_geoip(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(geoip_response()),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/location/search/"))
        .and(query_param("lattlong", "37.78825,-122.4324"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/location/2487956/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = create_service(&mock_server);
    let snapshot = service.fetch_local_weather().await.unwrap();

    assert_eq!(snapshot.place.title, "San Francisco");
    assert_eq!(snapshot.place.woeid, 2_487_956);
    assert_eq!(snapshot.forecast.days.len(), 2);
    assert_eq!(snapshot.forecast.timezone, "US/Pacific");

    let current = snapshot.current().unwrap();
    assert_eq!(current.state, WeatherState::LightCloud);
    assert_eq!(current.humidity, 79);
}

#[tokio::test]
async fn single_candidate_issues_one_forecast_request() {
    let mock_server = MockServer::start().await;

    mount_geoip(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(geoip_response()),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/location/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    // The lone candidate's identifier must be fetched exactly once
    Mock::given(method("GET"))
        .and(path("/location/2487956/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = create_service(&mock_server);
    service.fetch_local_weather().await.unwrap();
}

// ============================================================================
// Failure propagation
// ============================================================================

#[tokio::test]
async fn failed_geolocation_stops_pipeline() {
    let mock_server = MockServer::start().await;

    mount_geoip(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "fail",
            "message": "private range",
            "query": "192.168.1.1"
        })),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/location/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let service = create_service(&mock_server);
    let err = service.fetch_local_weather().await.unwrap_err();

    assert!(matches!(err, ApplicationError::Geolocation(_)));
}

#[tokio::test]
async fn empty_search_yields_no_location_found() {
    let mock_server = MockServer::start().await;

    mount_geoip(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(geoip_response()),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/location/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let service = create_service(&mock_server);
    let err = service.fetch_local_weather().await.unwrap_err();

    assert!(matches!(err, ApplicationError::NoLocationFound(_)));
}

#[tokio::test]
async fn weather_server_error_maps_to_external_service() {
    let mock_server = MockServer::start().await;

    mount_geoip(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(geoip_response()),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/location/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_response()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/location/2487956/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let service = create_service(&mock_server);
    let err = service.fetch_local_weather().await.unwrap_err();

    assert!(matches!(err, ApplicationError::ExternalService(_)));
}
