//! Integration tests for the MetaWeather client using wiremock
//!
//! These tests verify the weather client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use integration_weather::{
    MetaWeatherClient, WeatherClient, WeatherConfig, WeatherError, WeatherState,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample coordinate search response for testing
fn sample_search_response() -> serde_json::Value {
    serde_json::json!([
        {
            "distance": 1836,
            "title": "San Francisco",
            "location_type": "City",
            "woeid": 2487956,
            "latt_long": "37.777119, -122.41964"
        },
        {
            "distance": 13600,
            "title": "Oakland",
            "location_type": "City",
            "woeid": 2442047,
            "latt_long": "37.805065,-122.273024"
        }
    ])
}

/// Sample location weather response for testing
fn sample_weather_response() -> serde_json::Value {
    serde_json::json!({
        "consolidated_weather": [
            {
                "id": 6214227354918912u64,
                "weather_state_name": "Light Cloud",
                "weather_state_abbr": "lc",
                "wind_direction_compass": "WSW",
                "created": "2020-07-08T16:20:31.323813Z",
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
                "created": "2020-07-08T16:20:34.154293Z",
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

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> MetaWeatherClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    MetaWeatherClient::new(config).expect("Failed to create client")
}

// ============================================================================
// Location search scenarios
// ============================================================================

#[tokio::test]
async fn test_search_locations_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/location/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_search_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.search_locations(37.78825, -122.4324).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let candidates = result.unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].title, "San Francisco");
    assert_eq!(candidates[0].woeid, 2_487_956);
    assert_eq!(candidates[0].distance, Some(1_836));
    assert_eq!(candidates[1].title, "Oakland");
}

#[tokio::test]
async fn test_search_sends_lattlong_parameter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/location/search/"))
        .and(query_param("lattlong", "37.78825,-122.4324"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_search_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.search_locations(37.78825, -122.4324).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_search_with_no_matches_returns_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/location/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.search_locations(0.0, 0.0).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    assert!(result.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_rejects_invalid_coordinates() {
    let mock_server = MockServer::start().await;

    // No mock mounted, validation should fail before any request
    let client = create_test_client(&mock_server);
    let result = client.search_locations(91.0, 0.0).await;

    assert!(
        matches!(result, Err(WeatherError::InvalidCoordinates)),
        "Expected InvalidCoordinates, got: {result:?}"
    );
}

// ============================================================================
// Location weather scenarios
// ============================================================================

#[tokio::test]
async fn test_location_weather_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/location/2487956/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.location_weather(2_487_956).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let weather = result.unwrap();
    assert_eq!(weather.title, "San Francisco");
    assert_eq!(weather.timezone, "US/Pacific");
    assert_eq!(weather.consolidated_weather.len(), 2);

    let today = &weather.consolidated_weather[0];
    assert_eq!(today.state(), WeatherState::LightCloud);
    assert!((today.the_temp - 18.04).abs() < f64::EPSILON);

    let tomorrow = &weather.consolidated_weather[1];
    assert_eq!(tomorrow.state(), WeatherState::Showers);
    assert_eq!(tomorrow.visibility, None);
}

#[tokio::test]
async fn test_location_weather_parses_sun_times() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/location/2487956/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let weather = client.location_weather(2_487_956).await.unwrap();

    assert_eq!(weather.sun_rise.format("%H:%M").to_string(), "05:55");
    assert_eq!(weather.sun_set.format("%H:%M").to_string(), "20:33");
}

#[tokio::test]
async fn test_unknown_location_returns_request_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/location/999/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.location_weather(999).await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/location/search/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.search_locations(37.78825, -122.4324).await;

    assert!(
        matches!(result, Err(WeatherError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/location/2487956/"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Rate limit exceeded"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.location_weather(2_487_956).await;

    assert!(
        matches!(result, Err(WeatherError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/location/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.search_locations(37.78825, -122.4324).await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}
