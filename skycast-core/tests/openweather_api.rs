//! Provider and end-to-end tests against a mock OpenWeather endpoint.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skycast_core::provider::openweather::OpenWeatherProvider;
use skycast_core::{App, MemoryStore, Screen, SkycastError, Unit, WeatherProvider, WeatherQuery};

const API_PATH: &str = "/data/2.5/weather";

fn provider_for(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::with_base_url("KEY".into(), format!("{}{}", server.uri(), API_PATH))
}

fn paris_body() -> serde_json::Value {
    json!({
        "name": "Paris",
        "timezone": 7200,
        "main": { "temp": 21.4, "feels_like": 20.6, "humidity": 73 },
        "weather": [
            { "main": "Clouds", "description": "scattered clouds", "icon": "03d" }
        ]
    })
}

#[tokio::test]
async fn city_query_sends_expected_params_and_parses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("appid", "KEY"))
        .and(query_param("units", "metric"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_body()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let report = provider
        .current(&WeatherQuery::City("Paris".into()), Unit::Metric)
        .await
        .expect("fetch should succeed");

    assert_eq!(report.location_name, "Paris");
    assert_eq!(report.condition, "Clouds");
    assert_eq!(report.humidity_pct, 73);
    assert_eq!(report.timezone_offset_secs, 7200);
}

#[tokio::test]
async fn coordinate_query_sends_lat_and_lon() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("units", "imperial"))
        .and(query_param("lat", "48.85"))
        .and(query_param("lon", "2.35"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_body()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let report = provider
        .current(&WeatherQuery::Coords { lat: 48.85, lon: 2.35 }, Unit::Imperial)
        .await
        .expect("fetch should succeed");

    assert_eq!(report.unit, Unit::Imperial);
}

#[tokio::test]
async fn not_found_maps_to_the_not_found_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "cod": "404", "message": "city not found" })),
        )
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .current(&WeatherQuery::City("Atlantis".into()), Unit::Metric)
        .await
        .unwrap_err();

    assert!(matches!(err, SkycastError::NotFound));
    assert_eq!(err.to_string(), "Location not found!");
}

#[tokio::test]
async fn other_failures_carry_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .current(&WeatherQuery::City("Paris".into()), Unit::Metric)
        .await
        .unwrap_err();

    match err {
        SkycastError::Fetch(inner) => {
            let msg = inner.to_string();
            assert!(msg.contains("401"), "message was: {msg}");
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn end_to_end_paris_metric() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("q", "Paris"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_body()))
        .mount(&server)
        .await;

    let mut app = App::new(Box::new(provider_for(&server)), Box::new(MemoryStore::new()));
    app.search("Paris").await;

    match app.screen() {
        Screen::Weather(view) => {
            assert_eq!(view.condition, "Clouds");
            assert_eq!(view.temperature, 21);
            assert_eq!(view.temp_glyph, "°C");
            assert_eq!(view.humidity_bar_pct, 73);
            assert_eq!(view.location_name, "Paris");
        }
        other => panic!("expected weather screen, got {other:?}"),
    }
    assert_eq!(app.recent().iter().collect::<Vec<_>>(), vec!["Paris"]);
}
