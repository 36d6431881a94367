use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    error::SkycastError,
    model::{Unit, WeatherQuery, WeatherReport},
};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Point the provider at a different endpoint. Used by tests against a
    /// mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    async fn fetch_current(
        &self,
        query: &WeatherQuery,
        unit: Unit,
    ) -> Result<OwCurrentResponse, SkycastError> {
        let mut params: Vec<(&str, String)> = vec![
            ("appid", self.api_key.clone()),
            ("units", unit.as_str().to_string()),
        ];
        match query {
            WeatherQuery::City(name) => params.push(("q", name.clone())),
            WeatherQuery::Coords { lat, lon } => {
                params.push(("lat", lat.to_string()));
                params.push(("lon", lon.to_string()));
            }
        }

        let res = self
            .http
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .context("Failed to send request to OpenWeather (current weather)")
            .map_err(SkycastError::Fetch)?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather current response body")
            .map_err(SkycastError::Fetch)?;

        if status == StatusCode::NOT_FOUND {
            return Err(SkycastError::NotFound);
        }
        if !status.is_success() {
            return Err(SkycastError::Fetch(anyhow!(
                "OpenWeather current request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        serde_json::from_str(&body)
            .context("Failed to parse OpenWeather current JSON")
            .map_err(SkycastError::Fetch)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    timezone: i32,
    main: OwMain,
    weather: Vec<OwWeather>,
}

fn report_from_response(parsed: OwCurrentResponse, unit: Unit) -> WeatherReport {
    let (condition, description, icon_code) = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| (w.main, w.description, w.icon))
        .unwrap_or_else(|| ("Unknown".to_string(), "unknown".to_string(), String::new()));

    WeatherReport {
        location_name: parsed.name,
        condition,
        description,
        icon_code,
        temperature: parsed.main.temp,
        feels_like: parsed.main.feels_like,
        humidity_pct: parsed.main.humidity,
        timezone_offset_secs: parsed.timezone,
        unit,
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(
        &self,
        query: &WeatherQuery,
        unit: Unit,
    ) -> Result<WeatherReport, SkycastError> {
        tracing::debug!(?query, %unit, "fetching current weather");

        match self.fetch_current(query, unit).await {
            Ok(parsed) => Ok(report_from_response(parsed, unit)),
            Err(err) => {
                tracing::debug!(error = %err, "weather fetch failed");
                Err(err)
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OwCurrentResponse {
        OwCurrentResponse {
            name: "Paris".into(),
            timezone: 7200,
            main: OwMain { temp: 21.4, feels_like: 20.6, humidity: 73 },
            weather: vec![OwWeather {
                main: "Clouds".into(),
                description: "scattered clouds".into(),
                icon: "03d".into(),
            }],
        }
    }

    #[test]
    fn maps_response_fields_onto_report() {
        let report = report_from_response(sample(), Unit::Metric);
        assert_eq!(report.location_name, "Paris");
        assert_eq!(report.condition, "Clouds");
        assert_eq!(report.icon_code, "03d");
        assert_eq!(report.humidity_pct, 73);
        assert_eq!(report.timezone_offset_secs, 7200);
        assert_eq!(report.unit, Unit::Metric);
    }

    #[test]
    fn empty_weather_array_falls_back_to_unknown() {
        let mut parsed = sample();
        parsed.weather.clear();
        let report = report_from_response(parsed, Unit::Imperial);
        assert_eq!(report.condition, "Unknown");
        assert_eq!(report.icon_code, "");
    }

    #[test]
    fn truncate_body_caps_long_bodies() {
        let long = "x".repeat(300);
        assert_eq!(truncate_body(&long).len(), 203);
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn wire_payload_deserializes() {
        let body = r#"{
            "name": "Paris",
            "timezone": 7200,
            "main": { "temp": 21.4, "feels_like": 20.6, "humidity": 73, "pressure": 1014 },
            "weather": [
                { "id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d" }
            ],
            "cod": 200
        }"#;
        let parsed: OwCurrentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.name, "Paris");
        assert_eq!(parsed.weather[0].icon, "03d");
    }
}
