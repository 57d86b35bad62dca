use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    http::fetch_text,
    model::{ConditionCode, Coordinates, WeatherObservation},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, url: String) -> Self {
        Self::with_client(api_key, url, Client::new())
    }

    pub fn with_client(api_key: String, url: String, http: Client) -> Self {
        Self { api_key, url, http }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: u32,
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

/// Parses a `/data/2.5/weather` response body (imperial units).
pub fn parse_current(body: &str) -> Result<WeatherObservation> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).context("Failed to parse OpenWeather current JSON")?;

    let weather = parsed
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("OpenWeather response contained no weather conditions"))?;

    Ok(WeatherObservation {
        location_name: parsed.name,
        condition_code: ConditionCode(weather.id),
        condition: weather.main,
        temperature_f: parsed.main.temp,
        feels_like_f: parsed.main.feels_like,
        wind_speed_mph: parsed.wind.speed,
    })
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, coords: Coordinates) -> Result<WeatherObservation> {
        debug!("Requesting current weather for {}", coords);

        let request = self.http.get(&self.url).query(&[
            ("lat", coords.lat.to_string()),
            ("lon", coords.lon.to_string()),
            ("units", "imperial".to_string()),
            ("appid", self.api_key.clone()),
        ]);

        let body = fetch_text(request, "OpenWeather current weather").await?;
        let observation = parse_current(&body)?;

        info!(
            "Weather for {}: {} ({})",
            observation.location_name, observation.condition, observation.condition_code.0
        );

        Ok(observation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::{local_client, serve_once};

    const SAMPLE: &str = r#"{
        "coord": {"lon": -122.33, "lat": 47.61},
        "weather": [{"id": 501, "main": "Rain", "description": "moderate rain", "icon": "10d"}],
        "main": {
            "temp": 52.3, "feels_like": 50.9, "temp_min": 50.0, "temp_max": 54.1,
            "pressure": 1012, "humidity": 87
        },
        "wind": {"speed": 8.05, "deg": 190},
        "dt": 1700000000,
        "name": "Seattle",
        "cod": 200
    }"#;

    #[test]
    fn parses_current_weather() {
        let obs = parse_current(SAMPLE).unwrap();

        assert_eq!(obs.location_name, "Seattle");
        assert_eq!(obs.condition_code, ConditionCode(501));
        assert_eq!(obs.condition, "Rain");
        assert_eq!(obs.temperature_f, 52.3);
        assert_eq!(obs.feels_like_f, 50.9);
        assert_eq!(obs.wind_speed_mph, 8.05);
    }

    fn provider(base: &str) -> OpenWeatherProvider {
        OpenWeatherProvider::with_client(
            "SECRET".to_string(),
            format!("{base}/data/2.5/weather"),
            local_client(),
        )
    }

    #[tokio::test]
    async fn requests_imperial_units_for_coordinates() {
        let (base, server) = serve_once("200 OK", SAMPLE).await;
        let coords = Coordinates { lat: 47.61, lon: -122.33 };

        let obs = provider(&base).current_weather(coords).await.unwrap();
        assert_eq!(obs.location_name, "Seattle");

        let head = server.await.unwrap();
        let request_line = head.lines().next().unwrap();
        assert!(request_line.starts_with("GET /data/2.5/weather?"), "{request_line}");
        for param in ["lat=47.61", "lon=-122.33", "units=imperial", "appid=SECRET"] {
            assert!(request_line.contains(param), "missing {param} in {request_line}");
        }
    }

    #[tokio::test]
    async fn rejected_key_is_fatal() {
        let body = r#"{"cod": 401, "message": "Invalid API key."}"#;
        let (base, server) = serve_once("401 Unauthorized", body).await;
        let coords = Coordinates { lat: 0.0, lon: 0.0 };

        let err = provider(&base).current_weather(coords).await.unwrap_err();

        let msg = err.to_string();
        assert!(
            msg.contains("OpenWeather current weather request failed with status 401"),
            "{msg}"
        );
        server.await.unwrap();
    }

    #[test]
    fn empty_weather_array_is_an_error() {
        let body = r#"{
            "name": "X",
            "weather": [],
            "main": {"temp": 1.0, "feels_like": 1.0},
            "wind": {"speed": 0.0}
        }"#;
        let err = parse_current(body).unwrap_err();
        assert!(err.to_string().contains("no weather conditions"));
    }

    #[test]
    fn missing_field_is_an_error() {
        let body = r#"{
            "name": "X",
            "weather": [{"id": 800, "main": "Clear"}],
            "main": {"temp": 1.0}
        }"#;
        let err = parse_current(body).unwrap_err();
        assert!(err.to_string().contains("Failed to parse OpenWeather current JSON"));
    }

    #[test]
    fn error_payload_is_not_weather() {
        let body = r#"{"cod": 401, "message": "Invalid API key."}"#;
        assert!(parse_current(body).is_err());
    }
}
