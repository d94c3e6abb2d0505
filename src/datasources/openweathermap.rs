use crate::config::OpenWeatherMapConfig;
use crate::error::{PetWalkError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Status code the provider reports in `cod` on success.
pub const SUCCESS_CODE: f64 = 200.0;

// OpenWeatherMap API response structures. Every field is optional and a
// field of the wrong type reads as absent: the normalizer decides the
// defaults, not the wire layer.

/// Raw current-weather payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub cod: Option<StatusCode>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub main: Option<OwmMain>,
    #[serde(default, deserialize_with = "lenient")]
    pub wind: Option<OwmWind>,
    #[serde(default, deserialize_with = "lenient")]
    pub clouds: Option<OwmClouds>,
    #[serde(default, deserialize_with = "lenient")]
    pub visibility: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub weather: Option<Vec<OwmWeather>>,
    #[serde(default, deserialize_with = "lenient")]
    pub rain: Option<OwmPrecipitation>,
    #[serde(default, deserialize_with = "lenient")]
    pub snow: Option<OwmPrecipitation>,
    #[serde(default, deserialize_with = "lenient")]
    pub sys: Option<OwmSys>,
}

/// `cod` arrives as a number on success and as a string on most errors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatusCode {
    Number(f64),
    Text(String),
}

impl StatusCode {
    pub fn is_success(&self) -> bool {
        match self {
            StatusCode::Number(code) => *code == SUCCESS_CODE,
            StatusCode::Text(code) => code.trim().parse::<f64>() == Ok(SUCCESS_CODE),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwmMain {
    #[serde(default, deserialize_with = "lenient")]
    pub temp: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub feels_like: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwmWind {
    #[serde(default, deserialize_with = "lenient")]
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwmClouds {
    #[serde(default, deserialize_with = "lenient")]
    pub all: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwmWeather {
    #[serde(default, deserialize_with = "lenient")]
    pub main: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwmPrecipitation {
    #[serde(rename = "1h", default, deserialize_with = "lenient")]
    pub one_hour: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwmSys {
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub sunrise: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub sunset: Option<f64>,
}

/// Raw air-pollution payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirPollutionPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub list: Option<Vec<OwmAirEntry>>,
}

/// Components are kept as raw JSON so one malformed or untracked
/// pollutant never hides the others.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwmAirEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub components: Option<HashMap<String, serde_json::Value>>,
}

impl OwmAirEntry {
    /// Concentration for one component, if present and numeric.
    pub fn component(&self, symbol: &str) -> Option<f64> {
        self.components
            .as_ref()
            .and_then(|c| c.get(symbol))
            .and_then(serde_json::Value::as_f64)
    }
}

/// Deserialize an optional field, reading a value of the wrong shape as
/// `None` instead of failing the whole payload.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Fetch side of a walk check: where raw observations come from.
#[async_trait]
pub trait ObservationSource: Send + Sync {
    async fn fetch_weather(&self, lat: f64, lon: f64) -> Result<WeatherPayload>;

    async fn fetch_air_pollution(&self, lat: f64, lon: f64) -> Result<AirPollutionPayload>;
}

pub struct OpenWeatherMapClient {
    client: reqwest::Client,
    config: OpenWeatherMapConfig,
}

impl OpenWeatherMapClient {
    pub fn new(config: OpenWeatherMapConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    async fn get_json<T>(&self, endpoint: &str, lat: f64, lon: f64) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!(
            "{}/{}?lat={}&lon={}&appid={}",
            self.config.base_url.trim_end_matches('/'),
            endpoint,
            lat,
            lon,
            self.config.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PetWalkError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e)))?;

        // Failures are reported in the body (`cod`/`message`), so the body
        // is parsed whatever the HTTP status.
        let status = response.status();
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            PetWalkError::DataSourceUnavailable(format!(
                "Failed to parse OpenWeatherMap {} response (HTTP {}): {}",
                endpoint, status, e
            ))
        })
    }
}

#[async_trait]
impl ObservationSource for OpenWeatherMapClient {
    async fn fetch_weather(&self, lat: f64, lon: f64) -> Result<WeatherPayload> {
        tracing::info!(lat, lon, "Fetching weather data");
        self.get_json("weather", lat, lon).await
    }

    async fn fetch_air_pollution(&self, lat: f64, lon: f64) -> Result<AirPollutionPayload> {
        tracing::info!(lat, lon, "Fetching air quality data");
        self.get_json("air_pollution", lat, lon).await
    }
}
