use super::air_quality::classify;
use super::normalize::{normalize_air_pollution, normalize_weather};
use super::rules::RulesEngine;
use crate::datasources::ObservationSource;
use crate::error::Result;
use crate::models::{
    PollutantReading, Recommendation, WalkConditions, WalkReport, WeatherObservation,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Message returned to callers when the weather fetch fails, whatever the cause.
pub const WEATHER_UNAVAILABLE: &str = "Failed to fetch weather data.";

/// Source of "now" for daylight checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Outward shape of a check: the payload on success, `{"error": ...}` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckResponse<T> {
    Ok(T),
    Failed { error: String },
}

impl<T> CheckResponse<T> {
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => CheckResponse::Ok(value),
            Err(e) => {
                tracing::warn!("Walk check failed: {}", e);
                CheckResponse::Failed {
                    error: WEATHER_UNAVAILABLE.to_string(),
                }
            }
        }
    }
}

/// Runs a walk check: fetch, normalize, classify air quality, apply rules.
pub struct WalkCheckService {
    source: Arc<dyn ObservationSource>,
    clock: Arc<dyn Clock>,
    engine: RulesEngine,
}

impl WalkCheckService {
    pub fn new(source: Arc<dyn ObservationSource>) -> Self {
        Self {
            source,
            clock: Arc::new(SystemClock),
            engine: RulesEngine::new(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn engine(&self) -> &RulesEngine {
        &self.engine
    }

    /// Full report: recommendation plus display metrics.
    pub async fn check_weather(&self, lat: f64, lon: f64) -> Result<WalkReport> {
        let (weather, pollutants) = self.observe(lat, lon).await?;
        Ok(self.assess(&weather, &pollutants))
    }

    /// Recommendation only, without the echoed metrics.
    pub async fn check_weather_summary(&self, lat: f64, lon: f64) -> Result<Recommendation> {
        let (weather, pollutants) = self.observe(lat, lon).await?;
        Ok(self.assess(&weather, &pollutants).recommendation)
    }

    /// Pure part of a check. Same inputs and same clock give the same report.
    pub fn assess(&self, weather: &WeatherObservation, pollutants: &PollutantReading) -> WalkReport {
        let air_quality = classify(pollutants);
        let recommendation = self.engine.evaluate(weather, air_quality);
        let is_day = weather.is_daytime(self.clock.now());

        tracing::debug!(
            location = %weather.location_name,
            air_quality = %air_quality,
            trigger = %recommendation.trigger,
            "Walk check evaluated"
        );

        WalkReport {
            recommendation,
            conditions: WalkConditions::from_observation(weather, air_quality, is_day),
        }
    }

    async fn observe(&self, lat: f64, lon: f64) -> Result<(WeatherObservation, PollutantReading)> {
        // Independent fetches
        let (weather, air) = tokio::join!(
            self.source.fetch_weather(lat, lon),
            self.source.fetch_air_pollution(lat, lon)
        );

        let weather = normalize_weather(&weather?)?;

        let air = match air {
            Ok(payload) => Some(payload),
            Err(e) => {
                tracing::warn!("Failed to fetch air quality data: {}", e);
                None
            }
        };

        Ok((weather, normalize_air_pollution(air.as_ref())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasources::{AirPollutionPayload, WeatherPayload};
    use crate::error::PetWalkError;
    use crate::models::{AirQualityCategory, Trigger, WalkAction};
    use async_trait::async_trait;

    struct StubSource {
        weather: serde_json::Value,
        air: Option<serde_json::Value>,
    }

    #[async_trait]
    impl ObservationSource for StubSource {
        async fn fetch_weather(&self, _lat: f64, _lon: f64) -> Result<WeatherPayload> {
            Ok(serde_json::from_value(self.weather.clone())?)
        }

        async fn fetch_air_pollution(&self, _lat: f64, _lon: f64) -> Result<AirPollutionPayload> {
            match &self.air {
                Some(air) => Ok(serde_json::from_value(air.clone())?),
                None => Err(PetWalkError::DataSourceUnavailable("timed out".into())),
            }
        }
    }

    fn noon() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_020_000, 0).unwrap()
    }

    fn service(weather: serde_json::Value, air: Option<serde_json::Value>) -> WalkCheckService {
        WalkCheckService::new(Arc::new(StubSource { weather, air }))
            .with_clock(Arc::new(FixedClock(noon())))
    }

    fn mild_weather() -> serde_json::Value {
        serde_json::json!({
            "cod": 200,
            "name": "Porto",
            "main": {"temp": 300.15, "feels_like": 300.15, "humidity": 60},
            "wind": {"speed": 5.0},
            "weather": [{"main": "Clouds", "description": "scattered clouds"}],
            "sys": {"country": "PT", "sunrise": 1700000000, "sunset": 1700040000}
        })
    }

    fn clean_air() -> serde_json::Value {
        serde_json::json!({"list": [{"components": {"pm2_5": 3.0, "o3": 20.0}}]})
    }

    #[tokio::test]
    async fn mild_day_full_report() {
        let report = service(mild_weather(), Some(clean_air()))
            .check_weather(41.15, -8.61)
            .await
            .unwrap();

        assert_eq!(report.recommendation.action, WalkAction::NoWorries);
        assert_eq!(report.recommendation.trigger, Trigger::General);
        assert_eq!(report.conditions.location, "Porto");
        assert_eq!(report.conditions.country, "PT");
        assert_eq!(report.conditions.temp, 27.0);
        assert_eq!(report.conditions.wind_speed, 18.0);
        assert_eq!(report.conditions.humidity, 60);
        assert_eq!(report.conditions.main, "Clouds");
        assert_eq!(report.conditions.air_quality, AirQualityCategory::Good);
        assert!(report.conditions.is_day);
    }

    #[tokio::test]
    async fn polluted_air_blocks_the_walk() {
        let air = serde_json::json!({"list": [{"components": {"pm2_5": 80.0}}]});
        let report = service(mild_weather(), Some(air))
            .check_weather(41.15, -8.61)
            .await
            .unwrap();

        assert_eq!(report.conditions.air_quality, AirQualityCategory::Poor);
        assert_eq!(report.recommendation.action, WalkAction::DoNotGoOut);
        assert_eq!(report.recommendation.trigger, Trigger::AirPollution);
        assert_eq!(report.recommendation.value_text, "Poor");
    }

    #[tokio::test]
    async fn empty_air_list_is_good_air() {
        let air = serde_json::json!({"list": []});
        let report = service(mild_weather(), Some(air))
            .check_weather(0.0, 0.0)
            .await
            .unwrap();
        assert_eq!(report.conditions.air_quality, AirQualityCategory::Good);
    }

    #[tokio::test]
    async fn air_fetch_failure_is_absorbed() {
        let report = service(mild_weather(), None)
            .check_weather(0.0, 0.0)
            .await
            .unwrap();
        assert_eq!(report.conditions.air_quality, AirQualityCategory::Good);
        assert_eq!(report.recommendation.trigger, Trigger::General);
    }

    #[tokio::test]
    async fn weather_failure_is_terminal() {
        let weather = serde_json::json!({"cod": "404", "message": "city not found"});
        let result = service(weather, Some(clean_air()))
            .check_weather(0.0, 0.0)
            .await;

        assert!(matches!(result, Err(PetWalkError::Upstream { .. })));

        let response = CheckResponse::from_result(result);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"error": "Failed to fetch weather data."})
        );
    }

    #[tokio::test]
    async fn summary_drops_display_metrics() {
        let rec = service(mild_weather(), Some(clean_air()))
            .check_weather_summary(0.0, 0.0)
            .await
            .unwrap();
        let json = serde_json::to_value(&rec).unwrap();

        assert_eq!(json["triggered_by"], "General Weather Conditions");
        assert!(json.get("location").is_none());
        assert!(json.get("is_day").is_none());
    }

    #[test]
    fn assess_is_idempotent() {
        let svc = service(mild_weather(), None);
        let weather = WeatherObservation {
            temp_k: 303.0,
            sunrise_epoch: 1_700_000_000,
            sunset_epoch: 1_700_040_000,
            ..Default::default()
        };
        let pollutants = PollutantReading::clean();

        assert_eq!(svc.assess(&weather, &pollutants), svc.assess(&weather, &pollutants));
    }

    #[test]
    fn daylight_follows_the_clock() {
        let weather = WeatherObservation {
            sunrise_epoch: 1_700_000_000,
            sunset_epoch: 1_700_040_000,
            ..Default::default()
        };
        let pollutants = PollutantReading::clean();
        let night = DateTime::from_timestamp(1_700_050_000, 0).unwrap();

        let day_svc = service(mild_weather(), None);
        let night_svc = service(mild_weather(), None).with_clock(Arc::new(FixedClock(night)));

        assert!(day_svc.assess(&weather, &pollutants).conditions.is_day);
        assert!(!night_svc.assess(&weather, &pollutants).conditions.is_day);
    }

    #[test]
    fn success_response_is_the_payload_itself() {
        let svc = service(mild_weather(), None);
        let report = svc.assess(&WeatherObservation::default(), &PollutantReading::clean());
        let json = serde_json::to_value(CheckResponse::from_result(Ok(report))).unwrap();

        assert!(json.get("error").is_none());
        assert_eq!(json["location"], "Unknown");
    }
}
