use super::air_quality::AirQualityCategory;
use super::weather::{round1, WeatherObservation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkAction {
    NoWorries,
    Precaution,
    DoNotGoOut,
}

impl WalkAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalkAction::NoWorries => "No Worries",
            WalkAction::Precaution => "Take Precaution",
            WalkAction::DoNotGoOut => "Do Not Go Out",
        }
    }
}

impl std::fmt::Display for WalkAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The condition that decided the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    #[serde(rename = "Air Pollution")]
    AirPollution,
    #[serde(rename = "Temperature")]
    Temperature,
    #[serde(rename = "Wind Speed")]
    WindSpeed,
    #[serde(rename = "Precipitation")]
    Precipitation,
    #[serde(rename = "General Weather Conditions")]
    General,
}

impl Trigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::AirPollution => "Air Pollution",
            Trigger::Temperature => "Temperature",
            Trigger::WindSpeed => "Wind Speed",
            Trigger::Precipitation => "Precipitation",
            Trigger::General => "General Weather Conditions",
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: WalkAction,
    #[serde(rename = "recommendation")]
    pub reason_text: String,
    #[serde(rename = "triggered_by")]
    pub trigger: Trigger,
    #[serde(rename = "value")]
    pub value_text: String,
}

impl Recommendation {
    pub fn new(
        action: WalkAction,
        trigger: Trigger,
        reason_text: impl Into<String>,
        value_text: impl Into<String>,
    ) -> Self {
        Self {
            action,
            reason_text: reason_text.into(),
            trigger,
            value_text: value_text.into(),
        }
    }
}

/// Display metrics echoed next to the recommendation.
///
/// Temperatures are °C and wind is km/h, each rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkConditions {
    pub location: String,
    pub country: String,
    pub temp: f64,
    pub feels_like: f64,
    pub description: String,
    pub main: String,
    pub humidity: u8,
    pub wind_speed: f64,
    pub air_quality: AirQualityCategory,
    pub is_day: bool,
}

impl WalkConditions {
    pub fn from_observation(
        observation: &WeatherObservation,
        air_quality: AirQualityCategory,
        is_day: bool,
    ) -> Self {
        Self {
            location: observation.location_name.clone(),
            country: observation.country_code.clone(),
            temp: round1(observation.temp_c()),
            feels_like: round1(observation.feels_like_c()),
            description: observation.condition_description.clone(),
            main: observation.condition_main.clone(),
            humidity: observation.humidity_pct,
            wind_speed: round1(observation.wind_speed_kmh()),
            air_quality,
            is_day,
        }
    }
}

/// Full answer to a walk check: the recommendation plus the metrics behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkReport {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    #[serde(flatten)]
    pub conditions: WalkConditions,
}
