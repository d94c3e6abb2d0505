pub mod air_pollution;
pub mod engine;
pub mod extreme_temperature;
pub mod heavy_precipitation;
pub mod high_wind;
pub mod temperature_warning;

pub use engine::RulesEngine;

use crate::models::{AirQualityCategory, Recommendation, WeatherObservation};

/// Trait for walk safety rules
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return a recommendation if it fires
    fn evaluate(
        &self,
        weather: &WeatherObservation,
        air_quality: AirQualityCategory,
    ) -> Option<Recommendation>;
}

/// "<temp>°C / Feels Like: <feels>°C", two decimals each.
pub(crate) fn temperature_value(weather: &WeatherObservation) -> String {
    format!(
        "{:.2}°C / Feels Like: {:.2}°C",
        weather.temp_c(),
        weather.feels_like_c()
    )
}
