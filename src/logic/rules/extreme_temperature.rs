use super::{temperature_value, Rule};
use crate::models::{AirQualityCategory, Recommendation, Trigger, WalkAction, WeatherObservation};

pub const EXTREME_HEAT_C: f64 = 35.0;
pub const EXTREME_COLD_C: f64 = -5.0;

/// Extreme temperature rule - actual or feels-like temperature is dangerous
///
/// Conditions:
/// - Temperature or feels-like above 35°C
/// - Temperature or feels-like below -5°C
pub struct ExtremeTemperatureRule;

impl Rule for ExtremeTemperatureRule {
    fn id(&self) -> &'static str {
        "extreme_temperature"
    }

    fn name(&self) -> &'static str {
        "Extreme Temperature"
    }

    fn evaluate(
        &self,
        weather: &WeatherObservation,
        _air_quality: AirQualityCategory,
    ) -> Option<Recommendation> {
        let extreme = |c: f64| c > EXTREME_HEAT_C || c < EXTREME_COLD_C;

        if !extreme(weather.temp_c()) && !extreme(weather.feels_like_c()) {
            return None;
        }

        Some(Recommendation::new(
            WalkAction::DoNotGoOut,
            Trigger::Temperature,
            "Do Not Go Out (Extreme Temperature)",
            temperature_value(weather),
        ))
    }
}
