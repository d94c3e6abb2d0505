use super::{temperature_value, Rule};
use crate::models::{AirQualityCategory, Recommendation, Trigger, WalkAction, WeatherObservation};

pub const COMFORT_MIN_C: f64 = 0.0;
pub const COMFORT_MAX_C: f64 = 30.0;

/// Temperature warning rule - outside the 0-30°C comfort band
///
/// Only reached once the extreme temperature rule has passed, so this
/// covers the -5..0°C and 30..35°C margins.
pub struct TemperatureWarningRule;

impl Rule for TemperatureWarningRule {
    fn id(&self) -> &'static str {
        "temperature_warning"
    }

    fn name(&self) -> &'static str {
        "Temperature Warning"
    }

    fn evaluate(
        &self,
        weather: &WeatherObservation,
        _air_quality: AirQualityCategory,
    ) -> Option<Recommendation> {
        let comfortable = |c: f64| (COMFORT_MIN_C..=COMFORT_MAX_C).contains(&c);

        if comfortable(weather.temp_c()) && comfortable(weather.feels_like_c()) {
            return None;
        }

        Some(Recommendation::new(
            WalkAction::Precaution,
            Trigger::Temperature,
            "Take Precaution (Temperature Warning)",
            temperature_value(weather),
        ))
    }
}
