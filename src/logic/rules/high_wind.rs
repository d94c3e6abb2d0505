use super::Rule;
use crate::models::{AirQualityCategory, Recommendation, Trigger, WalkAction, WeatherObservation};

pub const MAX_WIND_KMH: f64 = 40.0;

/// High wind rule - sustained wind above 40 km/h
pub struct HighWindRule;

impl Rule for HighWindRule {
    fn id(&self) -> &'static str {
        "high_wind"
    }

    fn name(&self) -> &'static str {
        "High Wind Speed"
    }

    fn evaluate(
        &self,
        weather: &WeatherObservation,
        _air_quality: AirQualityCategory,
    ) -> Option<Recommendation> {
        let wind_kmh = weather.wind_speed_kmh();
        if wind_kmh <= MAX_WIND_KMH {
            return None;
        }

        Some(Recommendation::new(
            WalkAction::DoNotGoOut,
            Trigger::WindSpeed,
            "Do Not Go Out (High Wind Speed)",
            format!("{:.2} km/h", wind_kmh),
        ))
    }
}
