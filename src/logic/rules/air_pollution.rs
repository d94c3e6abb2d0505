use super::Rule;
use crate::models::{AirQualityCategory, Recommendation, Trigger, WalkAction, WeatherObservation};

/// Poor air quality rule - keeps pets inside when pollution is high
///
/// Conditions:
/// - Air quality category Poor or Very Poor
///
/// Checked before every weather rule. The reason text says "Take
/// Precaution" while the action is the blocking tier; both are kept as is.
pub struct AirPollutionRule;

impl Rule for AirPollutionRule {
    fn id(&self) -> &'static str {
        "air_pollution"
    }

    fn name(&self) -> &'static str {
        "Poor Air Quality"
    }

    fn evaluate(
        &self,
        _weather: &WeatherObservation,
        air_quality: AirQualityCategory,
    ) -> Option<Recommendation> {
        if !air_quality.is_unhealthy() {
            return None;
        }

        Some(Recommendation::new(
            WalkAction::DoNotGoOut,
            Trigger::AirPollution,
            format!("Take Precaution (Air Quality: {})", air_quality),
            air_quality.as_str(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::calm;

    #[test]
    fn fires_for_poor_and_very_poor() {
        let rec = AirPollutionRule
            .evaluate(&calm(), AirQualityCategory::Poor)
            .unwrap();
        assert_eq!(rec.action, WalkAction::DoNotGoOut);
        assert_eq!(rec.trigger, Trigger::AirPollution);
        assert_eq!(rec.reason_text, "Take Precaution (Air Quality: Poor)");
        assert_eq!(rec.value_text, "Poor");

        let rec = AirPollutionRule
            .evaluate(&calm(), AirQualityCategory::VeryPoor)
            .unwrap();
        assert_eq!(rec.reason_text, "Take Precaution (Air Quality: Very Poor)");
        assert_eq!(rec.value_text, "Very Poor");
    }

    #[test]
    fn silent_below_poor() {
        for category in [
            AirQualityCategory::Good,
            AirQualityCategory::Fair,
            AirQualityCategory::Moderate,
        ] {
            assert!(AirPollutionRule.evaluate(&calm(), category).is_none());
        }
    }
}
