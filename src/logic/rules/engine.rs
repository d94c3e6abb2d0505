use super::{
    air_pollution::AirPollutionRule, extreme_temperature::ExtremeTemperatureRule,
    heavy_precipitation::HeavyPrecipitationRule, high_wind::HighWindRule,
    temperature_warning::TemperatureWarningRule, Rule,
};
use crate::models::{AirQualityCategory, Recommendation, Trigger, WalkAction, WeatherObservation};

/// Ordered rule chain. Rules run in priority order and the first one that
/// fires decides the recommendation.
pub struct RulesEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RulesEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(AirPollutionRule),
            Box::new(ExtremeTemperatureRule),
            Box::new(HighWindRule),
            Box::new(HeavyPrecipitationRule),
            Box::new(TemperatureWarningRule),
        ];

        Self { rules }
    }

    pub fn evaluate(
        &self,
        weather: &WeatherObservation,
        air_quality: AirQualityCategory,
    ) -> Recommendation {
        self.rules
            .iter()
            .find_map(|rule| {
                let rec = rule.evaluate(weather, air_quality)?;
                tracing::debug!(rule = rule.id(), action = %rec.action, "Rule fired");
                Some(rec)
            })
            .unwrap_or_else(all_clear)
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn all_clear() -> Recommendation {
    Recommendation::new(
        WalkAction::NoWorries,
        Trigger::General,
        "No Worries (Good Weather for a Walk)",
        "All parameters within safe range",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{calm, with_temps_c};

    #[test]
    fn mild_day_is_all_clear() {
        let rec = RulesEngine::new().evaluate(&calm(), AirQualityCategory::Good);

        assert_eq!(rec.action, WalkAction::NoWorries);
        assert_eq!(rec.trigger, Trigger::General);
        assert_eq!(rec.reason_text, "No Worries (Good Weather for a Walk)");
        assert_eq!(rec.value_text, "All parameters within safe range");
    }

    #[test]
    fn freezing_day_blocks_on_temperature() {
        let weather = WeatherObservation {
            temp_k: 250.0,
            feels_like_k: 250.0,
            ..calm()
        };
        let rec = RulesEngine::new().evaluate(&weather, AirQualityCategory::Good);

        assert_eq!(rec.action, WalkAction::DoNotGoOut);
        assert_eq!(rec.trigger, Trigger::Temperature);
        assert_eq!(rec.value_text, "-23.15°C / Feels Like: -23.15°C");
    }

    #[test]
    fn poor_air_blocks_on_calm_day() {
        let rec = RulesEngine::new().evaluate(&calm(), AirQualityCategory::Poor);

        assert_eq!(rec.action, WalkAction::DoNotGoOut);
        assert_eq!(rec.trigger, Trigger::AirPollution);
        assert_eq!(rec.value_text, "Poor");
    }

    #[test]
    fn air_pollution_outranks_every_weather_rule() {
        let storm = WeatherObservation {
            temp_k: 320.0,
            feels_like_k: 325.0,
            wind_speed_ms: 30.0,
            precipitation_mm: 40.0,
            ..calm()
        };
        for category in [AirQualityCategory::Poor, AirQualityCategory::VeryPoor] {
            let rec = RulesEngine::new().evaluate(&storm, category);
            assert_eq!(rec.trigger, Trigger::AirPollution);
        }
    }

    #[test]
    fn moderate_air_does_not_block() {
        let rec = RulesEngine::new().evaluate(&calm(), AirQualityCategory::Moderate);
        assert_eq!(rec.trigger, Trigger::General);
    }

    #[test]
    fn priority_order_temperature_wind_precipitation() {
        let engine = RulesEngine::new();

        let hot_windy_wet = WeatherObservation {
            wind_speed_ms: 20.0,
            precipitation_mm: 10.0,
            ..with_temps_c(40.0, 40.0)
        };
        assert_eq!(
            engine.evaluate(&hot_windy_wet, AirQualityCategory::Good).trigger,
            Trigger::Temperature
        );

        let windy_wet = WeatherObservation {
            precipitation_mm: 10.0,
            wind_speed_ms: 20.0,
            ..calm()
        };
        assert_eq!(
            engine.evaluate(&windy_wet, AirQualityCategory::Good).trigger,
            Trigger::WindSpeed
        );

        let wet = WeatherObservation {
            precipitation_mm: 10.0,
            ..calm()
        };
        assert_eq!(
            engine.evaluate(&wet, AirQualityCategory::Good).trigger,
            Trigger::Precipitation
        );
    }

    #[test]
    fn heavy_rain_outranks_temperature_warning() {
        let weather = WeatherObservation {
            precipitation_mm: 6.0,
            ..with_temps_c(32.0, 33.0)
        };
        let rec = RulesEngine::new().evaluate(&weather, AirQualityCategory::Good);
        assert_eq!(rec.action, WalkAction::DoNotGoOut);
        assert_eq!(rec.trigger, Trigger::Precipitation);
    }

    #[test]
    fn margin_temperature_is_a_precaution() {
        let rec = RulesEngine::new().evaluate(&with_temps_c(-2.0, -3.0), AirQualityCategory::Fair);
        assert_eq!(rec.action, WalkAction::Precaution);
        assert_eq!(rec.trigger, Trigger::Temperature);
    }

    #[test]
    fn wind_threshold_in_chain() {
        let engine = RulesEngine::new();
        let gusty = WeatherObservation {
            wind_speed_ms: 11.12,
            ..calm()
        };
        let breezy = WeatherObservation {
            wind_speed_ms: 11.0,
            ..calm()
        };

        assert_eq!(
            engine.evaluate(&gusty, AirQualityCategory::Good).trigger,
            Trigger::WindSpeed
        );
        assert_eq!(
            engine.evaluate(&breezy, AirQualityCategory::Good).trigger,
            Trigger::General
        );
    }

    #[test]
    fn rules_listed_in_priority_order() {
        let ids: Vec<_> = RulesEngine::new()
            .list_rules()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(
            ids,
            [
                "air_pollution",
                "extreme_temperature",
                "high_wind",
                "heavy_precipitation",
                "temperature_warning"
            ]
        );
    }
}
