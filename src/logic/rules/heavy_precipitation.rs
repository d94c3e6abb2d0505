use super::Rule;
use crate::models::{AirQualityCategory, Recommendation, Trigger, WalkAction, WeatherObservation};

pub const MAX_PRECIPITATION_MM: f64 = 5.0;

/// Heavy rain or snow rule - more than 5 mm in the last hour
pub struct HeavyPrecipitationRule;

impl Rule for HeavyPrecipitationRule {
    fn id(&self) -> &'static str {
        "heavy_precipitation"
    }

    fn name(&self) -> &'static str {
        "Heavy Rain/Snow"
    }

    fn evaluate(
        &self,
        weather: &WeatherObservation,
        _air_quality: AirQualityCategory,
    ) -> Option<Recommendation> {
        if weather.precipitation_mm <= MAX_PRECIPITATION_MM {
            return None;
        }

        Some(Recommendation::new(
            WalkAction::DoNotGoOut,
            Trigger::Precipitation,
            "Do Not Go Out (Heavy Rain/Snow)",
            format!("{} mm", format_amount(weather.precipitation_mm)),
        ))
    }
}

/// Shortest form of the amount, keeping `.0` on whole numbers.
fn format_amount(mm: f64) -> String {
    if mm.fract() == 0.0 {
        format!("{:.1}", mm)
    } else {
        mm.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::calm;

    fn precipitation(mm: f64) -> WeatherObservation {
        WeatherObservation {
            precipitation_mm: mm,
            ..calm()
        }
    }

    #[test]
    fn heavy_rain_fires() {
        let rec = HeavyPrecipitationRule
            .evaluate(&precipitation(7.5), AirQualityCategory::Good)
            .unwrap();
        assert_eq!(rec.trigger, Trigger::Precipitation);
        assert_eq!(rec.value_text, "7.5 mm");
    }

    #[test]
    fn whole_amounts_keep_decimal_point() {
        let rec = HeavyPrecipitationRule
            .evaluate(&precipitation(6.0), AirQualityCategory::Good)
            .unwrap();
        assert_eq!(rec.value_text, "6.0 mm");
        assert_eq!(format_amount(5.25), "5.25");
    }

    #[test]
    fn five_mm_is_still_walkable() {
        assert!(HeavyPrecipitationRule
            .evaluate(&precipitation(5.0), AirQualityCategory::Good)
            .is_none());
    }
}
