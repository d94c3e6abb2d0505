use crate::models::{AirQualityCategory, Pollutant, PollutantReading};

/// Inclusive lower bounds in µg/m³, one row per category from best to worst.
/// Columns follow [`Pollutant::ALL`]: so2, no2, pm10, pm2_5, o3, co.
///
/// Thresholds never decrease down a column. The VeryPoor row is unbounded,
/// so no finite concentration reaches it.
pub const BREAKPOINTS: [(AirQualityCategory, [f64; 6]); 5] = [
    (
        AirQualityCategory::Good,
        [20.0, 40.0, 20.0, 10.0, 60.0, 4400.0],
    ),
    (
        AirQualityCategory::Fair,
        [80.0, 70.0, 50.0, 25.0, 100.0, 9400.0],
    ),
    (
        AirQualityCategory::Moderate,
        [250.0, 150.0, 100.0, 50.0, 140.0, 12400.0],
    ),
    (
        AirQualityCategory::Poor,
        [350.0, 200.0, 200.0, 75.0, 180.0, 15400.0],
    ),
    (AirQualityCategory::VeryPoor, [f64::INFINITY; 6]),
];

/// Classify a reading into an air quality category.
///
/// Categories are tried worst to best and the first one with any pollutant
/// at or above its threshold wins, which is the worst category any single
/// pollutant reaches. A reading below every threshold is Good.
pub fn classify(reading: &PollutantReading) -> AirQualityCategory {
    for (category, limits) in BREAKPOINTS.iter().rev() {
        let triggered = Pollutant::ALL
            .iter()
            .zip(limits.iter())
            .any(|(pollutant, limit)| reading.get(*pollutant) >= *limit);

        if triggered {
            return *category;
        }
    }

    AirQualityCategory::Good
}

/// Threshold for one pollutant in one category.
pub fn threshold(category: AirQualityCategory, pollutant: Pollutant) -> f64 {
    BREAKPOINTS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, limits)| limits[pollutant.index()])
        .unwrap_or(f64::INFINITY)
}
