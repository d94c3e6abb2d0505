use serde::{Deserialize, Serialize};

/// Pollutants reported by the air pollution endpoint, keyed by their
/// provider symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pollutant {
    So2,
    No2,
    Pm10,
    Pm2_5,
    O3,
    Co,
}

impl Pollutant {
    pub const ALL: [Pollutant; 6] = [
        Pollutant::So2,
        Pollutant::No2,
        Pollutant::Pm10,
        Pollutant::Pm2_5,
        Pollutant::O3,
        Pollutant::Co,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Pollutant::So2 => "so2",
            Pollutant::No2 => "no2",
            Pollutant::Pm10 => "pm10",
            Pollutant::Pm2_5 => "pm2_5",
            Pollutant::O3 => "o3",
            Pollutant::Co => "co",
        }
    }

    /// Column of this pollutant in per-pollutant tables.
    pub(crate) fn index(self) -> usize {
        match self {
            Pollutant::So2 => 0,
            Pollutant::No2 => 1,
            Pollutant::Pm10 => 2,
            Pollutant::Pm2_5 => 3,
            Pollutant::O3 => 4,
            Pollutant::Co => 5,
        }
    }
}

impl std::fmt::Display for Pollutant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Concentrations in µg/m³ for all six tracked pollutants.
///
/// A pollutant the provider did not report reads as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PollutantReading {
    concentrations: [f64; 6],
}

impl PollutantReading {
    /// All-zero reading, used when the provider has no data.
    pub fn clean() -> Self {
        Self::default()
    }

    pub fn get(&self, pollutant: Pollutant) -> f64 {
        self.concentrations[pollutant.index()]
    }

    /// Negative or NaN concentrations are stored as 0.
    pub fn set(&mut self, pollutant: Pollutant, concentration: f64) {
        self.concentrations[pollutant.index()] = concentration.max(0.0);
    }

    pub fn with(mut self, pollutant: Pollutant, concentration: f64) -> Self {
        self.set(pollutant, concentration);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        Pollutant::ALL.iter().map(|p| (*p, self.get(*p)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AirQualityCategory {
    Good,
    Fair,
    Moderate,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

impl AirQualityCategory {
    /// Best to worst.
    pub const ALL: [AirQualityCategory; 5] = [
        AirQualityCategory::Good,
        AirQualityCategory::Fair,
        AirQualityCategory::Moderate,
        AirQualityCategory::Poor,
        AirQualityCategory::VeryPoor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AirQualityCategory::Good => "Good",
            AirQualityCategory::Fair => "Fair",
            AirQualityCategory::Moderate => "Moderate",
            AirQualityCategory::Poor => "Poor",
            AirQualityCategory::VeryPoor => "Very Poor",
        }
    }

    pub fn is_unhealthy(&self) -> bool {
        *self >= AirQualityCategory::Poor
    }
}

impl std::fmt::Display for AirQualityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
