use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMP_K: f64 = 293.15;
pub const DEFAULT_WIND_SPEED_MS: f64 = 0.0;
pub const DEFAULT_HUMIDITY_PCT: u8 = 50;
pub const DEFAULT_CLOUDS_PCT: u8 = 20;
pub const DEFAULT_VISIBILITY_M: u32 = 10_000;
pub const DEFAULT_CONDITION_MAIN: &str = "Clear";
pub const DEFAULT_CONDITION_DESCRIPTION: &str = "Clear sky";
pub const DEFAULT_LOCATION_NAME: &str = "Unknown";

const KELVIN_OFFSET: f64 = 273.15;
const MS_TO_KMH: f64 = 3.6;

/// Point-in-time weather snapshot normalized from the provider payload.
///
/// Every field carries a value; the normalizer fills defaults for anything
/// the provider left out. Daylight is not stored: see [`Self::is_daytime`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temp_k: f64,
    pub feels_like_k: f64,
    pub wind_speed_ms: f64,
    pub humidity_pct: u8,
    pub precipitation_mm: f64,
    pub clouds_pct: u8,
    pub visibility_m: u32,
    pub condition_main: String,
    pub condition_description: String,
    pub location_name: String,
    pub country_code: String,
    pub sunrise_epoch: i64,
    pub sunset_epoch: i64,
}

impl WeatherObservation {
    pub fn temp_c(&self) -> f64 {
        kelvin_to_celsius(self.temp_k)
    }

    pub fn feels_like_c(&self) -> f64 {
        kelvin_to_celsius(self.feels_like_k)
    }

    pub fn wind_speed_kmh(&self) -> f64 {
        ms_to_kmh(self.wind_speed_ms)
    }

    /// Whether `now` falls within `[sunrise, sunset]`, bounds inclusive.
    ///
    /// Missing epochs default to 0, so an observation without sun times
    /// reports night for any realistic `now`.
    pub fn is_daytime(&self, now: DateTime<Utc>) -> bool {
        let now = now.timestamp();
        self.sunrise_epoch <= now && now <= self.sunset_epoch
    }
}

impl Default for WeatherObservation {
    fn default() -> Self {
        Self {
            temp_k: DEFAULT_TEMP_K,
            feels_like_k: DEFAULT_TEMP_K,
            wind_speed_ms: DEFAULT_WIND_SPEED_MS,
            humidity_pct: DEFAULT_HUMIDITY_PCT,
            precipitation_mm: 0.0,
            clouds_pct: DEFAULT_CLOUDS_PCT,
            visibility_m: DEFAULT_VISIBILITY_M,
            condition_main: DEFAULT_CONDITION_MAIN.to_string(),
            condition_description: DEFAULT_CONDITION_DESCRIPTION.to_string(),
            location_name: DEFAULT_LOCATION_NAME.to_string(),
            country_code: String::new(),
            sunrise_epoch: 0,
            sunset_epoch: 0,
        }
    }
}

pub fn kelvin_to_celsius(k: f64) -> f64 {
    k - KELVIN_OFFSET
}

pub fn ms_to_kmh(ms: f64) -> f64 {
    ms * MS_TO_KMH
}

/// Round to one decimal place for display.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
