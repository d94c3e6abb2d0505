use crate::datasources::{AirPollutionPayload, WeatherPayload};
use crate::error::{PetWalkError, Result};
use crate::models::{
    Pollutant, PollutantReading, WeatherObservation, DEFAULT_CLOUDS_PCT,
    DEFAULT_CONDITION_DESCRIPTION, DEFAULT_CONDITION_MAIN, DEFAULT_HUMIDITY_PCT,
    DEFAULT_LOCATION_NAME, DEFAULT_TEMP_K, DEFAULT_VISIBILITY_M, DEFAULT_WIND_SPEED_MS,
};

/// Build a [`WeatherObservation`] from a raw current-weather payload.
///
/// Fails only when the provider status is not a success; every missing
/// field falls back to its default.
pub fn normalize_weather(payload: &WeatherPayload) -> Result<WeatherObservation> {
    let succeeded = payload.cod.as_ref().is_some_and(|cod| cod.is_success());
    if !succeeded {
        let message = payload
            .message
            .clone()
            .unwrap_or_else(|| "unknown error".to_string());
        tracing::warn!("Error fetching weather data: {}", message);
        return Err(PetWalkError::Upstream { message });
    }

    let main = payload.main.clone().unwrap_or_default();
    let sys = payload.sys.clone().unwrap_or_default();
    let condition = payload
        .weather
        .as_ref()
        .and_then(|w| w.first())
        .cloned()
        .unwrap_or_default();

    let rain_mm = payload.rain.as_ref().and_then(|r| r.one_hour).unwrap_or(0.0);
    let snow_mm = payload.snow.as_ref().and_then(|s| s.one_hour).unwrap_or(0.0);

    Ok(WeatherObservation {
        temp_k: main.temp.unwrap_or(DEFAULT_TEMP_K),
        feels_like_k: main.feels_like.unwrap_or(DEFAULT_TEMP_K),
        wind_speed_ms: non_negative(
            payload.wind.as_ref().and_then(|w| w.speed),
            DEFAULT_WIND_SPEED_MS,
        ),
        humidity_pct: percent(main.humidity, DEFAULT_HUMIDITY_PCT),
        precipitation_mm: rain_mm.max(0.0) + snow_mm.max(0.0),
        clouds_pct: percent(payload.clouds.as_ref().and_then(|c| c.all), DEFAULT_CLOUDS_PCT),
        visibility_m: payload
            .visibility
            .map(|v| v.round().clamp(0.0, u32::MAX as f64) as u32)
            .unwrap_or(DEFAULT_VISIBILITY_M),
        condition_main: condition
            .main
            .unwrap_or_else(|| DEFAULT_CONDITION_MAIN.to_string()),
        condition_description: condition
            .description
            .unwrap_or_else(|| DEFAULT_CONDITION_DESCRIPTION.to_string()),
        location_name: payload
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCATION_NAME.to_string()),
        country_code: sys.country.unwrap_or_default(),
        sunrise_epoch: sys.sunrise.map(|t| t as i64).unwrap_or(0),
        sunset_epoch: sys.sunset.map(|t| t as i64).unwrap_or(0),
    })
}

/// Build a [`PollutantReading`] from the first entry of an air-pollution
/// payload.
///
/// Never fails. A missing payload, an empty list, or a missing pollutant
/// reads as clean air (0 µg/m³), and so does a pollutant whose value is
/// not a number.
pub fn normalize_air_pollution(payload: Option<&AirPollutionPayload>) -> PollutantReading {
    let entry = payload
        .and_then(|p| p.list.as_ref())
        .and_then(|list| list.first())
        .filter(|entry| entry.components.is_some());

    let Some(entry) = entry else {
        tracing::warn!("Air quality data missing. Assuming good air quality.");
        return PollutantReading::clean();
    };

    Pollutant::ALL
        .iter()
        .fold(PollutantReading::clean(), |reading, pollutant| {
            let concentration = entry.component(pollutant.symbol()).unwrap_or(0.0);
            reading.with(*pollutant, concentration)
        })
}

fn non_negative(value: Option<f64>, default: f64) -> f64 {
    value.map(|v| v.max(0.0)).unwrap_or(default)
}

fn percent(value: Option<f64>, default: u8) -> u8 {
    value
        .map(|v| v.round().clamp(0.0, 100.0) as u8)
        .unwrap_or(default)
}
