pub mod openweathermap;

pub use openweathermap::{
    AirPollutionPayload, ObservationSource, OpenWeatherMapClient, WeatherPayload,
};
