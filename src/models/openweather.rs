//! `OpenWeather` wire payload structures
//!
//! Every attribute group is optional here so that partially populated
//! payloads still deserialize; completeness is enforced by the conversion
//! into [`crate::models::CityWeather`], not by serde.

use serde::{Deserialize, Serialize};

/// Current weather response from the weather-by-name endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    /// Canonical city name as reported by the API
    pub name: Option<String>,
    /// Weather conditions (description, icon); usually a single entry
    pub weather: Option<Vec<ConditionEntry>>,
    /// Main metrics (temperature, pressure, humidity)
    pub main: Option<MainMetrics>,
    /// Wind data
    pub wind: Option<Wind>,
    /// Observation time as a unix timestamp (seconds)
    pub dt: Option<i64>,
}

/// One weather condition entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionEntry {
    /// Condition group (e.g. "Clouds", "Rain")
    pub main: String,
    /// Human-readable description (e.g. "scattered clouds")
    pub description: String,
    /// Icon identifier
    pub icon: Option<String>,
}

/// Main weather metrics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MainMetrics {
    /// Temperature in the configured units
    pub temp: f32,
    /// Perceived temperature
    pub feels_like: Option<f32>,
    /// Minimum observed temperature
    pub temp_min: Option<f32>,
    /// Maximum observed temperature
    pub temp_max: Option<f32>,
    /// Atmospheric pressure in hPa
    pub pressure: f32,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
}

/// Wind data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wind {
    /// Wind speed in the configured units
    pub speed: f32,
    /// Wind direction in degrees (0-360, where 0/360 is North)
    pub deg: Option<f32>,
    /// Gust speed
    pub gust: Option<f32>,
}
