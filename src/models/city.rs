//! Fully loaded per-city weather model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SimpleWeatherError;
use crate::models::openweather::{ConditionEntry, CurrentWeatherResponse, MainMetrics, Wind};

/// Weather for one city with all three attribute groups present.
///
/// A city counts as fully loaded only when main metrics, conditions, and
/// wind are all populated; the conversion from the wire payload enforces
/// this, so consumers never see a partially loaded entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityWeather {
    /// City name used for display and ordering
    pub name: String,
    /// Main metrics (temperature, pressure, humidity)
    pub main: MainMetrics,
    /// Weather conditions; never empty
    pub conditions: Vec<ConditionEntry>,
    /// Wind data
    pub wind: Wind,
    /// Observation time
    pub observed_at: DateTime<Utc>,
}

impl CityWeather {
    /// Convert a wire payload into a fully loaded city.
    ///
    /// `requested` is the batch entry the fetch was issued for; it is used
    /// as the display name when the payload carries none. A missing or
    /// empty attribute group fails the conversion, which in turn fails the
    /// whole load cycle.
    pub fn from_payload(
        requested: &str,
        payload: CurrentWeatherResponse,
    ) -> Result<Self, SimpleWeatherError> {
        let name = payload
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| requested.to_string());

        let main = payload
            .main
            .ok_or_else(|| SimpleWeatherError::incomplete(&name, "main metrics missing"))?;

        let conditions = payload
            .weather
            .filter(|conditions| !conditions.is_empty())
            .ok_or_else(|| SimpleWeatherError::incomplete(&name, "weather conditions missing"))?;

        let wind = payload
            .wind
            .ok_or_else(|| SimpleWeatherError::incomplete(&name, "wind data missing"))?;

        let observed_at = payload
            .dt
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
            .unwrap_or_else(Utc::now);

        Ok(Self {
            name,
            main,
            conditions,
            wind,
            observed_at,
        })
    }

    /// Primary condition description (e.g. "scattered clouds")
    #[must_use]
    pub fn description(&self) -> &str {
        &self.conditions[0].description
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°", self.main.temp)
    }

    /// Format wind information
    #[must_use]
    pub fn format_wind(&self) -> String {
        match self.wind.deg {
            Some(deg) => {
                let direction = wind_direction_to_cardinal(deg);
                format!("{:.1} m/s {}", self.wind.speed, direction)
            }
            None => format!("{:.1} m/s", self.wind.speed),
        }
    }

    /// Format atmospheric pressure with unit
    #[must_use]
    pub fn format_pressure(&self) -> String {
        format!("{:.0} hPa", self.main.pressure)
    }
}

/// Convert wind direction in degrees to a cardinal direction label
#[must_use]
pub fn wind_direction_to_cardinal(degrees: f32) -> &'static str {
    let degrees = degrees.rem_euclid(360.0);
    match degrees.round() as u16 {
        0..=11 | 349..=360 => "N",
        12..=33 => "NNE",
        34..=56 => "NE",
        57..=78 => "ENE",
        79..=101 => "E",
        102..=123 => "ESE",
        124..=146 => "SE",
        147..=168 => "SSE",
        169..=191 => "S",
        192..=213 => "SSW",
        214..=236 => "SW",
        237..=258 => "WSW",
        259..=281 => "W",
        282..=303 => "WNW",
        304..=326 => "NW",
        327..=348 => "NNW",
        _ => "Unknown",
    }
}
