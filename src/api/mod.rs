//! Weather API client for the weather-by-name endpoint
//!
//! This module provides HTTP client functionality for retrieving current
//! weather per city. The fixed API credential is appended to every request
//! by [`ApiKeyMiddleware`]; only the city name is known up front, so each
//! city costs one request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use tracing::{debug, error, instrument, warn};

use crate::config::ApiConfig;
use crate::error::SimpleWeatherError;
use crate::models::{CityWeather, CurrentWeatherResponse};

pub mod credential;

pub use credential::ApiKeyMiddleware;

/// Source of per-city weather; seam between the loader and the HTTP layer
#[async_trait]
pub trait CityWeatherSource: Send + Sync {
    /// Fetch current weather for one city by name
    async fn current_weather(&self, city: &str) -> Result<CityWeather, SimpleWeatherError>;
}

/// Weather API client
pub struct WeatherApiClient {
    /// HTTP client with the credential middleware installed
    http: ClientWithMiddleware,
    /// Base URL for the weather API
    base_url: String,
    /// Measurement units passed to the API
    units: String,
}

impl WeatherApiClient {
    /// Create a new weather API client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self, SimpleWeatherError> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("simpleweather/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                SimpleWeatherError::config(format!("Failed to create HTTP client: {e}"))
            })?;

        let http = ClientBuilder::new(client)
            .with(ApiKeyMiddleware::new(config.key.clone()))
            .build();

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            units: config.units.clone(),
        })
    }
}

#[async_trait]
impl CityWeatherSource for WeatherApiClient {
    #[instrument(skip(self))]
    async fn current_weather(&self, city: &str) -> Result<CityWeather, SimpleWeatherError> {
        if city.trim().is_empty() {
            return Err(SimpleWeatherError::validation("City name must not be empty"));
        }

        let url = format!(
            "{}/weather?q={}&units={}",
            self.base_url,
            urlencoding::encode(city),
            self.units
        );

        debug!("Requesting current weather for '{}'", city);

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!("Request for '{}' failed: {}", city, e);
            SimpleWeatherError::network(format!("Request for '{city}' failed: {e}"))
        })?;

        let status = response.status();
        match status {
            StatusCode::OK => {}
            StatusCode::UNAUTHORIZED => {
                error!("API authentication failed (HTTP 401)");
                return Err(SimpleWeatherError::api(
                    401,
                    "Invalid API key. Please check your weather API key.",
                ));
            }
            StatusCode::NOT_FOUND => {
                warn!("City not found: '{}'", city);
                return Err(SimpleWeatherError::api(
                    404,
                    format!("City not found: {city}"),
                ));
            }
            other => {
                warn!("HTTP error for '{}': {}", city, other);
                return Err(SimpleWeatherError::api(
                    other.as_u16(),
                    format!(
                        "Request for '{}' failed with status {} - {}",
                        city,
                        other,
                        other.canonical_reason().unwrap_or("Unknown error")
                    ),
                ));
            }
        }

        let payload: CurrentWeatherResponse = response.json().await.map_err(|e| {
            warn!("Malformed weather payload for '{}': {}", city, e);
            SimpleWeatherError::incomplete(city, format!("malformed payload: {e}"))
        })?;

        let loaded = CityWeather::from_payload(city, payload)?;
        debug!("Loaded weather for '{}'", loaded.name);
        Ok(loaded)
    }
}
