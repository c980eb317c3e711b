//! Configuration management for `SimpleWeather`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::SimpleWeatherError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `SimpleWeather` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleWeatherConfig {
    /// Weather API configuration
    #[serde(default)]
    pub api: ApiConfig,
    /// Ordered city batch loaded on every cycle
    #[serde(default = "default_cities")]
    pub cities: Vec<String>,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Fixed API credential appended to every request as `appid`
    #[serde(default)]
    pub key: String,
    /// Base URL for the weather API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Measurement units passed to the API (metric, imperial, standard)
    #[serde(default = "default_units")]
    pub units: String,
    /// Per-request timeout in seconds; a stuck fetch fails the whole batch
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_cities() -> Vec<String> {
    [
        "Kazan",
        "Moscow",
        "Saint Petersburg",
        "Novosibirsk",
        "Yekaterinburg",
        "Samara",
        "Omsk",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            base_url: default_base_url(),
            units: default_units(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for SimpleWeatherConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            cities: default_cities(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SimpleWeatherConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides, e.g. SIMPLEWEATHER_API__KEY
        builder = builder.add_source(
            Environment::with_prefix("SIMPLEWEATHER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: SimpleWeatherConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("simpleweather").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api()?;
        self.validate_cities()?;
        self.validate_logging()?;
        Ok(())
    }

    /// Validate API credential and endpoint settings
    fn validate_api(&self) -> Result<()> {
        if self.api.key.is_empty() {
            return Err(SimpleWeatherError::config(
                "Weather API key is required. Set it in the config file or via SIMPLEWEATHER_API__KEY.",
            )
            .into());
        }

        if self.api.key.len() < 8 {
            return Err(SimpleWeatherError::config(
                "Weather API key appears to be invalid (too short). Please check your API key.",
            )
            .into());
        }

        if self.api.key.len() > 100 {
            return Err(SimpleWeatherError::config(
                "Weather API key appears to be invalid (too long). Please check your API key.",
            )
            .into());
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(SimpleWeatherError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        let valid_units = ["metric", "imperial", "standard"];
        if !valid_units.contains(&self.api.units.as_str()) {
            return Err(SimpleWeatherError::config(format!(
                "Invalid units '{}'. Must be one of: {}",
                self.api.units,
                valid_units.join(", ")
            ))
            .into());
        }

        if self.api.timeout_seconds == 0 || self.api.timeout_seconds > 300 {
            return Err(SimpleWeatherError::config(
                "Request timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        Ok(())
    }

    /// Validate the city batch
    fn validate_cities(&self) -> Result<()> {
        if self.cities.is_empty() {
            return Err(SimpleWeatherError::config("City list must not be empty").into());
        }

        if self.cities.iter().any(|city| city.trim().is_empty()) {
            return Err(SimpleWeatherError::config("City names must not be blank").into());
        }

        Ok(())
    }

    /// Validate logging settings
    fn validate_logging(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SimpleWeatherError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(SimpleWeatherError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
