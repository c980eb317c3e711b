//! `SimpleWeather` - current weather for a fixed list of cities
//!
//! This library fetches current weather per city from a weather-by-name
//! HTTP endpoint, one concurrent request per city, and publishes each
//! complete batch sorted by city name. A fixed API credential is appended
//! to every outbound request by a client middleware.

pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod render;
pub mod screen;

// Re-export core types for public API
pub use api::{ApiKeyMiddleware, CityWeatherSource, WeatherApiClient};
pub use config::{ApiConfig, LoggingConfig, SimpleWeatherConfig};
pub use error::SimpleWeatherError;
pub use loader::BatchLoader;
pub use models::{CityWeather, ConditionEntry, CurrentWeatherResponse, MainMetrics, Wind};
pub use render::TerminalSurface;
pub use screen::{DisplaySurface, LoadState, ScreenEvent, WeatherListScreen};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SimpleWeatherError>;
