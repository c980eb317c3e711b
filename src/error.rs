//! Error types and handling for `SimpleWeather`

use thiserror::Error;

/// Main error type for the `SimpleWeather` application
#[derive(Error, Debug)]
pub enum SimpleWeatherError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Transport-level failures (connect, timeout, body read)
    #[error("Network error: {message}")]
    Network { message: String },

    /// Non-success HTTP status from the weather endpoint
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Payload deserialized but one of the required attribute groups
    /// (main metrics, conditions, wind) was missing or empty
    #[error("Incomplete weather payload for {city}: {detail}")]
    IncompletePayload { city: String, detail: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SimpleWeatherError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new API error with the HTTP status that caused it
    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a new incomplete-payload error
    pub fn incomplete<C: Into<String>, D: Into<String>>(city: C, detail: D) -> Self {
        Self::IncompletePayload {
            city: city.into(),
            detail: detail.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message.
    ///
    /// All load-cycle failures (transport, HTTP status, incomplete payload)
    /// collapse into the single "Error loading weather" notice; the cause is
    /// only visible in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SimpleWeatherError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            SimpleWeatherError::Network { .. }
            | SimpleWeatherError::Api { .. }
            | SimpleWeatherError::IncompletePayload { .. } => "Error loading weather".to_string(),
            SimpleWeatherError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            SimpleWeatherError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = SimpleWeatherError::config("missing API key");
        assert!(matches!(config_err, SimpleWeatherError::Config { .. }));

        let network_err = SimpleWeatherError::network("connection refused");
        assert!(matches!(network_err, SimpleWeatherError::Network { .. }));

        let api_err = SimpleWeatherError::api(503, "service unavailable");
        assert!(matches!(api_err, SimpleWeatherError::Api { status: 503, .. }));

        let incomplete_err = SimpleWeatherError::incomplete("Kazan", "wind data missing");
        assert!(matches!(
            incomplete_err,
            SimpleWeatherError::IncompletePayload { .. }
        ));
    }

    #[test]
    fn test_load_failures_collapse_to_one_notice() {
        let network_err = SimpleWeatherError::network("timed out");
        let api_err = SimpleWeatherError::api(500, "internal error");
        let incomplete_err = SimpleWeatherError::incomplete("Moscow", "main metrics missing");

        assert_eq!(network_err.user_message(), "Error loading weather");
        assert_eq!(api_err.user_message(), "Error loading weather");
        assert_eq!(incomplete_err.user_message(), "Error loading weather");
    }

    #[test]
    fn test_user_messages() {
        let config_err = SimpleWeatherError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = SimpleWeatherError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let weather_err: SimpleWeatherError = io_err.into();
        assert!(matches!(weather_err, SimpleWeatherError::Io { .. }));
    }
}
