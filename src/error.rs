//! Error types and handling for the `pogoda-web` service

use thiserror::Error;

/// Main error type for the `pogoda-web` service
#[derive(Error, Debug)]
pub enum PogodaError {
    /// Lookup of a key that is not in the city directory
    #[error("Unknown city: {key}")]
    CityNotFound { key: String },

    /// Failure reaching the weather provider (DNS, connect, read)
    #[error("Weather provider request failed: {message}")]
    Transport { message: String },

    /// Provider payload did not have the expected shape
    #[error("Unexpected provider response: {message}")]
    Extraction { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl PogodaError {
    /// Create a new city-not-found error
    pub fn city_not_found<S: Into<String>>(key: S) -> Self {
        Self::CityNotFound { key: key.into() }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new extraction error
    pub fn extraction<S: Into<String>>(message: S) -> Self {
        Self::Extraction {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get the client-visible error message.
    ///
    /// Transport and extraction failures keep their cause detail
    /// server-side; the client only sees a fixed category message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PogodaError::CityNotFound { .. } => "City not found".to_string(),
            PogodaError::Transport { .. } => "Failed to fetch weather".to_string(),
            PogodaError::Extraction { .. } => "Failed to parse response".to_string(),
            PogodaError::Config { .. } => {
                "Configuration error. Please check the service environment.".to_string()
            }
            PogodaError::Io { .. } => "Internal I/O error".to_string(),
        }
    }
}

impl From<reqwest::Error> for PogodaError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let not_found = PogodaError::city_not_found("atlantis");
        assert!(matches!(not_found, PogodaError::CityNotFound { .. }));

        let transport = PogodaError::transport("connection refused");
        assert!(matches!(transport, PogodaError::Transport { .. }));

        let extraction = PogodaError::extraction("missing current_weather");
        assert!(matches!(extraction, PogodaError::Extraction { .. }));
    }

    #[test]
    fn test_user_messages_hide_cause_detail() {
        let transport = PogodaError::transport("dns error: provider.invalid");
        assert_eq!(transport.user_message(), "Failed to fetch weather");
        assert!(!transport.user_message().contains("provider.invalid"));

        let extraction = PogodaError::extraction("hourly.relative_humidity_2m missing");
        assert_eq!(extraction.user_message(), "Failed to parse response");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PogodaError = io_err.into();
        assert!(matches!(err, PogodaError::Io { .. }));
    }
}
