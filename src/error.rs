//! Error types and handling for the `DayBrief` application

use thiserror::Error;

/// Main error type for the `DayBrief` application
#[derive(Error, Debug)]
pub enum DayBriefError {
    /// City, country, or category rejected by a service or the catalog
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Access key rejected by an external service
    #[error("Invalid access key: {0}")]
    InvalidCredentials(String),

    /// Any other non-success response from an external service
    #[error("Service error: {0}")]
    Service(String),

    /// Unexpected response shape (JSON or HTML)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Transport-level failure before a response was obtained
    #[error("Network error: {0}")]
    Network(String),

    /// Configuration load or validation failure
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for DayBriefError {
    fn from(err: reqwest::Error) -> Self {
        DayBriefError::Network(err.to_string())
    }
}

impl DayBriefError {
    /// Create a new invalid-input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new invalid-credentials error
    pub fn invalid_credentials<S: Into<String>>(message: S) -> Self {
        Self::InvalidCredentials(message.into())
    }

    /// Create a new service error
    pub fn service<S: Into<String>>(message: S) -> Self {
        Self::Service(message.into())
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            DayBriefError::InvalidInput(message) => {
                format!("Invalid input: {message}")
            }
            DayBriefError::InvalidCredentials(_) => {
                "An external service rejected your access key. Please check your configured keys."
                    .to_string()
            }
            DayBriefError::Service(_) => {
                "An external service returned an unexpected response. Please try again later."
                    .to_string()
            }
            DayBriefError::Parse(_) => {
                "An external service returned data in an unexpected format.".to_string()
            }
            DayBriefError::Network(_) => {
                "Unable to reach external services. Please check your internet connection."
                    .to_string()
            }
            DayBriefError::Config(_) => {
                "Configuration error. Please check your config file and access keys.".to_string()
            }
        }
    }
}

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, DayBriefError>;
