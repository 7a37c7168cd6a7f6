//! Error types for the credits roll
//!
//! Covers measurement faults raised while planning the scroll, roster
//! input validation and configuration loading.

use thiserror::Error;

/// Main error type for the credits roll
#[derive(Error, Debug)]
pub enum CreditsError {
    // ===== Measurement Errors =====
    /// The credits container is not present in the document
    #[error("Container element not found: #{0}")]
    ContainerNotFound(String),

    /// The viewport has no usable height
    #[error("Degenerate viewport height: {height}")]
    DegenerateViewport { height: f64 },

    /// A measured height is negative or not a finite number
    #[error("Invalid {what} measurement: {value}")]
    InvalidMeasurement { what: &'static str, value: f64 },

    /// The host refused a measurement or animation request
    #[error("Host error: {0}")]
    Host(String),

    // ===== Input Errors =====
    /// Unknown scroll variant name
    #[error("Unknown scroll variant: {0}")]
    UnknownVariant(String),

    /// Unknown roster category name
    #[error("Unknown credit category: {0}")]
    UnknownCategory(String),

    /// Malformed request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A roster name was empty after trimming
    #[error("Credit name must not be empty")]
    EmptyName,

    // ===== Configuration Errors =====
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    // ===== General Errors =====
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Page template failed to compile or render
    #[error("Template error: {0}")]
    Template(String),
}

impl CreditsError {
    /// Check if this error is a client error (bad input)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CreditsError::DegenerateViewport { .. }
                | CreditsError::InvalidMeasurement { .. }
                | CreditsError::UnknownVariant(_)
                | CreditsError::UnknownCategory(_)
                | CreditsError::InvalidRequest(_)
                | CreditsError::EmptyName
                | CreditsError::InvalidConfig(_)
        )
    }

    /// Get an error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CreditsError::ContainerNotFound(_) => "CONTAINER_NOT_FOUND",
            CreditsError::DegenerateViewport { .. } => "DEGENERATE_VIEWPORT",
            CreditsError::InvalidMeasurement { .. } => "INVALID_MEASUREMENT",
            CreditsError::Host(_) => "HOST_ERROR",
            CreditsError::UnknownVariant(_) => "UNKNOWN_VARIANT",
            CreditsError::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            CreditsError::InvalidRequest(_) => "INVALID_REQUEST",
            CreditsError::EmptyName => "EMPTY_NAME",
            CreditsError::InvalidConfig(_) => "INVALID_CONFIG",
            CreditsError::ConfigNotFound(_) => "CONFIG_NOT_FOUND",
            CreditsError::Io(_) => "IO_ERROR",
            CreditsError::Serialization(_) => "SERIALIZATION_ERROR",
            CreditsError::Template(_) => "TEMPLATE_ERROR",
        }
    }
}

/// Result type alias for credits operations
pub type Result<T> = std::result::Result<T, CreditsError>;

impl From<std::io::Error> for CreditsError {
    fn from(err: std::io::Error) -> Self {
        CreditsError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CreditsError {
    fn from(err: serde_json::Error) -> Self {
        CreditsError::Serialization(err.to_string())
    }
}

impl From<tinytemplate::error::Error> for CreditsError {
    fn from(err: tinytemplate::error::Error) -> Self {
        CreditsError::Template(err.to_string())
    }
}
