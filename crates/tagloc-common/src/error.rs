//! Error types and utilities for tagloc

use thiserror::Error;

/// Result type alias for tagloc operations
pub type Result<T> = std::result::Result<T, TaglocError>;

/// Boxed error source carried by the contextual variants
type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for tagloc operations
#[derive(Error, Debug)]
pub enum TaglocError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Message lookup, catalog and translation errors
    #[error("Localization error: {message}")]
    Localization {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Validation errors for templates, catalogs or settings
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl TaglocError {
    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error wrapping its cause
    pub fn localization_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Localization {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// The settings field a validation error concerns, if one was recorded
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let config_error = TaglocError::config("config issue");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("config issue"));

        let validation_error = TaglocError::validation_field("Invalid input", "source_locale");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("Invalid input"));
        assert_eq!(validation_error.field(), Some("source_locale"));
        assert_eq!(TaglocError::validation("no field").field(), None);
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped_error = TaglocError::with_source("Failed to read catalog", io_error);

        assert_eq!(wrapped_error.to_string(), "Failed to read catalog");
        assert!(wrapped_error.source().is_some());

        let config_source_error = TaglocError::config_with_source(
            "Config loading failed",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );
        assert!(config_source_error.to_string().contains("Configuration error"));
        assert!(config_source_error.source().is_some());

        let localization_error = TaglocError::localization_with_source(
            "Catalog rejected",
            io::Error::new(io::ErrorKind::InvalidData, "bad"),
        );
        assert_eq!(localization_error.to_string(), "Localization error: Catalog rejected");
        assert!(localization_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let tagloc_error: TaglocError = io_error.into();

        assert!(tagloc_error.to_string().contains("I/O error"));
        assert!(tagloc_error.source().is_some());
    }

    #[test]
    fn test_serde_error_conversion() {
        let invalid_json = r#"{"invalid": json}"#;
        let serde_error = serde_json::from_str::<serde_json::Value>(invalid_json).unwrap_err();
        let tagloc_error: TaglocError = serde_error.into();

        assert!(tagloc_error.to_string().contains("Serialization error"));
    }
}
