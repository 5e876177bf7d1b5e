//! CLI error handling.

use std::io;
use std::process::ExitCode;

use stencil_common_config::ConfigError;
use stencil_templates::TemplateError;
use thiserror::Error;

use crate::Exit;

/// CLI error type with context for the user
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        hint: Option<String>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("{message}")]
    Template {
        message: String,
        #[source]
        source: TemplateError,
    },

    #[error("{message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("{message}")]
    NotFound {
        message: String,
        resource_type: String,
        resource_name: String,
        suggestions: Vec<String>,
    },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "E001",
            Self::Io { .. } => "E002",
            Self::Template { .. } => "E003",
            Self::Validation { .. } => "E004",
            Self::NotFound { .. } => "E005",
            Self::Other(_) => "E999",
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Numeric exit status
    pub fn exit_status(&self) -> u8 {
        let exit = match self {
            Self::Config { .. } => Exit::ConfigError,
            Self::Io { .. } | Self::Template { .. } => Exit::IoError,
            Self::Validation { .. } | Self::NotFound { .. } => Exit::ValidationError,
            Self::Other(_) => Exit::GeneralError,
        };
        exit as u8
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } => hint.as_deref(),
            Self::NotFound { suggestions, .. } if !suggestions.is_empty() => {
                Some("Similar names are listed below")
            }
            _ => None,
        }
    }

    /// Get suggestions for this error
    pub fn suggestions(&self) -> &[String] {
        match self {
            Self::NotFound { suggestions, .. } => suggestions,
            _ => &[],
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
            hint: None,
        }
    }

    /// Create a validation error for a named argument
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a not found error
    pub fn not_found(resource_type: impl Into<String>, resource_name: impl Into<String>) -> Self {
        Self::not_found_with_suggestions(resource_type, resource_name, Vec::new())
    }

    /// Create a not found error with suggestions
    pub fn not_found_with_suggestions(
        resource_type: impl Into<String>,
        resource_name: impl Into<String>,
        suggestions: Vec<String>,
    ) -> Self {
        let resource_type = resource_type.into();
        let resource_name = resource_name.into();
        Self::NotFound {
            message: format!("{resource_type} not found: {resource_name}"),
            resource_type,
            resource_name,
            suggestions,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(anyhow::anyhow!("JSON serialization failed: {err}"))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config {
            message: format!("Configuration error: {err}"),
            source: Some(Box::new(err)),
            hint: Some("Check .stencil/config.yaml".to_string()),
        }
    }
}

impl From<TemplateError> for CliError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::NotFound(name) => Self::not_found("Template", name),
            TemplateError::Io(source) => Self::Io {
                message: format!("IO error: {source}"),
                source,
            },
            other => Self::Template {
                message: other.to_string(),
                source: other,
            },
        }
    }
}
