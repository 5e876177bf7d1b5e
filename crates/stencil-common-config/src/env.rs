//! Environment variable handling.

use std::env;
use thiserror::Error;

/// Environment variable errors.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("failed to load .env file: {0}")]
    DotenvError(#[from] dotenvy::Error),
}

/// Environment variable names.
pub mod vars {
    pub const STENCIL_CONFIG: &str = "STENCIL_CONFIG";
    pub const STENCIL_PROJECT_DIR: &str = "STENCIL_PROJECT_DIR";
    pub const STENCIL_LOCALE: &str = "STENCIL_LOCALE";
    pub const STENCIL_LOG_LEVEL: &str = "STENCIL_LOG_LEVEL";
    pub const STENCIL_LOG_FORMAT: &str = "STENCIL_LOG_FORMAT";
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Environment configuration.
pub struct Environment {
    _guard: (),
}

impl Environment {
    /// Load `.env` then `.env.local` from the working directory.
    ///
    /// Missing files are not an error; variables already set win.
    pub fn init() -> Result<Self, EnvError> {
        for file in [".env", ".env.local"] {
            match dotenvy::from_filename(file) {
                Ok(_) => {}
                Err(e) if e.not_found() => {}
                Err(e) => return Err(e.into()),
            }
        }

        Ok(Self { _guard: () })
    }

    /// Get an optional string variable.
    pub fn get(var: &str) -> Option<String> {
        env::var(var).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing() {
        assert!(Environment::get("STENCIL_NONEXISTENT_12345").is_none());
    }

    #[test]
    fn test_init_without_env_files() {
        assert!(Environment::init().is_ok());
    }
}
