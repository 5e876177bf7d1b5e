//! Stencil CLI library
//!
//! Core library components for the `stencil` binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

use std::process::ExitCode;

pub use error::CliError;

/// Application exit codes
#[repr(u8)]
pub enum Exit {
    Success = 0,
    GeneralError = 1,
    ConfigError = 2,
    IoError = 3,
    ValidationError = 5,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}
