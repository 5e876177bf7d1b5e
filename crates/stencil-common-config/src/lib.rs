//! Configuration types for Stencil.
//!
//! This crate provides the configuration read from `.stencil/config.yaml`:
//! where user template overrides live, which directories contribute
//! bundled templates, and logging defaults.

pub mod types;
pub mod loader;
pub mod env;

pub use types::*;
pub use loader::*;
pub use env::*;
