//! Error handling for the Satchel CLI.
//!
//! This module provides a hierarchical error type system using `thiserror`:
//! - **Top-level errors** (`CliError`) represent broad categories of failures
//! - **Domain-specific errors** (`ConfigError`, [`PackError`]) carry detail
//! - **Error conversion** is automatic via `#[from]` attributes
//! - **Hints** (`ResultExt`) append a suggested next step to any error
//!
//! Errors are turned into `miette` reports at the top of `main`.
//!
//! # Example
//!
//! ```rust,no_run
//! use satchel_cli::error::{CliError, Result, ResultExt};
//! use std::path::Path;
//!
//! fn require_dir(dir: &Path) -> Result<()> {
//!     if dir.is_dir() {
//!         Ok(())
//!     } else {
//!         Err(CliError::FileNotFound(dir.to_path_buf()))
//!     }
//! }
//!
//! require_dir(Path::new("bundled")).with_hint("Run `satchel build` first")?;
//! # Ok::<(), CliError>(())
//! ```

mod report;

use std::path::PathBuf;
use thiserror::Error;

pub use report::cli_error_to_miette;
pub use satchel_bundler::PackError;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (invalid file, bad values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failures of the pack pipeline
    #[error("Pack error: {0}")]
    Pack(#[from] PackError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Static server errors
    #[error("Server error: {0}")]
    Server(String),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Explicitly requested config file doesn't exist
    #[error("Config file not found: {}\n\nHint: Create a satchel.config.json file or check the --config path", .0.display())]
    NotFound(PathBuf),

    /// Missing required configuration field
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for attaching a hint to an error.
pub trait ResultExt<T> {
    /// Append a hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }
}
