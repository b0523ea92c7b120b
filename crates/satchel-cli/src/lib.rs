//! Satchel CLI - pack an HTML page and its local assets into one file.
//!
//! This crate is the command-line front end for `satchel-bundler`.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`config`] - Layered configuration (defaults, file, env, CLI)
//! - [`commands`] - `build` and `serve` implementations
//! - [`server`] - Static file server for the packed output
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal output helpers
//!
//! # Example
//!
//! ```rust,no_run
//! use satchel_cli::{commands, config::SatchelConfig, error::Result};
//!
//! fn main() -> Result<()> {
//!     let config = SatchelConfig::default();
//!     let report = commands::build::pack(&config)?;
//!     println!("wrote {} bytes", report.bytes_written);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod server;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
