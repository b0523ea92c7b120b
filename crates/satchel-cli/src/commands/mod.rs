//! Command implementations for the Satchel CLI.
//!
//! - [`build`] - Pack an HTML entry file into a single file
//! - [`serve`] - Serve a directory of pre-built files
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod build;
pub mod serve;

pub use build::execute as build_execute;
pub use serve::execute as serve_execute;
