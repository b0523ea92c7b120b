//! Command-line interface definition for Satchel.
//!
//! This module defines the CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `satchel build` - Inline scripts and stylesheets into one HTML file
//! - `satchel serve` - Serve a directory of pre-built files over HTTP

mod commands;

use clap::Parser;

pub use commands::{BuildArgs, Command, ServeArgs};

/// Satchel - pack an HTML page and its local assets into a single file
#[derive(Parser, Debug)]
#[command(
    name = "satchel",
    version,
    about = "Pack an HTML page and its local scripts and stylesheets into one file",
    long_about = "Satchel reads an HTML entry file, inlines every local <script src> and\n\
                  <link rel=\"stylesheet\"> it references, minifies the result and writes\n\
                  a single self-contained HTML file. `satchel serve` previews the output."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Only critical errors will be displayed. Useful for CI/CD environments
    /// or when piping output to other tools.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
