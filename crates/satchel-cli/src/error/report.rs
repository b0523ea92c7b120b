//! Miette report conversion for CLI errors.

use crate::error::CliError;
use miette::Report;

/// Convert CliError to miette Report
///
/// Pack errors keep their diagnostic code and help text.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Pack(e) => Report::new(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}
