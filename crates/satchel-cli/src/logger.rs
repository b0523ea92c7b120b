//! Logging infrastructure for the Satchel CLI.
//!
//! Structured logging built on `tracing`. The bundler reports each pack step
//! (`Packaging:`, `Inlining JS:`, `Inlining CSS:`, `Minifying...`, `Done!`)
//! as INFO events, and the static server logs requests through
//! `tower_http::trace`.
//!
//! # Example
//!
//! ```rust,no_run
//! use satchel_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Packing index.html");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str =
    "satchel=debug,satchel_bundler=debug,satchel_cli=debug,tower_http=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "satchel=info,satchel_bundler=info,satchel_cli=info,tower_http=info";

/// Pick the filter for the given flags.
///
/// The level is determined in this order:
/// 1. `--verbose`: DEBUG for satchel crates and request tracing
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`: custom filter
/// 4. Default: INFO for satchel crates
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once at the start of `main`.
///
/// Logs go to stderr. A second call is ignored.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}

/// Check if colored log output should be enabled.
///
/// - `NO_COLOR`: If set, disables colors
/// - `FORCE_COLOR`: If set, forces colors even in non-TTY
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_should_use_colors_respects_force_color() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(should_use_colors());
        unsafe { std::env::remove_var("FORCE_COLOR") };
    }

    #[test]
    #[serial]
    fn test_should_use_colors_respects_no_color() {
        unsafe { std::env::set_var("NO_COLOR", "1") };
        assert!(!should_use_colors());
        unsafe { std::env::remove_var("NO_COLOR") };
    }

    #[test]
    fn test_filters_parse() {
        assert!(build_filter(true, false).to_string().contains("satchel_bundler=debug"));
        assert!(build_filter(false, true).to_string().contains("error"));
    }

    #[test]
    fn test_init_logger_twice() {
        init_logger(false, false, true);
        init_logger(true, false, true);
    }
}
