//! Terminal UI utilities for status messages, spinners and summaries.
//!
//! Everything here prints to stderr so stdout stays free for piping. The
//! helpers degrade gracefully when stderr is not a terminal.
//!
//! # Examples
//!
//! ```no_run
//! use satchel_cli::ui;
//!
//! ui::init_colors(false);
//!
//! let spinner = ui::Spinner::new("Packing index.html...");
//! spinner.clear();
//!
//! ui::success("Saved bundled/index.html");
//! ui::warning("Minification failed, saved unminified output");
//! ```

mod format;
mod messages;
mod spinner;

pub use format::{format_duration, format_size, print_pack_summary};
pub use messages::{info, success, warning};
pub use spinner::Spinner;

/// Check if running in a CI environment.
///
/// Detects common CI environment variables from GitHub Actions, GitLab CI,
/// CircleCI, and Travis CI.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
}

/// Whether animated output (spinners) makes sense for this process.
pub fn is_interactive() -> bool {
    console::user_attended_stderr() && !is_ci()
}

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on environment and the `--no-color` flag.
///
/// Call once from `main` before printing anything.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    owo_colors::set_override(enabled);
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_ci_vars() {
        unsafe {
            std::env::remove_var("CI");
            std::env::remove_var("GITHUB_ACTIONS");
            std::env::remove_var("GITLAB_CI");
            std::env::remove_var("CIRCLECI");
            std::env::remove_var("TRAVIS");
        }
    }

    #[test]
    #[serial]
    fn test_is_ci_with_ci_var() {
        clear_ci_vars();
        unsafe { std::env::set_var("CI", "true") };
        assert!(is_ci());
        assert!(!is_interactive());
        clear_ci_vars();
    }

    #[test]
    #[serial]
    fn test_is_ci_with_github_actions() {
        clear_ci_vars();
        unsafe { std::env::set_var("GITHUB_ACTIONS", "true") };
        assert!(is_ci());
        clear_ci_vars();
    }

    #[test]
    #[serial]
    fn test_should_use_color_no_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::remove_var("FORCE_COLOR");
        }
        assert!(!should_use_color());
        unsafe { std::env::remove_var("NO_COLOR") };
    }

    #[test]
    #[serial]
    fn test_should_use_color_force_color() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(should_use_color());
        unsafe { std::env::remove_var("FORCE_COLOR") };
    }

    #[test]
    #[serial]
    fn test_no_color_overrides_force_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(!should_use_color());
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::remove_var("FORCE_COLOR");
        }
    }
}
