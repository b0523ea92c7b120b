//! Spinner shown while a pack run is in progress.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream::Stderr};
use std::time::Duration;

/// Spinner for work without a known length.
///
/// When stderr is not attended the spinner stays hidden, so piped output and
/// CI logs only see the final messages printed elsewhere.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Create and start a new spinner.
    pub fn new(message: &str) -> Self {
        let pb = if super::is_interactive() {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };

        // The template is static; fall back to the default style if it is ever rejected.
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["◐", "◓", "◑", "◒", "●"]);
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    /// Finish with a red X.
    pub fn fail(&self, message: &str) {
        self.pb.finish_with_message(format!(
            "{} {}",
            "✗".if_supports_color(Stderr, |t| t.red()),
            message
        ));
    }

    /// Remove the spinner line without printing anything.
    pub fn clear(&self) {
        self.pb.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_fail_and_clear() {
        Spinner::new("Packing").fail("Failed");
        Spinner::new("Packing").clear();
    }
}
