//! Formatting utilities for sizes, durations, and pack summaries.

use console::Term;
use owo_colors::{OwoColorize, Stream::Stderr};
use satchel_bundler::{MinifyOutcome, PackReport};
use std::time::Duration;

/// Format file size in human-readable format.
///
/// ```
/// use satchel_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Format duration in human-readable format.
///
/// ```
/// use std::time::Duration;
/// use satchel_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// One line per inlined or skipped asset, then the output size.
fn summary_lines(report: &PackReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.inlined.len() + report.missing.len() + 1);

    for asset in &report.inlined {
        lines.push(format!(
            "{} {} {}",
            asset.kind,
            asset.reference,
            format_size(asset.bytes as u64)
        ));
    }

    for asset in &report.missing {
        lines.push(format!("{} {} (not found, left as-is)", asset.kind, asset.reference));
    }

    let size = match &report.minify {
        MinifyOutcome::Minified { before, after } => format!(
            "{} (minified from {})",
            format_size(*after as u64),
            format_size(*before as u64)
        ),
        MinifyOutcome::Disabled => {
            format!("{} (not minified)", format_size(report.bytes_written as u64))
        }
        MinifyOutcome::Failed(_) => {
            format!("{} (minification failed)", format_size(report.bytes_written as u64))
        }
    };
    lines.push(format!("Total: {}", size));

    lines
}

/// Print a pack summary to stderr.
pub fn print_pack_summary(report: &PackReport, elapsed: Duration) {
    let width = (Term::stderr().size().1 as usize).min(80);
    let lines = summary_lines(report);

    eprintln!("\n{}", "Pack Summary".if_supports_color(Stderr, |t| t.bold()));
    eprintln!("{}", "─".repeat(width));

    if let Some((total, assets)) = lines.split_last() {
        for line in assets {
            eprintln!("  {} {}", "▸".if_supports_color(Stderr, |t| t.blue()), line);
        }
        eprintln!("{}", "─".repeat(width));
        eprintln!(
            "  {} in {}",
            total,
            format_duration(elapsed).if_supports_color(Stderr, |t| t.green())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_bundler::{AssetKind, InlinedAsset, MinifyError, MissingAsset};
    use std::path::PathBuf;

    fn report(minify: MinifyOutcome) -> PackReport {
        PackReport {
            entry: PathBuf::from("site/index.html"),
            output: PathBuf::from("bundled/index.html"),
            inlined: vec![InlinedAsset {
                kind: AssetKind::Script,
                reference: "js/app.js".to_string(),
                path: PathBuf::from("site/js/app.js"),
                bytes: 2048,
            }],
            missing: vec![MissingAsset {
                kind: AssetKind::Stylesheet,
                reference: "/missing.css".to_string(),
            }],
            minify,
            bytes_written: 1500,
        }
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1_572_864), "1.50 MB");
        assert_eq!(format_size(2_147_483_648), "2.00 GB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(0)), "0ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn test_summary_lists_assets() {
        let lines = summary_lines(&report(MinifyOutcome::Minified {
            before: 4096,
            after: 1500,
        }));

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "JS js/app.js 2.00 KB");
        assert_eq!(lines[1], "CSS /missing.css (not found, left as-is)");
        assert_eq!(lines[2], "Total: 1.46 KB (minified from 4.00 KB)");
    }

    #[test]
    fn test_summary_reports_minify_failure() {
        let lines = summary_lines(&report(MinifyOutcome::Failed(MinifyError::InvalidUtf8)));
        assert_eq!(lines.last().unwrap(), "Total: 1.46 KB (minification failed)");

        let lines = summary_lines(&report(MinifyOutcome::Disabled));
        assert_eq!(lines.last().unwrap(), "Total: 1.46 KB (not minified)");
    }

    #[test]
    fn test_print_pack_summary() {
        print_pack_summary(&report(MinifyOutcome::Disabled), Duration::from_millis(12));
    }
}
