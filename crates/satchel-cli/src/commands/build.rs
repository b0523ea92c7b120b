//! Build command implementation.
//!
//! Implements `satchel build`: load config, pack the entry with
//! `satchel-bundler`, then report what was inlined.

use crate::cli::BuildArgs;
use crate::config::{ConfigOverrides, SatchelConfig};
use crate::error::Result;
use crate::ui;
use satchel_bundler::{Bundler, PackReport};
use std::time::Instant;

/// Execute the build command.
///
/// 1. Load and validate configuration (CLI > Env > File > Defaults)
/// 2. Pack `root/entry` into `output`
/// 3. Display a pack summary
///
/// # Errors
///
/// Returns errors for invalid configuration, a missing or unreadable entry
/// file, unreadable assets, and output write failures. Missing assets are
/// listed in the summary; a failing minifier is logged by the bundler and the
/// unminified output is kept.
pub async fn execute(args: BuildArgs) -> Result<()> {
    let start_time = Instant::now();

    let overrides = ConfigOverrides::from(&args);
    let config = SatchelConfig::load(&overrides, args.config.as_deref())?;

    let spinner = ui::Spinner::new(&format!("Packing {}...", config.entry));
    let report = match pack(&config) {
        Ok(report) => {
            spinner.clear();
            report
        }
        Err(e) => {
            spinner.fail("Pack failed");
            return Err(e);
        }
    };

    ui::print_pack_summary(&report, start_time.elapsed());

    ui::success(&format!(
        "Saved {} in {}",
        report.output.display(),
        ui::format_duration(start_time.elapsed())
    ));

    Ok(())
}

/// Pack the configured entry. Separate from [`execute`] so callers can inspect
/// the report.
pub fn pack(config: &SatchelConfig) -> Result<PackReport> {
    let bundler = match config.minify.to_options() {
        Some(options) => Bundler::new(&config.root).minify(options),
        None => Bundler::new(&config.root).no_minify(),
    };

    tracing::debug!(
        "Packing {} from {} into {}",
        config.entry,
        config.root.display(),
        config.output.display()
    );

    Ok(bundler.pack(&config.entry, &config.output)?)
}
