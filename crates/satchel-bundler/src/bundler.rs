//! The pack pipeline: load → inline JS → inline CSS → minify → write.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::document::Document;
use crate::error::{MinifyError, PackError, Result};
use crate::minify::{HtmlMinifier, Minifier, MinifyOptions, MinifyOutcome, panic_message};
use crate::output::write_output;
use crate::resolve::{normalize_reference, resolve_reference};

/// Kind of external asset referenced from the entry document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// `<script src=...>`
    Script,
    /// `<link rel="stylesheet" href=...>`
    Stylesheet,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Script => write!(f, "JS"),
            AssetKind::Stylesheet => write!(f, "CSS"),
        }
    }
}

/// An asset whose contents were embedded into the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlinedAsset {
    pub kind: AssetKind,
    /// Reference with leading separators stripped.
    pub reference: String,
    /// File the reference resolved to.
    pub path: PathBuf,
    /// Size of the embedded text in bytes.
    pub bytes: usize,
}

/// A reference left untouched because its file does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingAsset {
    pub kind: AssetKind,
    /// Reference exactly as authored.
    pub reference: String,
}

/// Summary of a single pack run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackReport {
    /// Entry HTML file that was packed.
    pub entry: PathBuf,
    /// Bundle file that was written.
    pub output: PathBuf,
    pub inlined: Vec<InlinedAsset>,
    pub missing: Vec<MissingAsset>,
    pub minify: MinifyOutcome,
    /// Size of the written bundle in bytes.
    pub bytes_written: usize,
}

/// Packs an entry HTML file and the scripts/stylesheets it references into a
/// single self-contained HTML file.
///
/// # Example
///
/// ```no_run
/// use satchel_bundler::{Bundler, MinifyOptions};
///
/// let report = Bundler::new("./sisyphus")
///     .minify(MinifyOptions { keep_comments: true, ..MinifyOptions::default() })
///     .pack("game.html", "bundled/sisyphus.html")?;
///
/// println!("inlined {} assets", report.inlined.len());
/// # Ok::<(), satchel_bundler::PackError>(())
/// ```
pub struct Bundler {
    base_dir: PathBuf,
    minifier: Option<Box<dyn Minifier>>,
}

impl Bundler {
    /// Create a bundler rooted at `base_dir` with default minification.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            minifier: Some(Box::new(HtmlMinifier::default())),
        }
    }

    /// Minify with the default minifier configured by `options`.
    pub fn minify(mut self, options: MinifyOptions) -> Self {
        self.minifier = Some(Box::new(HtmlMinifier::new(options)));
        self
    }

    /// Minify with a custom [`Minifier`].
    pub fn minifier(mut self, minifier: impl Minifier + 'static) -> Self {
        self.minifier = Some(Box::new(minifier));
        self
    }

    /// Write the serialized document without minifying it.
    pub fn no_minify(mut self) -> Self {
        self.minifier = None;
        self
    }

    /// Pack `base_dir/html_file` into `output_file`.
    ///
    /// # Errors
    ///
    /// Fails when the entry file is missing or not UTF-8, when an existing
    /// asset cannot be read as UTF-8, or when the output cannot be written.
    /// Missing assets and minifier failures are not errors.
    pub fn pack(
        &self,
        html_file: impl AsRef<Path>,
        output_file: impl AsRef<Path>,
    ) -> Result<PackReport> {
        let base_dir =
            std::path::absolute(&self.base_dir).unwrap_or_else(|_| self.base_dir.clone());
        let entry = base_dir.join(html_file.as_ref());

        info!("Packaging: {}", entry.display());

        let html = read_entry(&entry)?;
        let document = Document::parse(&html);

        let mut report = PackReport {
            entry,
            output: output_file.as_ref().to_path_buf(),
            inlined: Vec::new(),
            missing: Vec::new(),
            minify: MinifyOutcome::Disabled,
            bytes_written: 0,
        };

        inline_scripts(&document, &base_dir, &mut report)?;
        inline_stylesheets(&document, &base_dir, &mut report)?;

        let serialized = document.serialize()?;
        let (contents, outcome) = self.minify_or_fallback(serialized);

        write_output(&report.output, &contents)?;
        report.minify = outcome;
        report.bytes_written = contents.len();

        info!("Done! Saved to {}", report.output.display());
        Ok(report)
    }

    fn minify_or_fallback(&self, serialized: String) -> (String, MinifyOutcome) {
        let Some(minifier) = &self.minifier else {
            return (serialized, MinifyOutcome::Disabled);
        };

        info!("Minifying...");
        // Embedded JS/CSS minifiers can panic on input they do not understand.
        let result = panic::catch_unwind(AssertUnwindSafe(|| minifier.minify(&serialized)))
            .unwrap_or_else(|payload| {
                Err(MinifyError::Panicked(panic_message(payload.as_ref())))
            });

        match result {
            Ok(minified) => {
                let outcome = MinifyOutcome::Minified {
                    before: serialized.len(),
                    after: minified.len(),
                };
                (minified, outcome)
            }
            Err(e) => {
                warn!("Minification failed (saving unminified): {}", e);
                (serialized, MinifyOutcome::Failed(e))
            }
        }
    }
}

/// Pack `base_dir/html_file` into `output_file` with default options.
///
/// ```no_run
/// satchel_bundler::pack("./sisyphus", "game.html", "bundled/sisyphus.html")?;
/// # Ok::<(), satchel_bundler::PackError>(())
/// ```
pub fn pack(
    base_dir: impl Into<PathBuf>,
    html_file: impl AsRef<Path>,
    output_file: impl AsRef<Path>,
) -> Result<PackReport> {
    Bundler::new(base_dir).pack(html_file, output_file)
}

fn inline_scripts(document: &Document, base_dir: &Path, report: &mut PackReport) -> Result<()> {
    for script in document.script_references() {
        let Some(path) = resolve_reference(base_dir, script.source()) else {
            debug!("Script not found, leaving reference: {}", script.source());
            report.missing.push(MissingAsset {
                kind: AssetKind::Script,
                reference: script.source().to_string(),
            });
            continue;
        };

        let reference = normalize_reference(script.source()).to_string();
        info!("Inlining JS: {}", reference);

        let code = read_asset(&path)?;
        report.inlined.push(InlinedAsset {
            kind: AssetKind::Script,
            reference,
            path,
            bytes: code.len(),
        });
        script.inline(code);
    }
    Ok(())
}

fn inline_stylesheets(
    document: &Document,
    base_dir: &Path,
    report: &mut PackReport,
) -> Result<()> {
    for link in document.stylesheet_references() {
        let Some(path) = resolve_reference(base_dir, link.href()) else {
            debug!("Stylesheet not found, leaving reference: {}", link.href());
            report.missing.push(MissingAsset {
                kind: AssetKind::Stylesheet,
                reference: link.href().to_string(),
            });
            continue;
        };

        let reference = normalize_reference(link.href()).to_string();
        info!("Inlining CSS: {}", reference);

        let css = read_asset(&path)?;
        report.inlined.push(InlinedAsset {
            kind: AssetKind::Stylesheet,
            reference,
            path,
            bytes: css.len(),
        });
        link.replace_with_style(css);
    }
    Ok(())
}

fn read_entry(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => PackError::EntryNotFound(path.to_path_buf()),
        _ => PackError::EntryRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    String::from_utf8(bytes).map_err(|source| PackError::EntryNotUtf8 {
        path: path.to_path_buf(),
        source,
    })
}

fn read_asset(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::InvalidData => PackError::AssetNotUtf8 {
            path: path.to_path_buf(),
        },
        _ => PackError::AssetRead {
            path: path.to_path_buf(),
            source,
        },
    })
}
