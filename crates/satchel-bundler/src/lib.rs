//! # satchel-bundler
//!
//! Packs an HTML entry file and the scripts and stylesheets it references into
//! one self-contained, minified HTML file.
//!
//! A pack run is a single linear pass:
//!
//! 1. Parse the entry file with a lenient HTML5 parser
//! 2. Replace every `<script src>` whose file exists with an inline script
//! 3. Replace every `<link rel="stylesheet">` whose file exists with a `<style>`
//! 4. Minify the serialized document, falling back to the unminified text if
//!    the minifier fails
//! 5. Write the result, creating parent directories as needed
//!
//! References to files that do not exist are left exactly as authored.
//!
//! ## Quick Start
//!
//! ```no_run
//! let report = satchel_bundler::pack("./sisyphus", "game.html", "bundled/sisyphus.html")?;
//!
//! for asset in &report.inlined {
//!     println!("inlined {} {}", asset.kind, asset.reference);
//! }
//! # Ok::<(), satchel_bundler::PackError>(())
//! ```
//!
//! ## Logging
//!
//! This crate only emits `tracing` events; install a subscriber to see them.

pub mod bundler;
pub mod document;
pub mod error;
pub mod minify;
pub mod output;
pub mod resolve;

pub use bundler::{AssetKind, Bundler, InlinedAsset, MissingAsset, PackReport, pack};
pub use document::{Document, ScriptReference, StylesheetReference};
pub use error::{MinifyError, PackError, Result};
pub use minify::{HtmlMinifier, Minifier, MinifyOptions, MinifyOutcome};
pub use resolve::{normalize_reference, resolve_reference};
