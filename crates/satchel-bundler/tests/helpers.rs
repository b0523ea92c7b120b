//! Shared test utilities for satchel-bundler tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use satchel_bundler::{Document, Minifier, MinifyError};
use tempfile::TempDir;

/// A throwaway project directory with an entry file and its assets.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parent directories.
    pub fn file(&self, relative: &str, contents: impl AsRef<[u8]>) -> &Self {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    pub fn out(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }
}

/// A minifier that always fails.
pub fn failing_minifier() -> impl Minifier {
    |_: &str| -> Result<String, MinifyError> { Err(MinifyError::Custom("forced failure".into())) }
}

/// A minifier that panics instead of returning.
pub fn panicking_minifier() -> impl Minifier {
    |_: &str| -> Result<String, MinifyError> { panic!("minifier crashed") }
}

/// Script `src` values remaining in an HTML string.
pub fn script_sources(html: &str) -> Vec<String> {
    Document::parse(html)
        .script_references()
        .iter()
        .map(|s| s.source().to_string())
        .collect()
}

/// Stylesheet `href` values remaining in an HTML string.
pub fn stylesheet_hrefs(html: &str) -> Vec<String> {
    Document::parse(html)
        .stylesheet_references()
        .iter()
        .map(|s| s.href().to_string())
        .collect()
}
