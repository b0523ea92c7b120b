//! Writing the bundle to disk.
//!
//! The bundle is first written to a sibling temporary file and then renamed
//! over the target. `rename()` is atomic on the same filesystem, so a reader
//! (for example the static server) sees either the previous bundle or the new
//! one, never a partial file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PackError, Result};

/// Write `contents` to `path`, creating parent directories and overwriting any
/// existing file.
///
/// # Examples
///
/// ```no_run
/// use satchel_bundler::output::write_output;
/// use std::path::Path;
///
/// write_output(Path::new("bundled/index.html"), "<p>hi</p>")?;
/// # Ok::<(), satchel_bundler::PackError>(())
/// ```
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    ensure_parent_dir(path)?;

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, contents).map_err(|source| {
        cleanup_temp_file(&temp_path);
        PackError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;

    fs::rename(&temp_path, path).map_err(|source| {
        cleanup_temp_file(&temp_path);
        PackError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Create the parent directory of `path` (`mkdir -p`). A bare file name has
/// no parent to create.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| PackError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn cleanup_temp_file(temp_path: &Path) {
    // symlink_metadata so a dangling or special-file link is removed too
    if fs::symlink_metadata(temp_path).is_ok_and(|meta| !meta.is_dir()) {
        if let Err(e) = fs::remove_file(temp_path) {
            tracing::warn!(
                "Failed to clean up temporary file '{}': {}",
                temp_path.display(),
                e
            );
        }
    }
}
