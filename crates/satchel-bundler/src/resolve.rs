//! Asset reference resolution.
//!
//! References are always resolved against the bundle root, even when they are
//! authored as absolute (`/js/app.js`). Windows-style leading separators are
//! stripped the same way.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Strip leading `/` and `\` characters from an authored reference.
///
/// # Examples
///
/// ```
/// use satchel_bundler::normalize_reference;
///
/// assert_eq!(normalize_reference("/js/app.js"), "js/app.js");
/// assert_eq!(normalize_reference("\\\\css\\main.css"), "css\\main.css");
/// assert_eq!(normalize_reference("lib.js"), "lib.js");
/// ```
pub fn normalize_reference(reference: &str) -> &str {
    reference.trim_start_matches(['/', '\\'])
}

/// Resolve an authored reference to the file it names under `base_dir`.
///
/// Returns `None` when the cleaned path is not an existing regular file, in
/// which case the reference is left as authored.
pub fn resolve_reference(base_dir: &Path, reference: &str) -> Option<PathBuf> {
    let relative = normalize_reference(reference);
    if relative.is_empty() {
        return None;
    }

    let candidate = base_dir.join(relative).clean();
    candidate.is_file().then_some(candidate)
}
