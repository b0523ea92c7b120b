//! Error types for satchel-bundler operations.

use std::path::PathBuf;

/// Fatal errors raised by [`crate::pack`].
///
/// Missing referenced assets are not errors; they are left in the document
/// untouched and reported through [`crate::PackReport::missing`].
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    /// The entry HTML file does not exist.
    #[error("Entry file not found: {}", .0.display())]
    EntryNotFound(PathBuf),

    /// The entry HTML file could not be read.
    #[error("Failed to read entry file '{}': {source}", .path.display())]
    EntryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The entry HTML file is not valid UTF-8.
    #[error("Entry file is not valid UTF-8: {}", .path.display())]
    EntryNotUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A referenced asset exists but could not be read.
    #[error("Failed to read asset '{}': {source}", .path.display())]
    AssetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A referenced asset exists but is not valid UTF-8.
    #[error("Asset is not valid UTF-8: {}", .path.display())]
    AssetNotUtf8 { path: PathBuf },

    /// The parsed document could not be serialized back to text.
    #[error("Failed to serialize document: {0}")]
    Serialize(String),

    /// The output file's parent directory could not be created.
    #[error("Failed to create output directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("Failed to write output file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for satchel-bundler operations.
pub type Result<T> = std::result::Result<T, PackError>;

impl miette::Diagnostic for PackError {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            PackError::EntryNotFound(_) => "ENTRY_NOT_FOUND",
            PackError::EntryRead { .. } => "ENTRY_READ",
            PackError::EntryNotUtf8 { .. } => "ENTRY_NOT_UTF8",
            PackError::AssetRead { .. } => "ASSET_READ",
            PackError::AssetNotUtf8 { .. } => "ASSET_NOT_UTF8",
            PackError::Serialize(_) => "SERIALIZE",
            PackError::CreateDir { .. } => "CREATE_DIR",
            PackError::Write { .. } => "WRITE_FAILURE",
        }))
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        let help = match self {
            PackError::EntryNotFound(_) => "Check the entry file name and --root directory",
            PackError::EntryNotUtf8 { .. } | PackError::AssetNotUtf8 { .. } => {
                "Re-save the file with UTF-8 encoding"
            }
            PackError::CreateDir { .. } | PackError::Write { .. } => {
                "Check output directory permissions or choose a different --out path"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// Failure of the minification step.
///
/// Never escapes [`crate::pack`]: the bundler falls back to the unminified
/// document and records the reason in [`crate::MinifyOutcome::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MinifyError {
    /// The minifier panicked while processing the document.
    #[error("minifier panicked: {0}")]
    Panicked(String),

    /// The minifier produced bytes that are not valid UTF-8.
    #[error("minifier produced invalid UTF-8")]
    InvalidUtf8,

    /// Failure reported by a custom [`crate::Minifier`].
    #[error("{0}")]
    Custom(String),
}
