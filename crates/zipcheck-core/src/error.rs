//! Error types for zip layout validation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ValidationError`.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors that can occur while inspecting a release asset.
///
/// A layout mismatch is not an error; it is reported through
/// [`LayoutReport`](crate::LayoutReport). These variants cover the cases
/// where the archive cannot be inspected at all.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The asset does not exist at the composed path.
    #[error("Zip file not found: {}", path.display())]
    ArchiveNotFound {
        /// The path that was probed.
        path: PathBuf,
    },

    /// The asset exists but is not a well-formed zip container.
    #[error("Invalid zip file: {}", path.display())]
    MalformedArchive {
        /// The path of the malformed file.
        path: PathBuf,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
