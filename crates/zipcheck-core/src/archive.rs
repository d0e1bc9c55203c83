//! Zip entry enumeration.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use zip::result::ZipError;

use crate::ValidationError;
use crate::error::Result;

/// Reads the entry names from a zip archive's central directory.
///
/// Names are returned in central-directory order, directory markers
/// (trailing `/`) included. Nothing is decompressed and nothing is written;
/// the archive handle is dropped before this function returns, on every
/// path.
///
/// # Errors
///
/// - [`ValidationError::ArchiveNotFound`] if no file exists at `path`
/// - [`ValidationError::MalformedArchive`] if the file is not a parseable
///   zip container
/// - [`ValidationError::Io`] for any other I/O failure
pub fn entry_names(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => ValidationError::ArchiveNotFound {
            path: path.to_path_buf(),
        },
        _ => ValidationError::Io(err),
    })?;

    let archive = zip::ZipArchive::new(file).map_err(|err| match err {
        ZipError::Io(io_err) => ValidationError::Io(io_err),
        _ => ValidationError::MalformedArchive {
            path: path.to_path_buf(),
        },
    })?;

    Ok(archive.file_names().map(str::to_owned).collect())
}
