//! Top-level folder layout validation.

use std::path::Path;

use crate::archive::entry_names;
use crate::error::Result;

/// Overall verdict of a layout check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStatus {
    /// Every checked entry sits under the required top-level folder.
    Pass,
    /// At least one entry escapes the required top-level folder.
    Fail,
}

/// Result of validating a release asset's internal layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutReport {
    /// File name of the validated asset.
    pub asset: String,
    /// Required top-level folder name.
    pub slug: String,
    /// Overall verdict.
    pub status: LayoutStatus,
    /// Total entry count, directory markers included.
    pub total_entries: usize,
    /// Number of entries the prefix rule was applied to.
    pub files_checked: usize,
    /// Entry names that escape the required folder, in archive order.
    pub offenders: Vec<String>,
}

impl LayoutReport {
    /// Returns `true` if the asset passed the layout check.
    pub fn is_pass(&self) -> bool {
        self.status == LayoutStatus::Pass
    }
}

/// Validates that every file entry in a zip asset is nested under `<slug>/`.
///
/// The asset is located at `build_dir.join(asset_name)`; the build directory
/// itself is never checked for existence. Directory markers (names ending in
/// `/`) are exempt from the prefix rule, and an archive with no file entries
/// passes vacuously. The required prefix is the literal `slug` followed by
/// `/`, so slug `foo` does not match an entry under `foobar/`.
///
/// The archive is only read; no file is modified.
///
/// # Errors
///
/// Returns error if the asset is missing, is not a well-formed zip
/// container, or cannot be read. A layout mismatch is not an error; it is
/// reported via [`LayoutStatus::Fail`].
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use zipcheck_core::validate_layout;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = validate_layout(Path::new("/out"), "myapp", "myapp-1.0.zip")?;
/// if report.is_pass() {
///     println!("Validated {}: entries start with {}/", report.asset, report.slug);
/// }
/// # Ok(())
/// # }
/// ```
pub fn validate_layout(build_dir: &Path, slug: &str, asset_name: &str) -> Result<LayoutReport> {
    let zip_path = build_dir.join(asset_name);
    let names = entry_names(&zip_path)?;

    let required_prefix = format!("{slug}/");
    let total_entries = names.len();
    let mut files_checked = 0;
    let mut offenders = Vec::new();

    for name in names {
        if name.ends_with('/') {
            continue;
        }
        files_checked += 1;
        if !name.starts_with(&required_prefix) {
            offenders.push(name);
        }
    }

    let status = if offenders.is_empty() {
        LayoutStatus::Pass
    } else {
        LayoutStatus::Fail
    };

    Ok(LayoutReport {
        asset: asset_name.to_owned(),
        slug: slug.to_owned(),
        status,
        total_entries,
        files_checked,
        offenders,
    })
}
