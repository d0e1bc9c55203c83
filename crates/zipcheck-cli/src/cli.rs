//! CLI argument parsing using clap.
//!
//! Exactly three positional arguments; any other count makes clap print a
//! usage message to stderr and exit with code 2, before any file is opened.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "validate_zip")]
#[command(author, version)]
#[command(about = "Validate that a zip release asset keeps all entries under its slug folder")]
pub struct Cli {
    /// Directory containing the packaged asset
    #[arg(value_name = "BUILD_DIR")]
    pub build_dir: PathBuf,

    /// Required top-level folder name inside the archive
    #[arg(value_name = "SLUG")]
    pub slug: String,

    /// File name of the zip asset within BUILD_DIR
    #[arg(value_name = "ASSET_NAME")]
    pub asset_name: String,
}
