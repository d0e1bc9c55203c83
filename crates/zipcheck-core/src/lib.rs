//! Zip release-asset layout validation library.
//!
//! `zipcheck-core` checks that every file entry inside a packaged zip asset
//! is nested under a required top-level folder (the "slug"). It is the guard
//! rail a release pipeline runs after packaging and before publishing: the
//! archive is only listed, never extracted or modified.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use zipcheck_core::validate_layout;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = validate_layout(Path::new("/out"), "myapp", "myapp-1.0.zip")?;
//! if !report.is_pass() {
//!     eprintln!("Top-level folder mismatch in {}", report.asset);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod archive;
pub mod error;
pub mod layout;

// Re-export main API types
pub use error::Result;
pub use error::ValidationError;
pub use layout::LayoutReport;
pub use layout::LayoutStatus;
pub use layout::validate_layout;
