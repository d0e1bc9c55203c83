//! validate_zip - release-pipeline guard that checks a zip asset's
//! top-level layout.
//!
//! Exit codes: 0 = layout valid, 1 = validation failed (mismatch, missing
//! or malformed archive), 2 = usage error.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use zipcheck_core::LayoutReport;
use zipcheck_core::validate_layout;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let report = match validate_layout(&cli.build_dir, &cli.slug, &cli.asset_name) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(1);
        }
    };

    if report.is_pass() {
        println!("{}", success_line(&report));
        ExitCode::SUCCESS
    } else {
        eprintln!("{}", mismatch_line(&report));
        ExitCode::from(1)
    }
}

fn success_line(report: &LayoutReport) -> String {
    format!(
        "Validated {}: entries start with {}/",
        report.asset, report.slug
    )
}

fn mismatch_line(report: &LayoutReport) -> String {
    format!("Top-level folder mismatch in {}", report.asset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zipcheck_core::LayoutStatus;

    fn report(status: LayoutStatus) -> LayoutReport {
        LayoutReport {
            asset: "myapp-1.0.zip".to_string(),
            slug: "myapp".to_string(),
            status,
            total_entries: 2,
            files_checked: 2,
            offenders: Vec::new(),
        }
    }

    #[test]
    fn test_success_line() {
        assert_eq!(
            success_line(&report(LayoutStatus::Pass)),
            "Validated myapp-1.0.zip: entries start with myapp/"
        );
    }

    #[test]
    fn test_mismatch_line() {
        assert_eq!(
            mismatch_line(&report(LayoutStatus::Fail)),
            "Top-level folder mismatch in myapp-1.0.zip"
        );
    }
}
