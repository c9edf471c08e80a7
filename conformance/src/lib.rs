//! SFM designer conformance suite.
//!
//! Checks that the catalog, the layout engine, and the exported artifacts
//! meet the guarantees the designer makes to its users.
//!
//! # Conformance Scope
//!
//! | Component | Checks |
//! |-----------|--------|
//! | Catalog | well-formed placements, distinct axis lengths, agreement with an exhaustive search |
//! | Layouts | element counts, canvas bounds, axis table completeness, bit-exact SVG round trip |
//! | Artifacts | SVG root and bounds, `axes.json` shape, HTML page structure |
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = sfm_conformance::run_all(Path::new("public"))?;
//! assert!(report.all_passed());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod svg;
pub mod validators;

use std::path::Path;

use tracing::info;

pub use report::{ConformanceReport, Severity, TestResult};

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Catalog structure and search agreement
/// 2. Every supported layout
/// 3. Artifacts under `artifacts` (warns if the directory is missing)
///
/// # Errors
///
/// Returns an error if a supported request fails to design or an artifact
/// cannot be read.
pub fn run_all(artifacts: &Path) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    report.extend(validators::catalog::validate());
    report.extend(validators::layout::validate()?);
    report.extend(validators::artifacts::validate(artifacts)?);

    info!(
        passed = report.pass_count(),
        warnings = report.warning_count(),
        failed = report.failure_count(),
        "conformance run complete"
    );
    Ok(report)
}
