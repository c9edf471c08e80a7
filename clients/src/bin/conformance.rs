//! `sfm-conformance`: validates the catalog, every layout, and exported artifacts.
//!
//! Runs the complete conformance suite across:
//! - the solution catalog (shape, distinct lengths, agreement with the solver)
//! - every supported layout (elements, bounds, labels, axis table, SVG round trip)
//! - artifacts in the output directory (SVG, `axes.json`, HTML)
//!
//! **Usage:**
//! ```text
//! sfm-conformance [--artifacts <path>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use sfm_conformance::run_all;

/// Run the SFM designer conformance suite.
#[derive(Parser)]
#[command(
    name = "sfm-conformance",
    about = "Validate the SFM designer catalog, layouts, and artifacts"
)]
struct Args {
    /// Path to the generated artifacts directory.
    #[arg(long, default_value = "public")]
    artifacts: PathBuf,
}

fn main() -> Result<()> {
    sfm_clients::init_logging();
    let args = Args::parse();

    let report = run_all(&args.artifacts)?;

    println!("SFM Designer Conformance Report");
    println!("===============================");
    println!();
    println!("{report}");

    let failed = report.failure_count();
    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
