//! `sfm-solver`: searches for demodulatable reflection placements.
//!
//! **Usage:**
//! ```text
//! sfm-solver [--max-reflections <n>] [--format <rust|json>] [--out <path>]
//! ```
//!
//! Without `--out` the catalog is printed to stdout.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use sfm_solver::{generate, render, Format};
use tracing::info;

/// Output format.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// A Rust `SOLUTIONS` table.
    Rust,
    /// A JSON object keyed by reflection count.
    Json,
}

impl From<OutputFormat> for Format {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Rust => Format::Rust,
            OutputFormat::Json => Format::Json,
        }
    }
}

/// Search for reflection placements with pairwise-distinct axis lengths.
#[derive(Parser)]
#[command(
    name = "sfm-solver",
    about = "Generate the SFM designer solution catalog"
)]
struct Args {
    /// Largest reflection count to search.
    #[arg(long, default_value_t = 6)]
    max_reflections: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Rust)]
    format: OutputFormat,

    /// Output file (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    sfm_clients::init_logging();
    let args = Args::parse();
    if args.max_reflections < 2 {
        bail!("--max-reflections must be at least 2");
    }

    let report = match &args.out {
        Some(path) => {
            let report = generate(args.max_reflections, args.format.into(), path)?;
            info!(path = %path.display(), "catalog written");
            report
        }
        None => {
            let (text, report) = render(args.max_reflections, args.format.into())?;
            print!("{text}");
            report
        }
    };
    info!(
        sizes = report.sizes,
        solutions = report.solutions,
        largest_span = report.largest_span,
        "search complete"
    );
    Ok(())
}
