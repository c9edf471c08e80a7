//! `sfm-designer`: lays out an SFM interferometer and writes its page.
//!
//! **Outputs (`public/`):**
//! - `index.html`: parameters, advisories, drawing, and axis table
//! - `interferometer.svg`: the drawing on its own
//! - `axes.json`: the axis table
//! - `css/style.css`
//!
//! **Usage:**
//! ```text
//! sfm-designer [--nu-a <GHz>] [--f-m <kHz>] [--measurements <n>]
//!              [--configuration <shared-reference|unique-references>]
//!              [--separation <m>] [--solution <index>] [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sfm_model::physics::{GHZ_TO_HZ, KHZ_TO_HZ};
use sfm_model::{
    design, recommended_axis_separation, Configuration, LayoutRequest, ModulationParameters,
    Resolved,
};
use sfm_website::model::Summary;
use tracing::info;

/// Lay out a sinusoidal-frequency-modulation interferometer.
#[derive(Parser)]
#[command(
    name = "sfm-designer",
    about = "Lay out an SFM interferometer and write its drawing and axis table"
)]
struct Args {
    /// Optical modulation amplitude in GHz.
    #[arg(long, default_value_t = 1.0)]
    nu_a: f64,

    /// Modulation frequency in kHz.
    #[arg(long, default_value_t = 10.0)]
    f_m: f64,

    /// Number of simultaneous measurements.
    #[arg(long, default_value_t = 1)]
    measurements: usize,

    /// Reference configuration.
    #[arg(long, default_value = "shared-reference")]
    configuration: Configuration,

    /// Axis separation in metres (default: the recommended separation).
    #[arg(long)]
    separation: Option<f64>,

    /// Index of the catalogued solution to use.
    #[arg(long, default_value_t = 0)]
    solution: usize,

    /// Output directory.
    #[arg(long, default_value = "public")]
    out: PathBuf,
}

fn main() -> Result<()> {
    sfm_clients::init_logging();
    let args = Args::parse();

    let modulation = ModulationParameters::new(args.nu_a * GHZ_TO_HZ, args.f_m * KHZ_TO_HZ)
        .context("Invalid modulation parameters")?;
    let recommended = recommended_axis_separation(modulation.nu_a())?;
    let separation = Resolved::resolve(recommended, args.separation);
    info!(
        separation = separation.value(),
        overridden = separation.is_overridden(),
        "axis separation"
    );

    let request = LayoutRequest {
        configuration: args.configuration,
        num_measurements: args.measurements,
        axis_separation: separation.value(),
        solution_index: args.solution,
    };
    let design = design(&request, &modulation).context("Cannot design interferometer")?;
    sfm_website::generate(&args.out, &design)?;

    let summary = Summary::from_design(&design);
    println!("{}", summary.title);
    println!();
    for p in &summary.parameters {
        println!("  {:<30} {} {}", p.name, p.value, p.unit);
    }
    println!();
    println!(
        "  {:<6} {:>6} {:>12} {:>12} {:>16}",
        "axis", "norm", "length (m)", "OPD (m)", "bandwidth (kHz)"
    );
    for row in &summary.axes {
        println!(
            "{} {:<6} {:>6} {:>12} {:>12} {:>16}",
            if row.selected { "*" } else { " " },
            row.label,
            row.normalized_length,
            row.mechanical_length,
            row.optical_path_difference,
            row.bandwidth_khz
        );
    }
    for advisory in &summary.advisories {
        println!();
        println!("Note: {advisory}");
    }
    println!();
    println!("Output: {}", args.out.display());
    Ok(())
}
