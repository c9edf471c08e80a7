//! SFM designer static page generator.
//!
//! Writes one self-contained page for a computed [`Design`]: the parameter
//! list, any advisories, the drawing inline, and the axis table. The drawing
//! and the table are also written on their own so they can be downloaded.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//! use sfm_model::{design, Configuration, LayoutRequest, ModulationParameters};
//!
//! let request = LayoutRequest {
//!     configuration: Configuration::SharedReference,
//!     num_measurements: 2,
//!     axis_separation: 1.0,
//!     solution_index: 0,
//! };
//! let design = design(&request, &ModulationParameters::new(1e9, 1e4)?)?;
//! sfm_website::generate(Path::new("public"), &design)?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Output Structure
//!
//! ```text
//! public/
//!   index.html
//!   interferometer.svg
//!   axes.json
//!   css/style.css
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
pub mod renderer;
pub mod writer;

use std::path::{Path, PathBuf};

use anyhow::Result;
use sfm_model::serializer::json::{table_to_json, AXES_FILE_NAME};
use sfm_model::serializer::svg::{to_svg, SVG_FILE_NAME};
use sfm_model::Design;

use model::Summary;
use renderer::render_page;

/// Generates the page for `design` into `out_dir` and returns the written paths.
///
/// # Errors
///
/// Returns an error if any file cannot be written.
pub fn generate(out_dir: &Path, design: &Design) -> Result<Vec<PathBuf>> {
    let svg = to_svg(&design.layout);
    let mut axes = serde_json::to_string_pretty(&table_to_json(&design.table))?;
    axes.push('\n');
    let summary = Summary::from_design(design);

    let outputs = [
        (out_dir.join(SVG_FILE_NAME), svg.clone()),
        (out_dir.join(AXES_FILE_NAME), axes),
        (out_dir.join("index.html"), render_page(&summary, &svg)),
        (out_dir.join("css").join("style.css"), style_css().to_string()),
    ];
    let mut written = Vec::with_capacity(outputs.len());
    for (path, content) in outputs {
        writer::write(&path, &content)?;
        written.push(path);
    }
    Ok(written)
}

/// Returns the complete CSS stylesheet.
fn style_css() -> &'static str {
    include_str!("../static/css/style.css")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_hides_controls_in_print() {
        let css = style_css();
        assert!(css.contains("@media print"));
        assert!(css.contains(".no-print"));
    }
}
