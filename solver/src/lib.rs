//! SFM designer solution search.
//!
//! Finds every demodulatable reflection placement for each reflection count
//! and renders the result as the catalog table compiled into `sfm-model`.
//! Running the search for counts 2 through 6 reproduces that table exactly.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod emit;
pub mod placement;
pub mod search;

use std::path::Path;

use anyhow::Result;

pub use placement::Placement;
pub use search::{find_starting_at, generate_catalog};

/// Output format of [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// A Rust `SOLUTIONS` table.
    Rust,
    /// A JSON object keyed by reflection count.
    Json,
}

/// Report of what was generated.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of reflection counts searched.
    pub sizes: usize,
    /// Total number of placements found.
    pub solutions: usize,
    /// Largest span among all placements.
    pub largest_span: usize,
}

/// Searches reflection counts `2..=max_reflections` and renders the catalog.
///
/// # Errors
///
/// Returns an error if the JSON rendering cannot be serialized.
pub fn render(max_reflections: usize, format: Format) -> Result<(String, GenerationReport)> {
    let catalog = generate_catalog(max_reflections);
    let report = GenerationReport {
        sizes: catalog.len(),
        solutions: catalog.iter().map(|(_, p)| p.len()).sum(),
        largest_span: catalog
            .iter()
            .flat_map(|(_, p)| p.iter().map(Placement::span))
            .max()
            .unwrap_or(0),
    };
    let text = match format {
        Format::Rust => emit::render_rust(&catalog),
        Format::Json => {
            let mut s = serde_json::to_string_pretty(&emit::render_json(&catalog))?;
            s.push('\n');
            s
        }
    };
    Ok((text, report))
}

/// Searches and writes the rendered catalog to `out`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn generate(max_reflections: usize, format: Format, out: &Path) -> Result<GenerationReport> {
    let (text, report) = render(max_reflections, format)?;
    emit::write_file(out, &text)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_the_model_catalog() -> Result<()> {
        let (_, report) = render(6, Format::Rust)?;
        assert_eq!(report.sizes, 5);
        assert_eq!(report.solutions, sfm_model::Catalog::full().solution_count());
        assert_eq!(report.largest_span, 17);
        Ok(())
    }

    #[test]
    fn json_output_ends_with_newline() -> Result<()> {
        let (text, _) = render(3, Format::Json)?;
        assert!(text.ends_with("}\n"));
        Ok(())
    }
}
