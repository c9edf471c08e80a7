//! Layout validator.
//!
//! Designs every supported request (each configuration, each catalogued
//! measurement count, each solution) and checks:
//! - element counts per kind match the configuration
//! - every key point lies on the canvas
//! - reflection letters run in alphabet order and motion labels name the
//!   measurement axes
//! - the axis table has `C(n, 2)` rows, one selected per measurement
//! - designing the same request again gives the same design
//! - the SVG export re-parses to the same kinds and bit-identical anchors

use std::collections::HashSet;

use anyhow::Result;
use sfm_model::serializer::svg::to_svg;
use sfm_model::{
    design, measurement_axes, reflection_count, Catalog, Configuration, Design, LabelRole,
    LayoutRequest, ModulationParameters, Shape, ALPHABET,
};
use tracing::debug;

use crate::report::{ConformanceReport, TestResult};
use crate::svg;

/// Axis separation used for every designed request (m).
pub const AXIS_SEPARATION: f64 = 1.0;

/// Designs every supported request under `modulation`.
///
/// # Errors
///
/// Returns an error if a supported request fails to design.
pub fn supported_designs(modulation: &ModulationParameters) -> Result<Vec<Design>> {
    let catalog = Catalog::full();
    let mut designs = Vec::new();
    for configuration in Configuration::ALL {
        for n in 1..=catalog.max_measurements(configuration) {
            let reflections = reflection_count(configuration, n)?;
            for solution in catalog.solutions(reflections)? {
                let request = LayoutRequest {
                    configuration,
                    num_measurements: n,
                    axis_separation: AXIS_SEPARATION,
                    solution_index: solution.index,
                };
                designs.push(design(&request, modulation)?);
            }
        }
    }
    Ok(designs)
}

/// Validates every supported layout.
///
/// # Errors
///
/// Returns an error if the default modulation is rejected or a supported
/// request fails to design.
pub fn validate() -> Result<ConformanceReport> {
    let modulation = ModulationParameters::new(1e9, 1e4)?;
    let designs = supported_designs(&modulation)?;
    debug!(designs = designs.len(), "validating layouts");

    let mut counts = Vec::new();
    let mut bounds = Vec::new();
    let mut labels = Vec::new();
    let mut tables = Vec::new();
    let mut repeat = Vec::new();
    let mut round_trip = Vec::new();
    for d in &designs {
        let tag = format!(
            "{} n={} {}",
            d.request.configuration, d.request.num_measurements, d.solution
        );
        counts.extend(check_counts(d).into_iter().map(|i| format!("{tag}: {i}")));
        bounds.extend(check_bounds(d).into_iter().map(|i| format!("{tag}: {i}")));
        labels.extend(check_labels(d).into_iter().map(|i| format!("{tag}: {i}")));
        tables.extend(check_table(d).into_iter().map(|i| format!("{tag}: {i}")));
        match design(&d.request, &d.modulation) {
            Ok(again) if again == *d => {}
            Ok(_) => repeat.push(format!("{tag}: second run differs")),
            Err(e) => repeat.push(format!("{tag}: second run failed: {e}")),
        }
        round_trip.extend(check_round_trip(d).into_iter().map(|i| format!("{tag}: {i}")));
    }

    let total = designs.len();
    let mut report = ConformanceReport::new();
    report.push(TestResult::from_issues(
        "layout/elements",
        format!("All {total} layouts have the expected elements"),
        "Layouts with unexpected element counts",
        counts,
    ));
    report.push(TestResult::from_issues(
        "layout/bounds",
        format!("All {total} layouts fit their canvas"),
        "Elements outside the canvas",
        bounds,
    ));
    report.push(TestResult::from_issues(
        "layout/labels",
        format!("All {total} layouts label reflections and axes in order"),
        "Label order issues",
        labels,
    ));
    report.push(TestResult::from_issues(
        "layout/idempotence",
        format!("All {total} designs are reproducible"),
        "Designs that changed between runs",
        repeat,
    ));
    report.push(TestResult::from_issues(
        "layout/table",
        format!("All {total} axis tables are complete and demodulatable"),
        "Axis table issues",
        tables,
    ));
    report.push(TestResult::from_issues(
        "layout/svg",
        format!("All {total} SVG exports re-parse to identical positions"),
        "SVG round-trip mismatches",
        round_trip,
    ));
    Ok(report)
}

/// Element-count issues of one design.
pub fn check_counts(d: &Design) -> Vec<String> {
    let n = d.request.num_measurements;
    let inline = match d.request.configuration {
        Configuration::SharedReference => 1,
        Configuration::UniqueReferences => n,
    };
    let labels = |role: LabelRole| {
        d.layout
            .elements
            .iter()
            .filter(|e| matches!(&e.shape, Shape::Label { role: r, .. } if *r == role))
            .count()
    };
    let expected = [
        ("fibre", n + 1),
        ("beam", n),
        ("coupler", 1),
        ("collimator", n),
        ("retroreflector", n),
        ("inline-reflector", inline),
        ("motion", n),
    ];
    let mut issues: Vec<String> = expected
        .iter()
        .filter_map(|(kind, want)| {
            let got = d.layout.of_kind(kind).count();
            (got != *want).then(|| format!("{got} {kind} elements, expected {want}"))
        })
        .collect();
    if labels(LabelRole::Reflection) != d.reflections {
        issues.push(format!(
            "{} reflection labels for {} reflections",
            labels(LabelRole::Reflection),
            d.reflections
        ));
    }
    if labels(LabelRole::Motion) != n {
        issues.push(format!("{} motion labels for {n} measurements", labels(LabelRole::Motion)));
    }
    issues
}

/// Key points of one design that fall off its canvas.
pub fn check_bounds(d: &Design) -> Vec<String> {
    d.layout
        .elements
        .iter()
        .flat_map(|e| e.shape.key_points().into_iter().map(move |p| (e.shape.kind(), p)))
        .filter(|(_, p)| !d.layout.canvas.contains(*p))
        .map(|(kind, p)| {
            format!(
                "{kind} at ({}, {}) outside {}x{}",
                p.x, p.y, d.layout.canvas.width, d.layout.canvas.height
            )
        })
        .collect()
}

/// Label-order issues of one design.
pub fn check_labels(d: &Design) -> Vec<String> {
    let texts = |role: LabelRole| -> Vec<&str> {
        d.layout
            .elements
            .iter()
            .filter_map(|e| match &e.shape {
                Shape::Label { text, role: r, .. } if *r == role => Some(text.as_str()),
                _ => None,
            })
            .collect()
    };
    let mut issues = Vec::new();
    let letters: Vec<String> = texts(LabelRole::Reflection)
        .into_iter()
        .map(str::to_string)
        .collect();
    let expected: Vec<String> = ALPHABET
        .iter()
        .take(d.reflections)
        .map(char::to_string)
        .collect();
    if letters != expected {
        issues.push(format!("reflection letters {letters:?}, expected {expected:?}"));
    }
    let axes = measurement_axes(d.request.configuration, d.request.num_measurements);
    for (text, axis) in texts(LabelRole::Motion).into_iter().zip(&axes) {
        match axis.label() {
            Ok(name) if text.starts_with(&format!("{name}: ")) => {}
            Ok(name) => issues.push(format!("motion label {text:?} does not name {name}")),
            Err(e) => issues.push(format!("axis {axis}: {e}")),
        }
    }
    issues
}

/// Axis-table issues of one design.
pub fn check_table(d: &Design) -> Vec<String> {
    let mut issues = Vec::new();
    let r = d.reflections;
    if d.table.rows.len() != r * (r - 1) / 2 {
        issues.push(format!("{} rows for {r} reflections", d.table.rows.len()));
    }
    let selected = d.table.selected().count();
    if selected != d.request.num_measurements {
        issues.push(format!(
            "{selected} selected rows for {} measurements",
            d.request.num_measurements
        ));
    }
    let mut lengths = HashSet::new();
    for row in &d.table.rows {
        if !lengths.insert(row.normalized_length) {
            issues.push(format!("{} repeats length {}", row.label, row.normalized_length));
        }
    }
    issues
}

/// Mismatches between a design's scene and its re-parsed SVG export.
pub fn check_round_trip(d: &Design) -> Vec<String> {
    let text = to_svg(&d.layout);
    let doc = match svg::parse(&text) {
        Ok(doc) => doc,
        Err(e) => return vec![format!("export does not parse: {e:#}")],
    };
    let mut issues = Vec::new();
    if doc.view_box != (0.0, 0.0, d.layout.canvas.width, d.layout.canvas.height) {
        issues.push(format!("viewBox {:?} differs from canvas", doc.view_box));
    }
    if doc.elements.len() != d.layout.elements.len() {
        issues.push(format!(
            "{} elements exported, {} in scene",
            doc.elements.len(),
            d.layout.elements.len()
        ));
    }
    for (index, (parsed, element)) in doc.elements.iter().zip(&d.layout.elements).enumerate() {
        let kind = element.shape.kind();
        let anchor = element.shape.anchor();
        if parsed.kind != kind {
            issues.push(format!("element {index}: kind {} != {kind}", parsed.kind));
        }
        if parsed.anchor.x.to_bits() != anchor.x.to_bits()
            || parsed.anchor.y.to_bits() != anchor.y.to_bits()
        {
            issues.push(format!(
                "element {index} ({kind}): anchor {:?} != {:?}",
                parsed.anchor, anchor
            ));
        }
        if let Shape::Label { text, .. } = &element.shape {
            if parsed.text.as_deref() != Some(text.as_str()) {
                issues.push(format!("element {index}: text {:?} != {text:?}", parsed.text));
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_layout_passes() -> Result<()> {
        let report = validate()?;
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "{failures:#?}");
        Ok(())
    }

    #[test]
    fn supported_designs_cover_the_catalog() -> Result<()> {
        let designs = supported_designs(&ModulationParameters::new(1e9, 1e4)?)?;
        // Shared: reflections 2..=6 give 1+2+2+4+8 placements.
        // Unique: reflections 2, 4, 6 give 1+2+8.
        assert_eq!(designs.len(), 17 + 11);
        Ok(())
    }
}
