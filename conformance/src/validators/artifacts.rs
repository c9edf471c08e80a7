//! Exported artifact validator.
//!
//! Walks an output directory and checks:
//! - every `.svg` has a namespaced root with a `viewBox`, and every
//!   positioned element lies inside it
//! - every `axes.json` is an array of `C(n, 2)` rows with the expected keys
//! - every `.html` page has a title, a language, and an inline drawing

use std::path::Path;

use anyhow::Result;
use serde_json::Value;
use walkdir::WalkDir;

use crate::report::{ConformanceReport, TestResult};
use crate::svg;

/// Keys every `axes.json` row must carry.
pub const AXIS_ROW_KEYS: [&str; 8] = [
    "i",
    "j",
    "label",
    "normalizedLength",
    "mechanicalLength",
    "opticalPathDifference",
    "bandwidth",
    "selected",
];

/// Validates every artifact under `artifacts`.
///
/// # Errors
///
/// Returns an error if an artifact cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if !artifacts.exists() {
        report.push(TestResult::warn(
            "artifacts",
            format!(
                "Artifacts directory {} not found, skipping artifact validation",
                artifacts.display()
            ),
        ));
        return Ok(report);
    }

    let mut svg_issues = Vec::new();
    let mut json_issues = Vec::new();
    let mut html_issues = Vec::new();
    let (mut svgs, mut tables, mut pages) = (0u32, 0u32, 0u32);

    for entry in WalkDir::new(artifacts)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        let rel = path
            .strip_prefix(artifacts)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();
        let extension = path.extension().and_then(|x| x.to_str());
        match extension {
            Some("svg") => {
                svgs += 1;
                svg_issues.extend(check_svg(&rel, &std::fs::read_to_string(path)?));
            }
            Some("json") if path.file_name().is_some_and(|n| n == "axes.json") => {
                tables += 1;
                json_issues.extend(check_axes_json(&rel, &std::fs::read_to_string(path)?));
            }
            Some("html") => {
                pages += 1;
                html_issues.extend(check_html(&rel, &std::fs::read_to_string(path)?));
            }
            _ => {}
        }
    }

    push_group(&mut report, "artifacts/svg", "SVG drawings", svgs, svg_issues);
    push_group(&mut report, "artifacts/axes", "axis tables", tables, json_issues);
    push_group(&mut report, "artifacts/html", "HTML pages", pages, html_issues);
    Ok(report)
}

fn push_group(
    report: &mut ConformanceReport,
    validator: &str,
    noun: &str,
    checked: u32,
    issues: Vec<String>,
) {
    if checked == 0 {
        report.push(TestResult::warn(validator, format!("No {noun} found")));
        return;
    }
    report.push(TestResult::from_issues(
        validator,
        format!("All {checked} {noun} are valid"),
        format!("Issues across {checked} {noun}"),
        issues,
    ));
}

/// Issues with one SVG document.
pub fn check_svg(path: &str, content: &str) -> Vec<String> {
    let doc = match svg::parse(content) {
        Ok(doc) => doc,
        Err(e) => return vec![format!("{path}: {e:#}")],
    };
    let mut issues = Vec::new();
    if doc.elements.is_empty() {
        issues.push(format!("{path}: no elements"));
    }
    for (index, element) in doc.elements.iter().enumerate() {
        for p in std::iter::once(element.anchor).chain(element.end) {
            if !doc.contains(p) {
                issues.push(format!(
                    "{path}: element {index} ({}) at ({}, {}) is outside the viewBox",
                    element.kind, p.x, p.y
                ));
            }
        }
    }
    issues
}

/// Issues with one `axes.json` document.
pub fn check_axes_json(path: &str, content: &str) -> Vec<String> {
    let value: Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(e) => return vec![format!("{path}: invalid JSON: {e}")],
    };
    let Some(rows) = value.as_array() else {
        return vec![format!("{path}: top level is not an array")];
    };
    let mut issues = Vec::new();
    if !is_triangular(rows.len()) {
        issues.push(format!("{path}: {} rows is not C(n, 2) for any n", rows.len()));
    }
    for (index, row) in rows.iter().enumerate() {
        for key in AXIS_ROW_KEYS {
            if row.get(key).is_none() {
                issues.push(format!("{path}: row {index} lacks {key:?}"));
            }
        }
    }
    if !rows.iter().any(|r| r["selected"] == Value::Bool(true)) {
        issues.push(format!("{path}: no selected axis"));
    }
    issues
}

/// Issues with one HTML page.
pub fn check_html(path: &str, content: &str) -> Vec<String> {
    let lower = content.to_lowercase();
    [
        ("<title", "missing <title> element"),
        ("lang=", "<html> missing lang attribute"),
        ("<main", "missing <main> element"),
        ("<svg", "missing inline drawing"),
    ]
    .iter()
    .filter(|(needle, _)| !lower.contains(needle))
    .map(|(_, problem)| format!("{path}: {problem}"))
    .collect()
}

/// Whether `k` equals `n * (n - 1) / 2` for some `n >= 2`.
fn is_triangular(k: usize) -> bool {
    (2..)
        .map(|n: usize| n * (n - 1) / 2)
        .take_while(|t| *t <= k)
        .any(|t| t == k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangular_counts() {
        let found: Vec<usize> = (0..30).filter(|k| is_triangular(*k)).collect();
        assert_eq!(found, vec![1, 3, 6, 10, 15, 21, 28]);
    }

    #[test]
    fn element_outside_view_box_is_reported() {
        let doc = concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100" width="100" height="100">"#,
            r#"<line data-kind="beam" style="" x1="10" y1="10" x2="120" y2="10"/>"#,
            "</svg>"
        );
        let issues = check_svg("a.svg", doc);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("(120, 10)"), "{issues:?}");
    }

    #[test]
    fn axes_json_needs_a_triangular_row_count() {
        let row = r#"{"i":0,"j":1,"label":"αβ","normalizedLength":1,"mechanicalLength":1.0,"opticalPathDifference":2.0,"bandwidth":1.0,"selected":true}"#;
        assert!(check_axes_json("axes.json", &format!("[{row}]")).is_empty());
        let two = check_axes_json("axes.json", &format!("[{row},{row}]"));
        assert!(two.iter().any(|i| i.contains("C(n, 2)")), "{two:?}");
        assert!(!check_axes_json("axes.json", "{}").is_empty());
    }

    #[test]
    fn missing_directory_only_warns() -> Result<()> {
        let report = validate(Path::new("/nonexistent/sfm-artifacts"))?;
        assert!(report.all_passed());
        assert_eq!(report.warning_count(), 1);
        Ok(())
    }
}
