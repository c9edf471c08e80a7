//! Catalog validator.
//!
//! Checks the compiled-in solution table:
//! - every placement starts at 0, is strictly ascending, and has one position per reflection
//! - every placement has pairwise-distinct axis lengths
//! - reflection counts are contiguous and each has at least one placement
//! - the table equals a fresh `sfm-solver` search over the same range

use std::collections::HashSet;

use itertools::Itertools;
use sfm_model::Catalog;

use crate::report::{ConformanceReport, TestResult};

/// Validates the built-in catalog.
pub fn validate() -> ConformanceReport {
    validate_catalog(Catalog::full())
}

/// Validates an arbitrary catalog.
pub fn validate_catalog(catalog: &Catalog) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let mut shape_issues = Vec::new();
    let mut length_issues = Vec::new();
    for entry in &catalog.entries {
        if entry.solutions.is_empty() {
            shape_issues.push(format!("{} reflections: no placements", entry.reflections));
        }
        for solution in &entry.solutions {
            let p = solution.positions;
            if p.len() != entry.reflections {
                shape_issues.push(format!(
                    "{}: {} positions under {} reflections",
                    solution,
                    p.len(),
                    entry.reflections
                ));
            }
            if p.first() != Some(&0) {
                shape_issues.push(format!("{solution}: does not start at 0"));
            }
            if p.windows(2).any(|w| w[0] >= w[1]) {
                shape_issues.push(format!("{solution}: positions not strictly ascending"));
            }
            let mut seen = HashSet::new();
            for (a, b) in p.iter().tuple_combinations() {
                let length = b.abs_diff(*a);
                if !seen.insert(length) {
                    length_issues.push(format!("{solution}: axis length {length} repeats"));
                }
            }
        }
    }
    let counts: Vec<usize> = catalog.entries.iter().map(|e| e.reflections).collect();
    if counts.windows(2).any(|w| w[1] != w[0] + 1) {
        shape_issues.push(format!("reflection counts are not contiguous: {counts:?}"));
    }

    report.push(TestResult::from_issues(
        "catalog/shape",
        format!(
            "{} placements over reflection counts {:?} are well formed",
            catalog.solution_count(),
            counts
        ),
        "Malformed catalog placements",
        shape_issues,
    ));
    report.push(TestResult::from_issues(
        "catalog/lengths",
        "Every placement has pairwise-distinct axis lengths",
        "Placements with repeated axis lengths",
        length_issues,
    ));

    report.push(match catalog.reflection_range() {
        None => TestResult::fail("catalog/search", "Catalog is empty"),
        Some(range) => {
            let searched = sfm_solver::generate_catalog(*range.end());
            let mut issues = Vec::new();
            for entry in &catalog.entries {
                let found: Vec<Vec<usize>> = searched
                    .iter()
                    .find(|(size, _)| *size == entry.reflections)
                    .map(|(_, placements)| placements.iter().map(|p| p.to_vec()).collect())
                    .unwrap_or_default();
                let listed: Vec<Vec<usize>> = entry
                    .solutions
                    .iter()
                    .map(|s| s.positions.to_vec())
                    .collect();
                if found != listed {
                    issues.push(format!(
                        "{} reflections: catalog {:?}, search {:?}",
                        entry.reflections, listed, found
                    ));
                }
            }
            TestResult::from_issues(
                "catalog/search",
                format!("Catalog matches an exhaustive search up to {} reflections", range.end()),
                "Catalog differs from the exhaustive search",
                issues,
            )
        }
    });

    report
}
