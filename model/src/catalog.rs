//! Static catalog of reflection placements ("solutions").
//!
//! Each solution places `n` reflections at integer positions along a
//! normalized axis such that all `C(n, 2)` pairwise distances differ, so no
//! two interference axes share a beat band. The table is generated by
//! `sfm-solver`; extending coverage is a data-only change.

use std::fmt;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

use crate::error::{DesignError, Result};
use crate::model::Configuration;

/// Raw catalog data keyed by reflection count.
pub const SOLUTIONS: &[(usize, &[&[usize]])] = &[
    (2, &[&[0, 1]]),
    (3, &[&[0, 1, 3], &[0, 2, 3]]),
    (4, &[&[0, 1, 4, 6], &[0, 2, 5, 6]]),
    (
        5,
        &[
            &[0, 1, 4, 9, 11],
            &[0, 2, 7, 8, 11],
            &[0, 2, 7, 10, 11],
            &[0, 3, 4, 9, 11],
        ],
    ),
    (
        6,
        &[
            &[0, 1, 4, 10, 12, 17],
            &[0, 1, 4, 10, 15, 17],
            &[0, 1, 8, 11, 13, 17],
            &[0, 1, 8, 12, 14, 17],
            &[0, 2, 7, 13, 16, 17],
            &[0, 3, 5, 9, 16, 17],
            &[0, 4, 6, 9, 16, 17],
            &[0, 5, 7, 13, 16, 17],
        ],
    ),
];

/// One catalogued placement of reflections.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Position within the list for its reflection count.
    pub index: usize,
    /// Normalized positions, one per reflection, ascending.
    pub positions: &'static [usize],
    /// Display name, e.g. `[0, 1, 3]`.
    pub name: String,
}

impl Solution {
    fn new(index: usize, positions: &'static [usize]) -> Self {
        Self {
            index,
            positions,
            name: display_name(positions),
        }
    }

    /// Number of reflections placed by this solution.
    #[must_use]
    pub fn reflections(&self) -> usize {
        self.positions.len()
    }

    /// Normalized length of the whole interferometer.
    #[must_use]
    pub fn span(&self) -> usize {
        self.positions.iter().copied().max().unwrap_or(0)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// All solutions for one reflection count.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CatalogEntry {
    /// Reflection count shared by every solution in this entry.
    pub reflections: usize,
    /// Solutions in catalog order.
    pub solutions: Vec<Solution>,
}

/// The process-wide solution catalog.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Catalog {
    /// Entries in ascending reflection count.
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Returns the catalog built from [`SOLUTIONS`]. Built once, read-only.
    #[must_use]
    pub fn full() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog::from_table(SOLUTIONS))
    }

    /// Builds a catalog from raw `(reflections, solutions)` rows.
    #[must_use]
    pub fn from_table(table: &'static [(usize, &'static [&'static [usize]])]) -> Catalog {
        let mut entries: Vec<CatalogEntry> = table
            .iter()
            .map(|(reflections, rows)| CatalogEntry {
                reflections: *reflections,
                solutions: rows
                    .iter()
                    .enumerate()
                    .map(|(index, positions)| Solution::new(index, positions))
                    .collect(),
            })
            .collect();
        entries.sort_by_key(|e| e.reflections);
        Catalog { entries }
    }

    /// Candidate solutions for `reflections`.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::UnsupportedReflectionCount`] when the catalog has
    /// no entry for `reflections`.
    pub fn solutions(&self, reflections: usize) -> Result<&[Solution]> {
        self.entries
            .iter()
            .find(|e| e.reflections == reflections)
            .map(|e| e.solutions.as_slice())
            .ok_or(DesignError::UnsupportedReflectionCount(reflections))
    }

    /// The solution at `index` for `reflections`.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::UnsupportedReflectionCount`] for an uncatalogued
    /// count and [`DesignError::OutOfRangeSolution`] for a bad index.
    pub fn solution(&self, reflections: usize, index: usize) -> Result<&Solution> {
        let solutions = self.solutions(reflections)?;
        solutions.get(index).ok_or(DesignError::OutOfRangeSolution {
            index,
            available: solutions.len(),
            reflections,
        })
    }

    /// Smallest and largest catalogued reflection counts.
    #[must_use]
    pub fn reflection_range(&self) -> Option<RangeInclusive<usize>> {
        let first = self.entries.first()?.reflections;
        let last = self.entries.last()?.reflections;
        Some(first..=last)
    }

    /// Largest number of measurements the catalog supports for `configuration`.
    ///
    /// Assumes the catalogued reflection counts are contiguous from 2.
    #[must_use]
    pub fn max_measurements(&self, configuration: Configuration) -> usize {
        let max_reflections = self.entries.last().map_or(0, |e| e.reflections);
        match configuration {
            Configuration::SharedReference => max_reflections.saturating_sub(1),
            Configuration::UniqueReferences => max_reflections / 2,
        }
    }

    /// Total number of catalogued solutions.
    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.entries.iter().map(|e| e.solutions.len()).sum()
    }
}

/// Bracketed, comma-separated rendering of a placement.
#[must_use]
pub fn display_name(positions: &[usize]) -> String {
    let inner: Vec<String> = positions.iter().map(ToString::to_string).collect();
    format!("[{}]", inner.join(", "))
}
