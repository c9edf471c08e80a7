//! Interference axes between pairs of reflections.
//!
//! Axes are always enumerated in lexicographic `(i, j)` order with `i < j`.
//! That order names the rows of the axis table and must not change.

use std::fmt;

use crate::error::{DesignError, Result};
use crate::model::Configuration;

/// Reflection label alphabet: the 24 Greek minuscules in alphabetical order.
pub const ALPHABET: [char; 24] = [
    'α', 'β', 'γ', 'δ', 'ε', 'ζ', 'η', 'θ', 'ι', 'κ', 'λ', 'μ', 'ν', 'ξ', 'ο', 'π', 'ρ', 'σ', 'τ',
    'υ', 'φ', 'χ', 'ψ', 'ω',
];

/// An unordered pair of reflections, stored with `i < j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Axis {
    /// Lower reflection index.
    pub i: usize,
    /// Higher reflection index.
    pub j: usize,
}

impl Axis {
    /// Creates the axis between two distinct reflections, in either order.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::DegenerateInput`] when `a == b`.
    pub fn new(a: usize, b: usize) -> Result<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Ok(Self { i: a, j: b }),
            std::cmp::Ordering::Greater => Ok(Self { i: b, j: a }),
            std::cmp::Ordering::Equal => Err(DesignError::DegenerateInput(format!(
                "an axis needs two distinct reflections, got {a} twice"
            ))),
        }
    }

    /// Two-letter label, e.g. `αβ`.
    ///
    /// # Errors
    ///
    /// See [`axis_label`].
    pub fn label(&self) -> Result<String> {
        axis_label(self.i, self.j)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// Every axis between `reflections` reflections, in lexicographic order.
#[must_use]
pub fn enumerate_axes(reflections: usize) -> Vec<Axis> {
    let mut axes = Vec::with_capacity(reflections * reflections.saturating_sub(1) / 2);
    for i in 0..reflections {
        for j in (i + 1)..reflections {
            axes.push(Axis { i, j });
        }
    }
    axes
}

/// Label symbol of reflection `index`.
///
/// # Errors
///
/// Returns [`DesignError::LabelOutOfRange`] past the end of [`ALPHABET`].
pub fn reflection_label(index: usize) -> Result<char> {
    ALPHABET
        .get(index)
        .copied()
        .ok_or(DesignError::LabelOutOfRange {
            index,
            alphabet: ALPHABET.len(),
        })
}

/// Concatenated labels of reflections `i` and `j`.
///
/// # Errors
///
/// Returns [`DesignError::LabelOutOfRange`] if either index has no symbol.
pub fn axis_label(i: usize, j: usize) -> Result<String> {
    Ok([reflection_label(i)?, reflection_label(j)?].iter().collect())
}

/// Normalized length `|positions[i] - positions[j]|`.
///
/// # Errors
///
/// Returns [`DesignError::DegenerateInput`] when either index is past the end
/// of `positions`.
pub fn normalized_length(positions: &[usize], i: usize, j: usize) -> Result<usize> {
    match (positions.get(i), positions.get(j)) {
        (Some(a), Some(b)) => Ok(a.abs_diff(*b)),
        _ => Err(DesignError::DegenerateInput(format!(
            "axis ({i}, {j}) is outside a placement of {} reflections",
            positions.len()
        ))),
    }
}

/// The axes actually used for measurement, one per measurement.
///
/// - `SharedReference`: `(0, k)` for `k = 1..=num_measurements`
/// - `UniqueReferences`: `(2k, 2k + 1)` for `k = 0..num_measurements`
#[must_use]
pub fn measurement_axes(configuration: Configuration, num_measurements: usize) -> Vec<Axis> {
    match configuration {
        Configuration::SharedReference => (1..=num_measurements)
            .map(|k| Axis { i: 0, j: k })
            .collect(),
        Configuration::UniqueReferences => (0..num_measurements)
            .map(|k| Axis {
                i: 2 * k,
                j: 2 * k + 1,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(axes: &[Axis]) -> Vec<(usize, usize)> {
        axes.iter().map(|a| (a.i, a.j)).collect()
    }

    #[test]
    fn enumerates_lexicographically() {
        assert_eq!(
            pairs(&enumerate_axes(4)),
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
        assert!(enumerate_axes(1).is_empty());
    }

    #[test]
    fn lengths_for_zero_one_three() -> Result<()> {
        let positions = [0, 1, 3];
        let lengths: Vec<_> = enumerate_axes(3)
            .iter()
            .map(|a| normalized_length(&positions, a.i, a.j).map(|l| (a.i, a.j, l)))
            .collect::<Result<_>>()?;
        assert_eq!(lengths, vec![(0, 1, 1), (0, 2, 3), (1, 2, 2)]);
        Ok(())
    }

    #[test]
    fn labels_use_greek_minuscules() -> Result<()> {
        assert_eq!(axis_label(0, 1)?, "αβ");
        assert_eq!(axis_label(2, 5)?, "γζ");
        assert_eq!(axis_label(0, 23)?, "αω");
        Ok(())
    }

    #[test]
    fn labels_run_out_after_twenty_four() {
        assert_eq!(
            axis_label(0, 24),
            Err(DesignError::LabelOutOfRange {
                index: 24,
                alphabet: 24
            })
        );
    }

    #[test]
    fn measurement_axes_per_configuration() {
        assert_eq!(
            pairs(&measurement_axes(Configuration::SharedReference, 2)),
            vec![(0, 1), (0, 2)]
        );
        assert_eq!(
            pairs(&measurement_axes(Configuration::UniqueReferences, 2)),
            vec![(0, 1), (2, 3)]
        );
    }

    #[test]
    fn axis_new_orders_its_ends() -> Result<()> {
        assert_eq!(Axis::new(3, 1)?, Axis { i: 1, j: 3 });
        assert!(Axis::new(2, 2).is_err());
        Ok(())
    }

    #[test]
    fn normalized_length_checks_bounds() {
        assert!(normalized_length(&[0, 1], 0, 2).is_err());
    }
}
