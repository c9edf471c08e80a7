//! Axis characteristics table.

use crate::axes::{enumerate_axes, measurement_axes, normalized_length, Axis};
use crate::error::Result;
use crate::physics::{beat_frequency_bandwidth, optical_path_difference};

use super::LayoutInput;

/// One interference axis with its lengths and bandwidth.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AxisRow {
    /// Reflection pair.
    pub axis: Axis,
    /// Two-letter name, e.g. `αγ`.
    pub label: String,
    /// Length in normalized units.
    pub normalized_length: usize,
    /// Mechanical length (m).
    pub mechanical_length: f64,
    /// Round-trip optical path difference (m).
    pub optical_path_difference: f64,
    /// Beat-frequency bandwidth (Hz).
    pub bandwidth: f64,
    /// Whether this axis carries a measurement.
    pub selected: bool,
}

/// Every axis of a layout, in lexicographic `(i, j)` order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AxisTable {
    /// Rows in enumeration order.
    pub rows: Vec<AxisRow>,
}

impl AxisTable {
    /// Rows that carry a measurement.
    pub fn selected(&self) -> impl Iterator<Item = &AxisRow> {
        self.rows.iter().filter(|r| r.selected)
    }

    /// The row for `axis`, if present.
    #[must_use]
    pub fn row(&self, axis: Axis) -> Option<&AxisRow> {
        self.rows.iter().find(|r| r.axis == axis)
    }
}

/// Builds the axis table for a checked layout input.
///
/// # Errors
///
/// Propagates labelling and indexing failures from [`crate::axes`].
pub fn axis_table(input: &LayoutInput<'_>) -> Result<AxisTable> {
    input.check()?;
    let selected = measurement_axes(input.configuration, input.num_measurements);
    let nu_a = input.modulation.nu_a();
    let f_m = input.modulation.f_m();

    let rows = enumerate_axes(input.reflections)
        .into_iter()
        .map(|axis| {
            let normalized = normalized_length(input.solution.positions, axis.i, axis.j)?;
            let mechanical = normalized as f64 * input.axis_separation;
            let opd = optical_path_difference(mechanical);
            Ok(AxisRow {
                axis,
                label: axis.label()?,
                normalized_length: normalized,
                mechanical_length: mechanical,
                optical_path_difference: opd,
                bandwidth: beat_frequency_bandwidth(nu_a, f_m, opd),
                selected: selected.contains(&axis),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(AxisTable { rows })
}
