//! View model for the generated page.
//!
//! Values are converted to their display units and rounded here, so the
//! renderer only formats strings.

use serde::Serialize;
use sfm_model::physics::{round_to, HZ_TO_GHZ, HZ_TO_KHZ};
use sfm_model::Design;

/// Decimal places for frequencies in their display unit.
pub const FREQUENCY_PLACES: i32 = 6;
/// Decimal places for lengths in metres.
pub const LENGTH_PLACES: i32 = 3;

/// One line of the parameter list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    /// Display name.
    pub name: &'static str,
    /// Formatted value.
    pub value: String,
    /// Unit, empty for dimensionless values.
    pub unit: &'static str,
}

impl Parameter {
    fn new(name: &'static str, value: impl ToString, unit: &'static str) -> Self {
        Self {
            name,
            value: value.to_string(),
            unit,
        }
    }
}

/// One row of the displayed axis table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisView {
    /// Two-letter axis name.
    pub label: String,
    /// Length in normalized units.
    pub normalized_length: usize,
    /// Mechanical length (m), rounded.
    pub mechanical_length: f64,
    /// Optical path difference (m), rounded.
    pub optical_path_difference: f64,
    /// Beat-frequency bandwidth (kHz), rounded.
    pub bandwidth_khz: f64,
    /// Whether the axis carries a measurement.
    pub selected: bool,
}

/// Everything the page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Page title.
    pub title: String,
    /// Input and derived parameters.
    pub parameters: Vec<Parameter>,
    /// Axis table rows.
    pub axes: Vec<AxisView>,
    /// Advisory messages.
    pub advisories: Vec<String>,
}

impl Summary {
    /// Builds the summary of `design`.
    #[must_use]
    pub fn from_design(design: &Design) -> Self {
        let request = &design.request;
        let parameters = vec![
            Parameter::new("Configuration", request.configuration.label(), ""),
            Parameter::new("Measurements", request.num_measurements, ""),
            Parameter::new("Reflections", design.reflections, ""),
            Parameter::new("Solution", &design.solution.name, ""),
            Parameter::new(
                "Optical modulation amplitude",
                round_to(design.modulation.nu_a() * HZ_TO_GHZ, FREQUENCY_PLACES),
                "GHz",
            ),
            Parameter::new(
                "Modulation frequency",
                round_to(design.modulation.f_m() * HZ_TO_KHZ, FREQUENCY_PLACES),
                "kHz",
            ),
            Parameter::new(
                "Axis separation",
                round_to(request.axis_separation, LENGTH_PLACES),
                "m",
            ),
            Parameter::new(
                "Recommended axis separation",
                round_to(design.recommended_separation, LENGTH_PLACES),
                "m",
            ),
            Parameter::new(
                "Recommended maximum stroke",
                round_to(design.max_stroke, LENGTH_PLACES),
                "m",
            ),
        ];
        let axes = design
            .table
            .rows
            .iter()
            .map(|row| AxisView {
                label: row.label.clone(),
                normalized_length: row.normalized_length,
                mechanical_length: round_to(row.mechanical_length, LENGTH_PLACES),
                optical_path_difference: round_to(row.optical_path_difference, LENGTH_PLACES),
                bandwidth_khz: round_to(row.bandwidth * HZ_TO_KHZ, FREQUENCY_PLACES),
                selected: row.selected,
            })
            .collect();
        Self {
            title: format!(
                "SFM interferometer: {}, {} measurement(s)",
                request.configuration.label(),
                request.num_measurements
            ),
            parameters,
            axes,
            advisories: design.advisories.iter().map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfm_model::{design, Configuration, LayoutRequest, ModulationParameters};

    fn sample(separation: f64) -> anyhow::Result<Design> {
        Ok(design(
            &LayoutRequest {
                configuration: Configuration::SharedReference,
                num_measurements: 2,
                axis_separation: separation,
                solution_index: 0,
            },
            &ModulationParameters::new(1.5e9, 2.5e4)?,
        )?)
    }

    fn value<'a>(summary: &'a Summary, name: &str) -> Option<&'a str> {
        summary
            .parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    #[test]
    fn frequencies_show_in_display_units() -> anyhow::Result<()> {
        let summary = Summary::from_design(&sample(1.0)?);
        assert_eq!(value(&summary, "Optical modulation amplitude"), Some("1.5"));
        assert_eq!(value(&summary, "Modulation frequency"), Some("25"));
        assert_eq!(value(&summary, "Solution"), Some("[0, 1, 3]"));
        Ok(())
    }

    #[test]
    fn lengths_round_to_millimetres() -> anyhow::Result<()> {
        let summary = Summary::from_design(&sample(0.123_456)?);
        assert_eq!(value(&summary, "Axis separation"), Some("0.123"));
        assert_eq!(summary.axes[1].mechanical_length, 0.37);
        assert_eq!(summary.axes.len(), 3);
        assert_eq!(summary.advisories.len(), 1);
        Ok(())
    }
}
