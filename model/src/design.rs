//! End-to-end design computation.
//!
//! [`design`] runs the whole pipeline for one request: validation,
//! reflection count, catalog lookup, layout, axis table, and advisories.

use std::fmt;

use tracing::{debug, warn};

use crate::catalog::{Catalog, Solution};
use crate::error::Result;
use crate::layout::{axis_table, layout, AxisTable, LayoutInput};
use crate::model::{LayoutRequest, ModulationParameters};
use crate::physics::{reflection_count, recommended_axis_separation, recommended_max_stroke};
use crate::scene::Layout;

/// Non-fatal notes accompanying a valid design.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Advisory {
    /// Axes are closer than the recommended separation, so neighbouring
    /// beat bands may overlap.
    SeparationBelowRecommended {
        /// Requested axis separation (m).
        separation: f64,
        /// Recommended minimum (m).
        recommended: f64,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::SeparationBelowRecommended {
                separation,
                recommended,
            } => write!(
                f,
                "axis separation {separation:.3} m is below the recommended {recommended:.3} m; \
                 neighbouring axes risk crosstalk"
            ),
        }
    }
}

/// Advisories for an axis separation given the recommended one.
#[must_use]
pub fn advisories(axis_separation: f64, recommended: f64) -> Vec<Advisory> {
    let mut out = Vec::new();
    if axis_separation < recommended {
        out.push(Advisory::SeparationBelowRecommended {
            separation: axis_separation,
            recommended,
        });
    }
    out
}

/// A complete interferometer design.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Design {
    /// The request this design answers.
    pub request: LayoutRequest,
    /// Modulation used for bandwidths.
    pub modulation: ModulationParameters,
    /// Number of reflections.
    pub reflections: usize,
    /// Selected placement.
    pub solution: Solution,
    /// Recommended axis separation for the modulation amplitude (m).
    pub recommended_separation: f64,
    /// Recommended maximum target stroke (m).
    pub max_stroke: f64,
    /// Positioned schematic.
    pub layout: Layout,
    /// Axis characteristics.
    pub table: AxisTable,
    /// Non-fatal advisories.
    pub advisories: Vec<Advisory>,
}

/// Computes the design for `request` under `modulation`.
///
/// # Errors
///
/// Returns [`crate::DesignError::DegenerateInput`] for invalid parameters,
/// [`crate::DesignError::UnsupportedReflectionCount`] when the catalog has no
/// entry for the derived reflection count, and
/// [`crate::DesignError::OutOfRangeSolution`] for a bad solution index. No
/// partial design is produced on error.
pub fn design(request: &LayoutRequest, modulation: &ModulationParameters) -> Result<Design> {
    request.validate()?;
    let reflections = reflection_count(request.configuration, request.num_measurements)?;
    let solution = Catalog::full().solution(reflections, request.solution_index)?;
    debug!(reflections, solution = %solution, "resolved solution");

    let recommended = recommended_axis_separation(modulation.nu_a())?;
    let input = LayoutInput {
        configuration: request.configuration,
        num_measurements: request.num_measurements,
        reflections,
        solution,
        axis_separation: request.axis_separation,
        modulation: *modulation,
    };
    let layout = layout(&input)?;
    let table = axis_table(&input)?;

    let advisories = advisories(request.axis_separation, recommended);
    for advisory in &advisories {
        warn!("{advisory}");
    }

    Ok(Design {
        request: *request,
        modulation: *modulation,
        reflections,
        solution: solution.clone(),
        recommended_separation: recommended,
        max_stroke: recommended_max_stroke(request.axis_separation, recommended),
        layout,
        table,
        advisories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DesignError;
    use crate::model::Configuration;

    fn request(configuration: Configuration, n: usize, sep: f64, index: usize) -> LayoutRequest {
        LayoutRequest {
            configuration,
            num_measurements: n,
            axis_separation: sep,
            solution_index: index,
        }
    }

    #[test]
    fn table_for_zero_one_three() -> Result<()> {
        let modulation = ModulationParameters::new(1e9, 1e4)?;
        let d = design(&request(Configuration::SharedReference, 2, 2.0, 0), &modulation)?;
        assert_eq!(d.reflections, 3);
        assert_eq!(d.solution.positions, &[0, 1, 3]);
        let rows: Vec<(&str, usize, f64, bool)> = d
            .table
            .rows
            .iter()
            .map(|r| (r.label.as_str(), r.normalized_length, r.mechanical_length, r.selected))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("αβ", 1, 2.0, true),
                ("αγ", 3, 6.0, true),
                ("βγ", 2, 4.0, false),
            ]
        );
        Ok(())
    }

    #[test]
    fn bandwidth_uses_round_trip_path() -> Result<()> {
        let modulation = ModulationParameters::new(1e9, 1e4)?;
        let d = design(&request(Configuration::SharedReference, 1, 1.0, 0), &modulation)?;
        let row = &d.table.rows[0];
        assert_eq!(row.optical_path_difference, 2.0);
        assert!((row.bandwidth - 2.0 * 209_584.502_195).abs() < 1e-3);
        Ok(())
    }

    #[test]
    fn narrow_separation_warns_but_succeeds() -> Result<()> {
        let modulation = ModulationParameters::new(1e9, 1e4)?;
        let d = design(&request(Configuration::UniqueReferences, 2, 0.1, 1), &modulation)?;
        assert_eq!(d.advisories.len(), 1);
        assert!(d.advisories[0].to_string().contains("crosstalk"));
        assert_eq!(d.max_stroke, 0.1 / 4.0);

        let wide = design(&request(Configuration::UniqueReferences, 2, 5.0, 1), &modulation)?;
        assert!(wide.advisories.is_empty());
        Ok(())
    }

    #[test]
    fn out_of_range_solution_fails() -> Result<()> {
        let modulation = ModulationParameters::new(1e9, 1e4)?;
        assert_eq!(
            design(&request(Configuration::SharedReference, 2, 1.0, 2), &modulation),
            Err(DesignError::OutOfRangeSolution {
                index: 2,
                available: 2,
                reflections: 3
            })
        );
        Ok(())
    }

    #[test]
    fn uncatalogued_reflection_count_fails() -> Result<()> {
        let modulation = ModulationParameters::new(1e9, 1e4)?;
        assert_eq!(
            design(&request(Configuration::UniqueReferences, 4, 1.0, 0), &modulation),
            Err(DesignError::UnsupportedReflectionCount(8))
        );
        Ok(())
    }

    #[test]
    fn zero_measurements_fail_before_lookup() -> Result<()> {
        let modulation = ModulationParameters::new(1e9, 1e4)?;
        assert!(matches!(
            design(&request(Configuration::SharedReference, 0, 1.0, 0), &modulation),
            Err(DesignError::DegenerateInput(_))
        ));
        Ok(())
    }

    #[test]
    fn identical_requests_give_identical_designs() -> Result<()> {
        let modulation = ModulationParameters::new(2.5e9, 5e4)?;
        let r = request(Configuration::SharedReference, 3, 0.75, 1);
        assert_eq!(design(&r, &modulation)?, design(&r, &modulation)?);
        Ok(())
    }
}
