//! Deterministic layout engine.
//!
//! Maps a resolved request to a positioned [`Layout`] and its companion
//! [`AxisTable`]. The engine is a pure function: the same input always
//! yields the same element sequence.
//!
//! Paint order:
//! 1. fibres (lead, then coupler → collimator) and free-space beams
//! 2. coupler
//! 3. collimators
//! 4. retroreflectors
//! 5. inline reflectors
//! 6. reflection letters
//! 7. motion arrows, each followed by its label

pub mod geometry;
pub mod table;

use std::cmp::Ordering;

use tracing::debug;

use crate::axes::{measurement_axes, reflection_label};
use crate::catalog::Solution;
use crate::error::{DesignError, Result};
use crate::model::{Configuration, ModulationParameters};
use crate::physics::{self, recommended_axis_separation, recommended_max_stroke, round_to};
use crate::scene::{LabelRole, Layout, Point, SceneElement, Shape, Style};

pub use geometry::Geometry;
pub use table::{axis_table, AxisRow, AxisTable};

use geometry::{
    COLLIMATOR_BODY_RATIO, COLLIMATOR_HEIGHT, COLLIMATOR_WIDTH, COUPLER_HEIGHT, COUPLER_WIDTH,
    INLINE_REFLECTOR_HEIGHT, INLINE_REFLECTOR_OFFSET, LABEL_LIFT, MOTION_OFFSET, PADDING,
    REFLECTOR_HEIGHT, REFLECTOR_JOINT_RATIO, REFLECTOR_WIDTH,
};

/// Everything the engine needs, already resolved.
#[derive(Debug, Clone, Copy)]
pub struct LayoutInput<'a> {
    /// Reference configuration.
    pub configuration: Configuration,
    /// Number of measurements.
    pub num_measurements: usize,
    /// Reflection count derived from `configuration` and `num_measurements`.
    pub reflections: usize,
    /// Chosen placement; must place exactly `reflections` reflections.
    pub solution: &'a Solution,
    /// Mechanical length of one normalized unit (m).
    pub axis_separation: f64,
    /// Laser modulation.
    pub modulation: ModulationParameters,
}

impl LayoutInput<'_> {
    /// Checks that the fields agree with each other.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::DegenerateInput`] on any inconsistency.
    pub fn check(&self) -> Result<()> {
        let expected = physics::reflection_count(self.configuration, self.num_measurements)?;
        if self.reflections != expected {
            return Err(DesignError::DegenerateInput(format!(
                "{} with {} measurement(s) needs {expected} reflections, got {}",
                self.configuration, self.num_measurements, self.reflections
            )));
        }
        if self.solution.reflections() != self.reflections {
            return Err(DesignError::DegenerateInput(format!(
                "solution {} places {} reflections, expected {}",
                self.solution,
                self.solution.reflections(),
                self.reflections
            )));
        }
        if !(self.axis_separation.is_finite() && self.axis_separation > 0.0) {
            return Err(DesignError::DegenerateInput(format!(
                "axis separation must be positive, got {}",
                self.axis_separation
            )));
        }
        Ok(())
    }
}

/// Which kind of reflector a labelled position belongs to.
#[derive(Debug, Clone, Copy)]
enum Reflector {
    Inline,
    Retro,
}

/// Positions every element of the interferometer schematic.
///
/// # Errors
///
/// Returns [`DesignError::DegenerateInput`] for inconsistent input and
/// [`DesignError::LabelOutOfRange`] if there are more reflections than letters.
pub fn layout(input: &LayoutInput<'_>) -> Result<Layout> {
    input.check()?;
    let n = input.num_measurements;
    let g = Geometry::new(n);
    debug!(
        configuration = %input.configuration,
        measurements = n,
        width = g.canvas.width,
        height = g.canvas.height,
        "computing layout"
    );

    let inline = inline_reflectors(input.configuration, &g);
    let mut elements = Vec::new();

    // Fibres and beams.
    let coupler_left = g.coupler.x - 0.5 * COUPLER_WIDTH;
    let coupler_right = g.coupler.x + 0.5 * COUPLER_WIDTH;
    elements.push(SceneElement::new(
        Shape::Fibre {
            from: Point::new(PADDING, g.coupler.y),
            to: Point::new(coupler_left, g.coupler.y),
            control_offset: 0.0,
        },
        Style::Fibre,
    ));
    for collimator in &g.collimators {
        elements.push(SceneElement::new(
            Shape::Fibre {
                from: Point::new(coupler_right, g.coupler.y),
                to: Point::new(collimator.x - 0.5 * COLLIMATOR_WIDTH, collimator.y),
                control_offset: g.fibre_control_offset,
            },
            Style::Fibre,
        ));
    }
    for (collimator, reflector) in g.collimators.iter().zip(&g.reflectors) {
        elements.push(SceneElement::new(
            Shape::Beam {
                from: Point::new(collimator.x + 0.5 * COLLIMATOR_WIDTH, collimator.y),
                to: Point::new(reflector.x - 0.5 * REFLECTOR_WIDTH, reflector.y),
            },
            Style::Beam,
        ));
    }

    elements.push(SceneElement::new(
        Shape::Coupler {
            center: g.coupler,
            width: COUPLER_WIDTH,
            height: COUPLER_HEIGHT,
        },
        Style::Outline,
    ));
    for collimator in &g.collimators {
        elements.push(SceneElement::new(
            Shape::Collimator {
                center: *collimator,
                width: COLLIMATOR_WIDTH,
                height: COLLIMATOR_HEIGHT,
                body_length: COLLIMATOR_BODY_RATIO * COLLIMATOR_WIDTH,
            },
            Style::Outline,
        ));
    }
    for reflector in &g.reflectors {
        elements.push(SceneElement::new(
            Shape::Retroreflector {
                center: *reflector,
                width: REFLECTOR_WIDTH,
                height: REFLECTOR_HEIGHT,
                joint: REFLECTOR_JOINT_RATIO * REFLECTOR_HEIGHT,
            },
            Style::Outline,
        ));
    }
    for center in &inline {
        elements.push(SceneElement::new(
            Shape::InlineReflector {
                center: *center,
                height: INLINE_REFLECTOR_HEIGHT,
            },
            Style::Outline,
        ));
    }

    // Reflection letters.
    let ordered = label_order(input.configuration, &inline, &g.reflectors);
    if ordered.len() != input.reflections {
        return Err(DesignError::DegenerateInput(format!(
            "placed {} reflectors for {} reflections",
            ordered.len(),
            input.reflections
        )));
    }
    for (index, (center, kind)) in ordered.iter().enumerate() {
        let half_height = match kind {
            Reflector::Inline => 0.5 * INLINE_REFLECTOR_HEIGHT,
            Reflector::Retro => 0.5 * REFLECTOR_HEIGHT,
        };
        elements.push(SceneElement::new(
            Shape::Label {
                anchor: Point::new(center.x, center.y - half_height - LABEL_LIFT),
                text: reflection_label(index)?.to_string(),
                font_size: g.font_size,
                role: LabelRole::Reflection,
            },
            Style::Text,
        ));
    }

    // Motion arrows.
    let recommended = recommended_axis_separation(input.modulation.nu_a())?;
    let stroke = round_to(recommended_max_stroke(input.axis_separation, recommended), 3);
    for (reflector, axis) in g
        .reflectors
        .iter()
        .zip(measurement_axes(input.configuration, n))
    {
        let center = Point::new(reflector.x, reflector.y + 0.5 * REFLECTOR_HEIGHT + MOTION_OFFSET);
        elements.push(SceneElement::new(
            Shape::Motion {
                center,
                half_width: g.motion_half_width,
            },
            Style::Motion,
        ));
        elements.push(SceneElement::new(
            Shape::Label {
                anchor: Point::new(center.x, center.y + g.font_size),
                text: format!("{}: {stroke} m", axis.label()?),
                font_size: g.font_size,
                role: LabelRole::Motion,
            },
            Style::Text,
        ));
    }

    debug!(elements = elements.len(), "layout complete");
    Ok(Layout {
        canvas: g.canvas,
        elements,
    })
}

/// Inline reference reflectors: one on the lead fibre for a shared
/// reference, one in front of every collimator otherwise.
fn inline_reflectors(configuration: Configuration, g: &Geometry) -> Vec<Point> {
    match configuration {
        Configuration::SharedReference => {
            let coupler_left = g.coupler.x - 0.5 * COUPLER_WIDTH;
            vec![Point::new(0.5 * (PADDING + coupler_left), g.coupler.y)]
        }
        Configuration::UniqueReferences => g
            .collimators
            .iter()
            .map(|c| {
                Point::new(
                    c.x - 0.5 * COLLIMATOR_WIDTH - INLINE_REFLECTOR_OFFSET,
                    c.y,
                )
            })
            .collect(),
    }
}

/// Orders every reflector the way the catalog indexes reflections.
///
/// A shared reference sorts by `x` then `y`, so the reference comes first
/// and targets follow in measurement order. Unique references sort by `y`
/// then `x`, pairing each reference with the target on its row.
fn label_order(
    configuration: Configuration,
    inline: &[Point],
    reflectors: &[Point],
) -> Vec<(Point, Reflector)> {
    let mut all: Vec<(Point, Reflector)> = inline
        .iter()
        .map(|p| (*p, Reflector::Inline))
        .chain(reflectors.iter().map(|p| (*p, Reflector::Retro)))
        .collect();
    let key = |a: &Point, b: &Point| -> Ordering {
        match configuration {
            Configuration::SharedReference => a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)),
            Configuration::UniqueReferences => a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)),
        }
    };
    all.sort_by(|(a, _), (b, _)| key(a, b));
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn input(
        configuration: Configuration,
        num_measurements: usize,
        solution: &Solution,
    ) -> Result<LayoutInput<'_>> {
        Ok(LayoutInput {
            configuration,
            num_measurements,
            reflections: physics::reflection_count(configuration, num_measurements)?,
            solution,
            axis_separation: 1.0,
            modulation: ModulationParameters::new(1e9, 1e4)?,
        })
    }

    fn labels(layout: &Layout, role: LabelRole) -> Vec<(String, Point)> {
        layout
            .elements
            .iter()
            .filter_map(|e| match &e.shape {
                Shape::Label {
                    text, anchor, role: r, ..
                } if *r == role => Some((text.clone(), *anchor)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn shared_reference_places_one_inline_reflector() -> Result<()> {
        let solution = Catalog::full().solution(3, 0)?;
        let layout = layout(&input(Configuration::SharedReference, 2, solution)?)?;
        assert_eq!(layout.of_kind("inline-reflector").count(), 1);
        assert_eq!(layout.of_kind("retroreflector").count(), 2);
        assert_eq!(layout.of_kind("collimator").count(), 2);
        assert_eq!(layout.of_kind("coupler").count(), 1);
        assert_eq!(layout.of_kind("fibre").count(), 3);
        assert_eq!(layout.of_kind("beam").count(), 2);
        assert_eq!(layout.of_kind("motion").count(), 2);
        Ok(())
    }

    #[test]
    fn shared_reference_letters_follow_the_beam() -> Result<()> {
        let solution = Catalog::full().solution(3, 1)?;
        let layout = layout(&input(Configuration::SharedReference, 2, solution)?)?;
        let letters: Vec<String> = labels(&layout, LabelRole::Reflection)
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        assert_eq!(letters, vec!["α", "β", "γ"]);
        let motion: Vec<String> = labels(&layout, LabelRole::Motion)
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        assert!(motion[0].starts_with("αβ: "), "{motion:?}");
        assert!(motion[1].starts_with("αγ: "), "{motion:?}");
        Ok(())
    }

    #[test]
    fn unique_references_pair_letters_by_row() -> Result<()> {
        let solution = Catalog::full().solution(4, 0)?;
        let layout = layout(&input(Configuration::UniqueReferences, 2, solution)?)?;
        assert_eq!(layout.of_kind("inline-reflector").count(), 2);
        let letters = labels(&layout, LabelRole::Reflection);
        let texts: Vec<&str> = letters.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(texts, vec!["α", "β", "γ", "δ"]);
        // α/β share the top row, γ/δ the bottom row.
        assert!(letters[0].1.y < letters[2].1.y);
        assert!(letters[0].1.x < letters[1].1.x);
        let motion: Vec<String> = labels(&layout, LabelRole::Motion)
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        assert!(motion[0].starts_with("αβ: "));
        assert!(motion[1].starts_with("γδ: "));
        Ok(())
    }

    #[test]
    fn paint_order_puts_labels_last() -> Result<()> {
        let solution = Catalog::full().solution(4, 1)?;
        let layout = layout(&input(Configuration::SharedReference, 3, solution)?)?;
        let kinds: Vec<&str> = layout.elements.iter().map(|e| e.shape.kind()).collect();
        let first = |k: &str| kinds.iter().position(|x| *x == k);
        let last = |k: &str| kinds.iter().rposition(|x| *x == k);
        assert!(last("beam") < first("coupler"));
        assert!(last("coupler") < first("collimator"));
        assert!(last("collimator") < first("retroreflector"));
        assert!(last("retroreflector") < first("inline-reflector"));
        assert!(last("inline-reflector") < first("label"));
        assert_eq!(kinds.last(), Some(&"label"));
        Ok(())
    }

    #[test]
    fn everything_fits_on_the_canvas() -> Result<()> {
        for configuration in Configuration::ALL {
            for n in 1..=Catalog::full().max_measurements(configuration) {
                let reflections = physics::reflection_count(configuration, n)?;
                for solution in Catalog::full().solutions(reflections)? {
                    let layout = layout(&input(configuration, n, solution)?)?;
                    for element in &layout.elements {
                        for p in element.shape.key_points() {
                            assert!(layout.canvas.contains(p), "{p:?} outside for n={n}");
                        }
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    fn mismatched_solution_is_rejected() -> Result<()> {
        let solution = Catalog::full().solution(4, 0)?;
        let result = layout(&input(Configuration::SharedReference, 2, solution)?);
        assert!(matches!(result, Err(DesignError::DegenerateInput(_))));
        Ok(())
    }

    #[test]
    fn font_grows_with_measurements() -> Result<()> {
        let small = layout(&input(
            Configuration::SharedReference,
            1,
            Catalog::full().solution(2, 0)?,
        )?)?;
        let large = layout(&input(
            Configuration::SharedReference,
            4,
            Catalog::full().solution(5, 0)?,
        )?)?;
        let size = |l: &Layout| {
            l.elements.iter().find_map(|e| match e.shape {
                Shape::Label { font_size, .. } => Some(font_size),
                _ => None,
            })
        };
        assert_eq!(size(&small), Some(14.0));
        assert_eq!(size(&large), Some(20.0));
        Ok(())
    }
}
