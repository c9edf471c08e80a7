//! Fixed drawing constants and the per-request placement grid.
//!
//! All lengths are canvas units. Nothing here is user-tunable; tests and
//! the conformance suite rely on these exact values.

use crate::scene::{Canvas, Point};

/// Margin around the drawing.
pub const PADDING: f64 = 50.0;
/// Lead fibre length in front of the coupler.
pub const LEAD_FIBRE_WIDTH: f64 = 100.0;
/// Coupler width.
pub const COUPLER_WIDTH: f64 = 80.0;
/// Coupler height.
pub const COUPLER_HEIGHT: f64 = 20.0;
/// Connecting fibre length per `numMeasurements + 1`.
pub const CONNECTING_FIBRE_UNIT: f64 = 100.0;
/// Collimator width.
pub const COLLIMATOR_WIDTH: f64 = 80.0;
/// Collimator height.
pub const COLLIMATOR_HEIGHT: f64 = 30.0;
/// Body length as a fraction of collimator width.
pub const COLLIMATOR_BODY_RATIO: f64 = 0.6;
/// Horizontal distance unit between a collimator and its retroreflector.
pub const STANDOFF_UNIT: f64 = 200.0;
/// Retroreflector width.
pub const REFLECTOR_WIDTH: f64 = 50.0;
/// Retroreflector height.
pub const REFLECTOR_HEIGHT: f64 = 50.0;
/// Inner ray joint as a fraction of retroreflector height.
pub const REFLECTOR_JOINT_RATIO: f64 = -0.2;
/// Motion arrow length as a fraction of the standoff unit.
pub const MOTION_RATIO: f64 = 0.8;
/// Vertical gap between neighbouring measurement rows.
pub const VERTICAL_GAP: f64 = 150.0;
/// Distance from a collimator's left edge to its inline reflector.
pub const INLINE_REFLECTOR_OFFSET: f64 = 25.0;
/// Inline reflector bar height.
pub const INLINE_REFLECTOR_HEIGHT: f64 = 30.0;
/// Fibre control-point offset per measurement.
pub const FIBRE_CONTROL_UNIT: f64 = 40.0;
/// Gap between a retroreflector's bottom and its motion arrow.
pub const MOTION_OFFSET: f64 = 15.0;
/// Gap between a reflector's top and its letter.
pub const LABEL_LIFT: f64 = 10.0;
/// Font size with zero measurements.
pub const FONT_BASE: f64 = 12.0;
/// Font size increment per measurement.
pub const FONT_STEP: f64 = 2.0;

/// Positions shared by every element of one layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    /// Canvas extents.
    pub canvas: Canvas,
    /// Connecting fibre length.
    pub connecting_fibre_width: f64,
    /// Coupler centre.
    pub coupler: Point,
    /// Collimator centres, one per measurement, top to bottom.
    pub collimators: Vec<Point>,
    /// Retroreflector centres, one per measurement.
    pub reflectors: Vec<Point>,
    /// Motion arrow half length.
    pub motion_half_width: f64,
    /// Horizontal fibre control offset.
    pub fibre_control_offset: f64,
    /// Font size for every label.
    pub font_size: f64,
}

impl Geometry {
    /// Lays out the grid for `num_measurements` rows.
    #[must_use]
    pub fn new(num_measurements: usize) -> Self {
        let n = num_measurements as f64;
        let gaps = num_measurements.saturating_sub(1);

        let connecting_fibre_width = CONNECTING_FIBRE_UNIT * (n + 1.0);
        let motion_width = MOTION_RATIO * STANDOFF_UNIT;

        let width = 2.0 * PADDING
            + LEAD_FIBRE_WIDTH
            + connecting_fibre_width
            + STANDOFF_UNIT * n
            // Right half of whichever is wider, the reflector or its arrow.
            + 0.5 * REFLECTOR_WIDTH.max(motion_width);
        let height = 2.0 * PADDING
            + COUPLER_HEIGHT.max(COLLIMATOR_HEIGHT).max(REFLECTOR_HEIGHT)
            + gaps as f64 * VERTICAL_GAP;

        let center_y = 0.5 * height;
        let coupler = Point::new(PADDING + LEAD_FIBRE_WIDTH, center_y);
        let collimator_x = coupler.x + connecting_fibre_width;

        let span = gaps as f64 * VERTICAL_GAP;
        let collimators: Vec<Point> = (0..num_measurements)
            .map(|m| {
                let y = if gaps == 0 {
                    center_y
                } else {
                    center_y + (m as f64 / gaps as f64 - 0.5) * span
                };
                Point::new(collimator_x, y)
            })
            .collect();
        let reflectors = collimators
            .iter()
            .enumerate()
            .map(|(m, c)| Point::new(c.x + (m as f64 + 1.0) * STANDOFF_UNIT, c.y))
            .collect();

        Self {
            canvas: Canvas { width, height },
            connecting_fibre_width,
            coupler,
            collimators,
            reflectors,
            motion_half_width: 0.5 * motion_width,
            fibre_control_offset: FIBRE_CONTROL_UNIT * n,
            font_size: FONT_BASE + FONT_STEP * n,
        }
    }

    /// Vertical centre of the canvas.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        0.5 * self.canvas.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_measurement_collapses_to_center() {
        let g = Geometry::new(1);
        assert_eq!(g.canvas.height, 150.0);
        assert_eq!(g.collimators, vec![Point::new(350.0, 75.0)]);
        assert_eq!(g.reflectors, vec![Point::new(550.0, 75.0)]);
        assert!(g.collimators.iter().all(|c| c.y.is_finite()));
    }

    #[test]
    fn canvas_grows_linearly() {
        let g = Geometry::new(3);
        // 100 + 100 + 400 + 600 + 80
        assert_eq!(g.canvas.width, 1280.0);
        // 100 + 50 + 300
        assert_eq!(g.canvas.height, 450.0);
        assert_eq!(g.font_size, 18.0);
        assert_eq!(g.fibre_control_offset, 120.0);
    }

    #[test]
    fn rows_are_symmetric_about_the_center() {
        let g = Geometry::new(3);
        let ys: Vec<f64> = g.collimators.iter().map(|c| c.y).collect();
        assert_eq!(ys, vec![75.0, 225.0, 375.0]);
        assert_eq!(g.coupler, Point::new(150.0, 225.0));
    }

    #[test]
    fn reflectors_step_by_the_standoff_unit() {
        let g = Geometry::new(2);
        let xs: Vec<f64> = g.reflectors.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![650.0, 850.0]);
    }
}
