//! Abstract scene graph produced by the layout engine.
//!
//! A scene is a flat, ordered list of [`SceneElement`]s. Order is paint
//! order. Coordinates are canvas units with the origin top-left and `y`
//! growing downwards.

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Canvas extents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Canvas {
    /// Width in canvas units.
    pub width: f64,
    /// Height in canvas units.
    pub height: f64,
}

impl Canvas {
    /// Whether `p` lies inside the canvas, edges included.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// Visual style of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Style {
    /// Black 2px outline, no fill.
    Outline,
    /// Optical fibre.
    Fibre,
    /// Free-space beam, dashed.
    Beam,
    /// Motion arrow.
    Motion,
    /// Text.
    Text,
}

/// What a text label annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LabelRole {
    /// The alphabet letter of a reflection.
    Reflection,
    /// The axis name and stroke under a motion indicator.
    Motion,
}

/// A positioned geometric primitive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Shape {
    /// A cubic fibre curve whose control points sit `control_offset` to the
    /// right of `from` and to the left of `to`.
    Fibre {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Horizontal control-point offset.
        control_offset: f64,
    },
    /// A straight free-space beam.
    Beam {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Fibre coupler, a rectangle.
    Coupler {
        /// Centre.
        center: Point,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
    },
    /// Collimator: a tapered nose joined to a rectangular body.
    Collimator {
        /// Centre.
        center: Point,
        /// Overall width.
        width: f64,
        /// Body height.
        height: f64,
        /// Length of the rectangular body.
        body_length: f64,
    },
    /// Retroreflector, a triangle with its apex pointing away from the beam.
    Retroreflector {
        /// Centre.
        center: Point,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
        /// Vertical offset of the inner ray joint on the left face.
        joint: f64,
    },
    /// Partial reflector inside a fibre, drawn as a vertical bar.
    InlineReflector {
        /// Centre.
        center: Point,
        /// Height.
        height: f64,
    },
    /// Double-headed arrow showing target travel.
    Motion {
        /// Centre.
        center: Point,
        /// Half of the arrow length.
        half_width: f64,
    },
    /// Text anchored at its centre baseline.
    Label {
        /// Anchor.
        anchor: Point,
        /// Text content.
        text: String,
        /// Font size in canvas units.
        font_size: f64,
        /// What the label annotates.
        role: LabelRole,
    },
}

impl Shape {
    /// Short kind name, used as the `data-kind` of rendered elements.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Fibre { .. } => "fibre",
            Shape::Beam { .. } => "beam",
            Shape::Coupler { .. } => "coupler",
            Shape::Collimator { .. } => "collimator",
            Shape::Retroreflector { .. } => "retroreflector",
            Shape::InlineReflector { .. } => "inline-reflector",
            Shape::Motion { .. } => "motion",
            Shape::Label { .. } => "label",
        }
    }

    /// The reference point of the shape: centre, anchor, or start point.
    #[must_use]
    pub fn anchor(&self) -> Point {
        match self {
            Shape::Fibre { from, .. } | Shape::Beam { from, .. } => *from,
            Shape::Coupler { center, .. }
            | Shape::Collimator { center, .. }
            | Shape::Retroreflector { center, .. }
            | Shape::InlineReflector { center, .. }
            | Shape::Motion { center, .. } => *center,
            Shape::Label { anchor, .. } => *anchor,
        }
    }

    /// Every point that defines the shape's position.
    #[must_use]
    pub fn key_points(&self) -> Vec<Point> {
        match self {
            Shape::Fibre { from, to, .. } | Shape::Beam { from, to } => vec![*from, *to],
            other => vec![other.anchor()],
        }
    }
}

/// A shape with its style.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SceneElement {
    /// Geometry.
    pub shape: Shape,
    /// Style tag.
    pub style: Style,
}

impl SceneElement {
    /// Pairs a shape with its style.
    #[must_use]
    pub fn new(shape: Shape, style: Style) -> Self {
        Self { shape, style }
    }
}

/// A complete positioned scene.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Layout {
    /// Canvas extents.
    pub canvas: Canvas,
    /// Elements in paint order.
    pub elements: Vec<SceneElement>,
}

impl Layout {
    /// Elements whose shape has the given kind name.
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a SceneElement> + 'a {
        self.elements.iter().filter(move |e| e.shape.kind() == kind)
    }
}
