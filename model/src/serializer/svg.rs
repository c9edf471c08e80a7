//! SVG serializer for laid-out scenes.
//!
//! Every element carries a `data-kind` attribute, and every path starts with
//! an absolute `M x y` at the element's anchor, so positions can be read back
//! from the document. Coordinates use Rust's shortest round-trip `f64`
//! formatting and therefore re-parse to the identical value.

use std::fmt::Write as FmtWrite;

use crate::scene::{LabelRole, Layout, SceneElement, Shape, Style};

/// File name used when the drawing is exported.
pub const SVG_FILE_NAME: &str = "interferometer.svg";

/// Arrow head length of motion indicators.
const ARROW_HEAD: f64 = 8.0;

/// Serializes a layout to a standalone SVG document.
#[must_use]
pub fn to_svg(layout: &Layout) -> String {
    let mut out = String::with_capacity(256 * (layout.elements.len() + 1));
    let w = layout.canvas.width;
    let h = layout.canvas.height;
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#
    );
    for element in &layout.elements {
        out.push_str("  ");
        write_element(&mut out, element);
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

/// Inline CSS for a style tag.
#[must_use]
pub fn style_css(style: Style) -> &'static str {
    match style {
        Style::Outline => {
            "fill:none;stroke:#000000;stroke-linecap:round;stroke-linejoin:round;stroke-opacity:1;stroke-width:2px"
        }
        Style::Fibre => "fill:none;stroke:#e0a000;stroke-linecap:round;stroke-width:3px",
        Style::Beam => "fill:none;stroke:#d00000;stroke-width:2px;stroke-dasharray:8 6",
        Style::Motion => {
            "fill:none;stroke:#000000;stroke-linecap:round;stroke-linejoin:round;stroke-width:1.5px"
        }
        Style::Text => "font-family:sans-serif;fill:#000000",
    }
}

fn write_element(out: &mut String, element: &SceneElement) {
    let kind = element.shape.kind();
    let css = style_css(element.style);
    match &element.shape {
        Shape::Fibre {
            from,
            to,
            control_offset,
        } => {
            let _ = write!(
                out,
                r#"<path data-kind="{kind}" style="{css}" d="M{} {} C{} {} {} {} {} {}"/>"#,
                from.x,
                from.y,
                from.x + control_offset,
                from.y,
                to.x - control_offset,
                to.y,
                to.x,
                to.y
            );
        }
        Shape::Beam { from, to } => {
            let _ = write!(
                out,
                r#"<line data-kind="{kind}" style="{css}" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                from.x, from.y, to.x, to.y
            );
        }
        Shape::Coupler {
            center,
            width,
            height,
        } => {
            let _ = write!(
                out,
                r#"<path data-kind="{kind}" style="{css}" d="M{} {} m{} {} l0 {} l{} 0 l0 {} l{} 0 z"/>"#,
                center.x,
                center.y,
                -width / 2.0,
                height / 2.0,
                -height,
                width,
                height,
                -width
            );
        }
        Shape::Collimator {
            center,
            width,
            height,
            body_length,
        } => {
            let _ = write!(
                out,
                r#"<path data-kind="{kind}" style="{css}" d="M{} {} m{} 0 l{} {} l{} 0 l0 {} l{} 0 z"/>"#,
                center.x,
                center.y,
                -width / 2.0,
                width - body_length,
                -height / 2.0,
                body_length,
                height,
                -body_length
            );
        }
        Shape::Retroreflector {
            center,
            width,
            height,
            joint,
        } => {
            let _ = write!(
                out,
                r#"<path data-kind="{kind}" style="{css}" d="M{} {} m{} 0 l{} {} l0 {} z l{} {}"/>"#,
                center.x,
                center.y,
                width / 2.0,
                -width,
                -height / 2.0,
                height,
                -width,
                joint
            );
        }
        Shape::InlineReflector { center, height } => {
            let _ = write!(
                out,
                r#"<path data-kind="{kind}" style="{css}" d="M{} {} m0 {} l0 {}"/>"#,
                center.x,
                center.y,
                -height / 2.0,
                height
            );
        }
        Shape::Motion { center, half_width } => {
            let _ = write!(
                out,
                r#"<path data-kind="{kind}" style="{css}" d="M{} {} m{} 0 l{} 0 m{} {} l{} {} l{} {} M{} {} l{} {} l{} {}"/>"#,
                center.x,
                center.y,
                -half_width,
                2.0 * half_width,
                -ARROW_HEAD,
                -ARROW_HEAD / 2.0,
                ARROW_HEAD,
                ARROW_HEAD / 2.0,
                -ARROW_HEAD,
                ARROW_HEAD / 2.0,
                center.x - half_width + ARROW_HEAD,
                center.y - ARROW_HEAD / 2.0,
                -ARROW_HEAD,
                ARROW_HEAD / 2.0,
                ARROW_HEAD,
                ARROW_HEAD / 2.0
            );
        }
        Shape::Label {
            anchor,
            text,
            font_size,
            role,
        } => {
            let role = match role {
                LabelRole::Reflection => "reflection",
                LabelRole::Motion => "motion",
            };
            let _ = write!(
                out,
                r#"<text data-kind="{kind}" data-role="{role}" style="{css}" x="{}" y="{}" font-size="{font_size}" text-anchor="middle">{}</text>"#,
                anchor.x,
                anchor.y,
                escape(text)
            );
        }
    }
}

/// Escapes text content for XML.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
