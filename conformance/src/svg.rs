//! Minimal reader for SVG documents written by `sfm_model::serializer::svg`.
//!
//! Recovers the view box and, for every element, its `data-kind` and anchor
//! coordinates exactly as written, so they can be compared bit for bit with
//! the scene they came from.

use anyhow::{anyhow, bail, Context, Result};
use regex::Regex;
use sfm_model::Point;

/// An element read back from an SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedElement {
    /// Value of the `data-kind` attribute.
    pub kind: String,
    /// First absolute coordinate: `M x y`, `x1 y1`, or `x y`.
    pub anchor: Point,
    /// End point of fibres and beams.
    pub end: Option<Point>,
    /// Unescaped text content of labels.
    pub text: Option<String>,
}

/// A parsed SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    /// `viewBox` as `(min_x, min_y, width, height)`.
    pub view_box: (f64, f64, f64, f64),
    /// Elements in document order.
    pub elements: Vec<ParsedElement>,
}

impl SvgDocument {
    /// Returns true if `p` lies inside the view box, edges included.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        let (x, y, w, h) = self.view_box;
        p.x >= x && p.x <= x + w && p.y >= y && p.y <= y + h
    }
}

/// Parses an SVG document.
///
/// # Errors
///
/// Returns an error if the root element, its `viewBox`, or any element
/// coordinate is missing or unparsable.
pub fn parse(text: &str) -> Result<SvgDocument> {
    let root = Regex::new(r#"<svg\s([^>]*)>"#)?;
    let element = Regex::new(r#"<(path|line|text)\s([^>]*?)/?>(?:([^<]*)</text>)?"#)?;
    let attribute = Regex::new(r#"([a-zA-Z][a-zA-Z0-9-]*)="([^"]*)""#)?;
    let path_start = Regex::new(r"^M(\S+) (\S+)")?;
    let path_end = Regex::new(r"(\S+) (\S+)$")?;

    let root_attrs = root
        .captures(text)
        .and_then(|c| c.get(1))
        .ok_or_else(|| anyhow!("missing <svg> root element"))?
        .as_str();
    let attrs = |s: &str| -> Vec<(String, String)> {
        attribute
            .captures_iter(s)
            .map(|c| (c[1].to_string(), c[2].to_string()))
            .collect()
    };
    let root_attrs = attrs(root_attrs);
    if lookup(&root_attrs, "xmlns") != Some("http://www.w3.org/2000/svg") {
        bail!("<svg> root lacks the SVG namespace");
    }
    let view_box = lookup(&root_attrs, "viewBox").ok_or_else(|| anyhow!("missing viewBox"))?;
    let view_box = parse_view_box(view_box)?;

    let mut elements = Vec::new();
    for caps in element.captures_iter(text) {
        let tag = &caps[1];
        let attributes = attrs(&caps[2]);
        let Some(kind) = lookup(&attributes, "data-kind") else {
            continue;
        };
        let number = |name: &str| -> Result<f64> {
            let raw = lookup(&attributes, name)
                .ok_or_else(|| anyhow!("<{tag} data-kind=\"{kind}\"> lacks {name}"))?;
            parse_number(raw)
        };
        let (anchor, end, label) = match tag {
            "line" => (
                Point::new(number("x1")?, number("y1")?),
                Some(Point::new(number("x2")?, number("y2")?)),
                None,
            ),
            "text" => (
                Point::new(number("x")?, number("y")?),
                None,
                Some(unescape(caps.get(3).map_or("", |m| m.as_str()))),
            ),
            _ => {
                let d = lookup(&attributes, "d")
                    .ok_or_else(|| anyhow!("<path data-kind=\"{kind}\"> lacks d"))?;
                let start = path_start
                    .captures(d)
                    .ok_or_else(|| anyhow!("path {d:?} does not start with M x y"))?;
                let anchor = Point::new(parse_number(&start[1])?, parse_number(&start[2])?);
                let end = if kind == "fibre" {
                    let tail = path_end
                        .captures(d)
                        .ok_or_else(|| anyhow!("fibre path {d:?} has no end point"))?;
                    Some(Point::new(parse_number(&tail[1])?, parse_number(&tail[2])?))
                } else {
                    None
                };
                (anchor, end, None)
            }
        };
        elements.push(ParsedElement {
            kind: kind.to_string(),
            anchor,
            end,
            text: label,
        });
    }

    Ok(SvgDocument { view_box, elements })
}

fn lookup<'a>(attributes: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

fn parse_number(raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .with_context(|| format!("not a number: {raw:?}"))
}

fn parse_view_box(raw: &str) -> Result<(f64, f64, f64, f64)> {
    let parts = raw
        .split_whitespace()
        .map(parse_number)
        .collect::<Result<Vec<f64>>>()?;
    match parts.as_slice() {
        [x, y, w, h] => Ok((*x, *y, *w, *h)),
        _ => bail!("viewBox must have four numbers, got {raw:?}"),
    }
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}
