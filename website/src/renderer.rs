//! HTML rendering.

use std::fmt::Write as FmtWrite;

use sfm_model::serializer::svg::{escape, SVG_FILE_NAME};

use crate::model::Summary;

/// Renders the complete page: parameters, advisories, drawing, axis table.
#[must_use]
pub fn render_page(summary: &Summary, svg: &str) -> String {
    let mut body = String::new();
    body.push_str(&render_parameters(summary));
    body.push_str(&render_advisories(&summary.advisories));
    let _ = write!(
        body,
        "<section class=\"drawing\">\n<h2>Layout</h2>\n{svg}<p class=\"no-print\"><a href=\"{SVG_FILE_NAME}\" download=\"{SVG_FILE_NAME}\">Download SVG</a></p>\n</section>\n"
    );
    body.push_str(&render_axes(summary));

    let title = escape(&summary.title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="css/style.css">
</head>
<body>
<main>
<h1>{title}</h1>
{body}</main>
</body>
</html>
"#
    )
}

/// Renders the parameter list as a definition list.
#[must_use]
pub fn render_parameters(summary: &Summary) -> String {
    let mut out = String::from("<section class=\"parameters\">\n<h2>Parameters</h2>\n<dl>\n");
    for p in &summary.parameters {
        let unit = if p.unit.is_empty() {
            String::new()
        } else {
            format!(" {}", p.unit)
        };
        let _ = writeln!(
            out,
            "<dt>{}</dt><dd>{}{unit}</dd>",
            escape(p.name),
            escape(&p.value)
        );
    }
    out.push_str("</dl>\n</section>\n");
    out
}

/// Renders advisories; empty when there are none.
#[must_use]
pub fn render_advisories(advisories: &[String]) -> String {
    if advisories.is_empty() {
        return String::new();
    }
    let mut out = String::from("<section class=\"advisories\" role=\"status\">\n<ul>\n");
    for a in advisories {
        let _ = writeln!(out, "<li>{}</li>", escape(a));
    }
    out.push_str("</ul>\n</section>\n");
    out
}

/// Renders the axis table. Measurement axes get the `selected` class.
#[must_use]
pub fn render_axes(summary: &Summary) -> String {
    let mut out = String::from(
        "<section class=\"axes\">\n<h2>Interference axes</h2>\n<table>\n<thead><tr>\
         <th scope=\"col\">Axis</th>\
         <th scope=\"col\">Normalized length</th>\
         <th scope=\"col\">Mechanical length (m)</th>\
         <th scope=\"col\">Optical path difference (m)</th>\
         <th scope=\"col\">Bandwidth (kHz)</th>\
         </tr></thead>\n<tbody>\n",
    );
    for row in &summary.axes {
        let class = if row.selected { " class=\"selected\"" } else { "" };
        let _ = writeln!(
            out,
            "<tr{class}><th scope=\"row\">{}</th><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&row.label),
            row.normalized_length,
            row.mechanical_length,
            row.optical_path_difference,
            row.bandwidth_khz
        );
    }
    out.push_str("</tbody>\n</table>\n</section>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AxisView, Parameter};

    fn summary() -> Summary {
        Summary {
            title: "A & B".to_string(),
            parameters: vec![Parameter {
                name: "Axis separation",
                value: "0.6".to_string(),
                unit: "m",
            }],
            axes: vec![AxisView {
                label: "αβ".to_string(),
                normalized_length: 1,
                mechanical_length: 0.6,
                optical_path_difference: 1.2,
                bandwidth_khz: 251.501_403,
                selected: true,
            }],
            advisories: Vec::new(),
        }
    }

    #[test]
    fn page_escapes_title_and_embeds_svg() {
        let html = render_page(&summary(), "<svg></svg>\n");
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<svg></svg>"));
        assert!(html.contains("download=\"interferometer.svg\""));
    }

    #[test]
    fn parameters_carry_units() {
        assert!(render_parameters(&summary()).contains("<dt>Axis separation</dt><dd>0.6 m</dd>"));
    }

    #[test]
    fn selected_axes_are_marked() {
        let html = render_axes(&summary());
        assert!(html.contains("<tr class=\"selected\"><th scope=\"row\">αβ</th><td>1</td><td>0.6</td><td>1.2</td><td>251.501403</td></tr>"));
    }

    #[test]
    fn no_advisories_render_nothing() {
        assert!(render_advisories(&[]).is_empty());
        assert!(render_advisories(&["too close".to_string()]).contains("<li>too close</li>"));
    }
}
