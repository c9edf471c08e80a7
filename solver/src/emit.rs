//! Output helpers: Rust source and JSON renderings of a generated catalog.

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{json, Value};
use sfm_model::catalog::display_name;

use crate::placement::Placement;

/// A Rust source file under construction.
pub struct RustFile {
    /// Accumulated source text.
    pub buf: String,
}

impl RustFile {
    /// Starts a file with a generated-code banner and a module doc comment.
    #[must_use]
    pub fn new(doc: &str) -> Self {
        let mut buf = String::with_capacity(4096);
        buf.push_str("// @generated by sfm-solver. Do not edit.\n");
        for line in doc.lines() {
            if line.is_empty() {
                buf.push_str("//!\n");
            } else {
                let _ = writeln!(buf, "//! {line}");
            }
        }
        buf.push('\n');
        Self { buf }
    }

    /// Appends one line.
    pub fn line(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Returns the finished source.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Renders the catalog as the `SOLUTIONS` table used by `sfm-model`.
#[must_use]
pub fn render_rust(catalog: &[(usize, Vec<Placement>)]) -> String {
    let mut f = RustFile::new(
        "Reflection placements keyed by reflection count.\n\n\
         Every placement has pairwise-distinct axis lengths.",
    );
    f.line("pub const SOLUTIONS: &[(usize, &[&[usize]])] = &[");
    for (size, placements) in catalog {
        let _ = writeln!(f.buf, "    (");
        let _ = writeln!(f.buf, "        {size},");
        f.line("        &[");
        for placement in placements {
            let _ = writeln!(f.buf, "            &{},", display_name(placement));
        }
        f.line("        ],");
        f.line("    ),");
    }
    f.line("];");
    f.finish()
}

/// Renders the catalog as JSON: an object keyed by reflection count whose
/// values list `{ value, solution, name }` entries.
#[must_use]
pub fn render_json(catalog: &[(usize, Vec<Placement>)]) -> Value {
    let mut map = serde_json::Map::new();
    for (size, placements) in catalog {
        let entries: Vec<Value> = placements
            .iter()
            .enumerate()
            .map(|(index, placement)| {
                json!({
                    "value": index,
                    "solution": placement.to_vec(),
                    "name": display_name(placement),
                })
            })
            .collect();
        map.insert(size.to_string(), Value::Array(entries));
    }
    Value::Object(map)
}

/// Writes content to a file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if directories cannot be created or the file cannot be written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Cannot write file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Vec<(usize, Vec<Placement>)> {
        vec![
            (2, vec![Placement::new(vec![0, 1])]),
            (3, vec![Placement::new(vec![0, 1, 3]), Placement::new(vec![0, 2, 3])]),
        ]
    }

    #[test]
    fn rust_table_lists_every_placement() {
        let src = render_rust(&small());
        assert!(src.starts_with("// @generated"));
        assert!(src.contains("pub const SOLUTIONS: &[(usize, &[&[usize]])] = &["));
        assert!(src.contains("            &[0, 1, 3],\n"));
        assert!(src.contains("            &[0, 2, 3],\n"));
        assert!(src.trim_end().ends_with("];"));
    }

    #[test]
    fn json_is_keyed_by_size() {
        let value = render_json(&small());
        assert_eq!(value["3"][1]["name"], "[0, 2, 3]");
        assert_eq!(value["3"][1]["value"], 1);
        assert_eq!(value["2"][0]["solution"], json!([0, 1]));
    }
}
