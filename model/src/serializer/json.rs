//! JSON serializer for axis tables and designs.

use serde_json::{json, Value};

use crate::design::Design;
use crate::layout::AxisTable;

/// File name used for the exported axis table.
pub const AXES_FILE_NAME: &str = "axes.json";

/// Serializes an axis table to a JSON array, one object per axis.
#[must_use]
pub fn table_to_json(table: &AxisTable) -> Value {
    let rows: Vec<Value> = table
        .rows
        .iter()
        .map(|row| {
            json!({
                "i": row.axis.i,
                "j": row.axis.j,
                "label": row.label,
                "normalizedLength": row.normalized_length,
                "mechanicalLength": row.mechanical_length,
                "opticalPathDifference": row.optical_path_difference,
                "bandwidth": row.bandwidth,
                "selected": row.selected
            })
        })
        .collect();
    Value::Array(rows)
}

/// Serializes a whole design.
///
/// # Errors
///
/// Returns an error if a value cannot be represented in JSON, e.g. a
/// non-finite float.
pub fn design_to_json(design: &Design) -> serde_json::Result<Value> {
    serde_json::to_value(design)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::design;
    use crate::error::Result;
    use crate::model::{Configuration, LayoutRequest, ModulationParameters};

    fn sample() -> Result<Design> {
        design(
            &LayoutRequest {
                configuration: Configuration::SharedReference,
                num_measurements: 2,
                axis_separation: 1.0,
                solution_index: 0,
            },
            &ModulationParameters::new(1e9, 1e4)?,
        )
    }

    #[test]
    fn table_rows_keep_enumeration_order() -> Result<()> {
        let value = table_to_json(&sample()?.table);
        let rows = value.as_array().map(Vec::len);
        assert_eq!(rows, Some(3));
        assert_eq!(value[0]["label"], "αβ");
        assert_eq!(value[1]["normalizedLength"], 3);
        assert_eq!(value[2]["selected"], false);
        Ok(())
    }

    #[test]
    fn design_serializes_configuration_tag() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let value = design_to_json(&sample()?)?;
        assert_eq!(value["request"]["configuration"], "SHARED_REFERENCE");
        assert_eq!(value["reflections"], 3);
        assert_eq!(value["solution"]["name"], "[0, 1, 3]");
        Ok(())
    }
}
