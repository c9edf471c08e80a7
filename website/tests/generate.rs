use std::fs;

use anyhow::Result;
use sfm_model::serializer::svg::to_svg;
use sfm_model::{design, Configuration, Design, LayoutRequest, ModulationParameters};

fn sample() -> Result<Design> {
    Ok(design(
        &LayoutRequest {
            configuration: Configuration::UniqueReferences,
            num_measurements: 2,
            axis_separation: 0.8,
            solution_index: 1,
        },
        &ModulationParameters::new(1e9, 1e4)?,
    )?)
}

#[test]
fn writes_every_output() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let design = sample()?;
    let written = sfm_website::generate(dir.path(), &design)?;
    assert_eq!(written.len(), 4);
    for path in &written {
        assert!(path.starts_with(dir.path()));
        assert!(path.is_file(), "{} missing", path.display());
    }
    assert!(dir.path().join("css/style.css").is_file());
    Ok(())
}

#[test]
fn drawing_is_exported_verbatim_and_inline() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let design = sample()?;
    sfm_website::generate(dir.path(), &design)?;
    let svg = fs::read_to_string(dir.path().join("interferometer.svg"))?;
    assert_eq!(svg, to_svg(&design.layout));
    let html = fs::read_to_string(dir.path().join("index.html"))?;
    assert!(html.contains(svg.trim_end()));
    assert!(html.contains("Unique references"));
    Ok(())
}

#[test]
fn axis_table_has_every_pair() -> Result<()> {
    let dir = tempfile::tempdir()?;
    sfm_website::generate(dir.path(), &sample()?)?;
    let axes: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("axes.json"))?)?;
    let rows = axes.as_array().map(Vec::len);
    assert_eq!(rows, Some(6));
    assert_eq!(axes[0]["label"], "αβ");
    assert_eq!(axes[0]["selected"], true);
    assert_eq!(axes[5]["label"], "γδ");
    assert_eq!(axes[5]["selected"], true);
    Ok(())
}
