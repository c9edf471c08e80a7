//! SFM interferometer designer core.
//!
//! The `sfm-model` crate turns a handful of physical parameters into the
//! optical layout of a sinusoidal-frequency-modulation interferometer: a
//! positioned schematic plus a table of interference axes with their
//! lengths and beat-frequency bandwidths. Every computation is a pure
//! function of its inputs.
//!
//! # Entry Point
//!
//! ```
//! use sfm_model::{design, Configuration, LayoutRequest, ModulationParameters};
//!
//! let modulation = ModulationParameters::new(1e9, 1e4)?;
//! let request = LayoutRequest {
//!     configuration: Configuration::SharedReference,
//!     num_measurements: 2,
//!     axis_separation: 1.0,
//!     solution_index: 0,
//! };
//! let design = design(&request, &modulation)?;
//! assert_eq!(design.reflections, 3);
//! assert_eq!(design.table.rows.len(), 3);
//! # Ok::<(), sfm_model::DesignError>(())
//! ```
//!
//! # Serialization
//!
//! ```
//! # use sfm_model::{design, Configuration, LayoutRequest, ModulationParameters};
//! # let modulation = ModulationParameters::new(1e9, 1e4)?;
//! # let request = LayoutRequest {
//! #     configuration: Configuration::UniqueReferences,
//! #     num_measurements: 1,
//! #     axis_separation: 1.0,
//! #     solution_index: 0,
//! # };
//! # let design = design(&request, &modulation)?;
//! let svg = sfm_model::serializer::svg::to_svg(&design.layout);
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), sfm_model::DesignError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod axes;
pub mod catalog;
pub mod design;
pub mod error;
pub mod layout;
pub mod model;
pub mod physics;
pub mod scene;
pub mod serializer;

pub use axes::{axis_label, enumerate_axes, measurement_axes, normalized_length, Axis, ALPHABET};
pub use catalog::{Catalog, CatalogEntry, Solution};
pub use design::{advisories, design, Advisory, Design};
pub use error::{DesignError, Result};
pub use layout::{axis_table, layout, AxisRow, AxisTable, LayoutInput};
pub use model::{Configuration, LayoutRequest, ModulationParameters, Resolved};
pub use physics::{
    beat_frequency_bandwidth, recommended_axis_separation, recommended_max_stroke,
    reflection_count,
};
pub use scene::{Canvas, LabelRole, Layout, Point, SceneElement, Shape, Style};
