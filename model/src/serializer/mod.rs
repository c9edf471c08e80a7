//! Serializers for computed designs.
//!
//! - **SVG** ([`svg`]): the schematic, written to `interferometer.svg`
//! - **JSON** ([`json`]): the axis table and full design, for tooling

#[cfg(feature = "serializers")]
pub mod json;
pub mod svg;
