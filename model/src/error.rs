//! Error taxonomy for the designer core.
//!
//! Every failure is a deterministic consequence of the inputs; nothing here
//! is transient and nothing is worth retrying.

use thiserror::Error;

/// Errors raised while resolving parameters or computing a layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DesignError {
    /// A configuration tag outside `SHARED_REFERENCE` / `UNIQUE_REFERENCES`.
    #[error("invalid configuration `{0}`: expected SHARED_REFERENCE or UNIQUE_REFERENCES")]
    InvalidConfiguration(String),

    /// A solution index past the end of the catalog list for a reflection count.
    #[error(
        "solution index {index} is out of range: {available} solution(s) catalogued for {reflections} reflections"
    )]
    OutOfRangeSolution {
        /// The requested index.
        index: usize,
        /// Number of solutions catalogued for `reflections`.
        available: usize,
        /// The resolved reflection count.
        reflections: usize,
    },

    /// A reflection count the catalog does not cover.
    #[error("no catalogued solutions for {0} reflections")]
    UnsupportedReflectionCount(usize),

    /// Parameters that cannot describe a physical interferometer.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// A reflection index past the end of the label alphabet.
    #[error("reflection index {index} has no label: the alphabet has {alphabet} symbols")]
    LabelOutOfRange {
        /// The reflection index.
        index: usize,
        /// Alphabet length.
        alphabet: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DesignError>;
