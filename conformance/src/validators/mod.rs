//! Validators grouped by the artifact they inspect.

pub mod artifacts;
pub mod catalog;
pub mod layout;
