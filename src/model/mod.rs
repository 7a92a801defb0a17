//! Input data for a chart render
//!
//! A render consumes two documents: the [`Layout`] describing the canvas,
//! graph area and four margins, and the [`DataPoints`] to plot. Both are
//! plain serde records read once and never mutated afterwards.

pub mod layout;
pub mod points;

pub use layout::{GraphData, Layout, Margin, Margins, ScreenData};
pub use points::{DataPoint, DataPoints};

use std::path::Path;

use crate::error::LoadError;

/// Read a file into a string, attaching the path to any I/O error
pub(crate) fn read_source(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))
}
