//! SVG Graph - render 2-D Cartesian charts as SVG markup
//!
//! This library turns a layout (canvas, margins, colors, axis ranges) and a
//! list of points into an SVG document, scaling between math space (data
//! units) and graph space (pixels).
//!
//! # Example
//!
//! ```rust
//! use svg_graph::{render, DataPoint, DataPoints, Layout};
//!
//! let mut layout = Layout::default();
//! layout.screen.width = 400;
//! layout.screen.height = 300;
//! layout.graph.xaxis_unitmax = 10;
//! layout.graph.yaxis_unitmax = 10;
//!
//! let points = DataPoints::new(vec![DataPoint::new(5, 5, 3)]);
//! let svg = render(&layout, &points).unwrap();
//! assert!(svg.contains("<circle"));
//! assert!(svg.ends_with("</svg>"));
//! ```

pub mod diagnostics;
pub mod error;
pub mod model;
pub mod renderer;
pub mod scale;

use std::path::Path;

pub use diagnostics::{Diagnostics, NullDiagnostics, TracingDiagnostics};
pub use error::{LoadError, ScaleError};
pub use model::{DataPoint, DataPoints, Layout, Margin};
pub use renderer::{render_chart, RenderConfig};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error reading a layout or point file
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// An axis range cannot be scaled
    #[error("scale error: {0}")]
    Scale(#[from] ScaleError),
}

/// Render with default configuration, reporting through `tracing`
pub fn render(layout: &Layout, points: &DataPoints) -> Result<String, RenderError> {
    render_with_config(layout, points, RenderConfig::default())
}

/// Render with custom configuration, reporting through `tracing`
///
/// # Example
///
/// ```rust
/// use svg_graph::{render_with_config, DataPoints, Layout, RenderConfig};
///
/// let mut layout = Layout::default();
/// layout.graph.xaxis_unitmax = 10;
/// layout.graph.yaxis_unitmax = 10;
///
/// let config = RenderConfig::new().with_standalone(false);
/// let svg = render_with_config(&layout, &DataPoints::default(), config).unwrap();
/// assert!(svg.starts_with("<svg"));
/// ```
pub fn render_with_config(
    layout: &Layout,
    points: &DataPoints,
    config: RenderConfig,
) -> Result<String, RenderError> {
    render_chart(layout, points, config, &TracingDiagnostics)
}

/// Load a layout file and a point file, then render them
pub fn render_files(
    layout_path: &Path,
    points_path: &Path,
    config: RenderConfig,
    diagnostics: &dyn Diagnostics,
) -> Result<String, RenderError> {
    let layout = Layout::from_file(layout_path)?;
    let points = DataPoints::from_file(points_path)?;
    diagnostics.debug(&format!(
        "loaded layout '{}' and {} points",
        layout_path.display(),
        points.len()
    ));
    render_chart(&layout, &points, config, diagnostics)
}
