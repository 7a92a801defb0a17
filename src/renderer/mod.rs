//! SVG renderer for charts
//!
//! `svg` holds the primitive emitters, `margin` composes axis lines, tics
//! and labels for one side, and `chart` assembles a full document.

pub mod chart;
pub mod config;
pub mod margin;
pub mod svg;

pub use chart::{render_chart, ChartBuilder, GraphArea};
pub use config::RenderConfig;
pub use svg::{Side, TextAnchor};
