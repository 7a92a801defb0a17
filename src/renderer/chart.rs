//! Chart document assembly
//!
//! Fragments are collected in drawing order (background, grid, margins,
//! points) and joined between the document start and end tags.

use crate::diagnostics::Diagnostics;
use crate::model::{DataPoint, DataPoints, Layout};
use crate::scale::scale_math_to_graph;
use crate::RenderError;

use super::margin::render_margin;
use super::svg::{
    grid_step, svg_end, svg_grid_spaced, svg_path, svg_point, svg_rect, svg_start, xml_declaration,
};
use super::RenderConfig;

/// The plotted rectangle inside the margins, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphArea {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl GraphArea {
    /// The screen minus the left/right and top/bottom margin sizes
    pub fn from_layout(layout: &Layout) -> Self {
        let screen = &layout.screen;
        let margs = &layout.margs;
        Self {
            x: screen.xorg.saturating_add(margs.left.size),
            y: screen.yorg.saturating_add(margs.top.size),
            width: screen
                .width
                .saturating_sub(margs.left.size)
                .saturating_sub(margs.right.size),
            height: screen
                .height
                .saturating_sub(margs.top.size)
                .saturating_sub(margs.bott.size),
        }
    }

    pub fn right(&self) -> i64 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i64 {
        self.y.saturating_add(self.height)
    }

    pub fn center_x(&self) -> i64 {
        self.x.saturating_add(self.width / 2)
    }

    pub fn center_y(&self) -> i64 {
        self.y.saturating_add(self.height / 2)
    }

    /// Map a math-space point to screen pixels; y grows upward in math space
    pub fn project(&self, layout: &Layout, point: &DataPoint) -> (i64, i64) {
        let xr = layout.graph.x_range();
        let yr = layout.graph.y_range();
        let dx = scale_math_to_graph(point.x.saturating_sub(xr.min), xr.min, xr.max, 0, self.width);
        let dy = scale_math_to_graph(point.y.saturating_sub(yr.min), yr.min, yr.max, 0, self.height);
        (self.x.saturating_add(dx), self.bottom().saturating_sub(dy))
    }
}

/// Build a chart document incrementally
pub struct ChartBuilder<'a> {
    config: RenderConfig,
    layout: &'a Layout,
    area: GraphArea,
    diagnostics: &'a dyn Diagnostics,
    elements: Vec<String>,
}

impl<'a> ChartBuilder<'a> {
    /// Create a new chart builder
    pub fn new(config: RenderConfig, layout: &'a Layout, diagnostics: &'a dyn Diagnostics) -> Self {
        Self {
            config,
            layout,
            area: GraphArea::from_layout(layout),
            diagnostics,
            elements: vec![],
        }
    }

    /// Append a raw fragment
    pub fn push(&mut self, fragment: String) {
        if !fragment.is_empty() {
            self.elements.push(fragment);
        }
    }

    /// Fill the screen, in the testing colors when testing
    pub fn add_background(&mut self) {
        let layout = self.layout;
        let (fill, stroke) = if layout.testing {
            (&layout.testing_background_color, &layout.testing_stroke_color)
        } else {
            (&layout.background_color, &layout.stroke_color)
        };
        let screen = &layout.screen;
        self.push(svg_rect(
            Some("background"),
            fill,
            stroke,
            None,
            screen.xorg,
            screen.yorg,
            screen.width,
            screen.height,
        ));

        if layout.testing {
            let area = self.area;
            let id = if layout.graph.label.is_empty() {
                "graph"
            } else {
                layout.graph.label.as_str()
            };
            self.push(svg_rect(
                Some(id),
                "none",
                &layout.testing_stroke_color,
                None,
                area.x,
                area.y,
                area.width,
                area.height,
            ));
        }
    }

    /// Grid over the graph area with one cell per `GridUnit` math units
    ///
    /// Rows are `height / y cells` pixels apart and columns `width / x cells`,
    /// so each cell spans `GridUnit` on both axes.
    pub fn add_grid(&mut self) {
        let graph = &self.layout.graph;
        if !graph.grid {
            return;
        }
        if graph.grid_unit <= 0 {
            self.diagnostics
                .warn(&format!("add_grid: GridUnit == {} draws no grid", graph.grid_unit));
            return;
        }
        let xcells = graph.xaxis_unitmax.saturating_sub(graph.xaxis_unitmin) / graph.grid_unit;
        let ycells = graph.yaxis_unitmax.saturating_sub(graph.yaxis_unitmin) / graph.grid_unit;
        let area = self.area;
        let steps = grid_step(area.height, ycells).zip(grid_step(area.width, xcells));
        let Some((row_step, column_step)) = steps else {
            self.diagnostics.warn(&format!(
                "add_grid: cannot divide {}x{} into {xcells}x{ycells} cells",
                area.width, area.height
            ));
            return;
        };
        let grid = svg_grid_spaced(
            self.diagnostics,
            &graph.grid_color,
            area.x,
            area.y,
            area.width,
            area.height,
            row_step,
            column_step,
        );
        // the grid group carries its own trailing newline
        self.push(grid.trim_end().to_string());
    }

    /// Axis lines, tics and labels for all four sides
    pub fn add_margins(&mut self) {
        let layout = self.layout;
        for margin in layout.margs.iter() {
            for fragment in render_margin(self.diagnostics, layout, &self.area, margin) {
                self.push(fragment);
            }
        }
    }

    /// One circle per point, in input order
    pub fn add_points(&mut self, points: &DataPoints) {
        let layout = self.layout;
        let fill = self
            .config
            .point_fill
            .clone()
            .unwrap_or_else(|| layout.stroke_color.clone());
        for (i, point) in points.iter().enumerate() {
            let (cx, cy) = self.area.project(layout, point);
            let id = self
                .config
                .point_id_prefix
                .as_ref()
                .map(|prefix| format!("{prefix}{i}"));
            self.push(svg_point(
                id.as_deref(),
                &fill,
                &layout.stroke_color,
                1,
                cx,
                cy,
                point.r,
            ));
        }
    }

    /// Straight cubic segments between consecutive points
    pub fn add_series(&mut self, points: &DataPoints) {
        let layout = self.layout;
        let projected: Vec<_> = points
            .iter()
            .map(|p| self.area.project(layout, p))
            .collect();
        for (i, pair) in projected.windows(2).enumerate() {
            let (from, to) = (pair[0], pair[1]);
            self.push(svg_path(
                &format!("series-{i}"),
                "transparent",
                &layout.stroke_color,
                1,
                from,
                from,
                to,
                to,
            ));
        }
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let nl = if self.config.pretty_print { "\n" } else { "" };
        let screen = &self.layout.screen;
        let id = (!screen.label.is_empty()).then_some(screen.label.as_str());

        let mut svg = String::new();
        if self.config.standalone {
            svg.push_str(&xml_declaration());
            svg.push_str(nl);
        }
        svg.push_str(&svg_start(id, screen.width, screen.height));
        svg.push_str(nl);
        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }
        svg.push_str(&svg_end());
        svg
    }
}

/// Render a complete chart document
///
/// Both axis ranges are checked before any scaling so a zero-width range
/// fails with [`RenderError::Scale`] instead of producing saturated
/// coordinates.
pub fn render_chart(
    layout: &Layout,
    points: &DataPoints,
    config: RenderConfig,
    diagnostics: &dyn Diagnostics,
) -> Result<String, RenderError> {
    layout.graph.x_range().validate("x axis", 0)?;
    layout.graph.y_range().validate("y axis", 0)?;

    let connect = config.connect_points;
    let mut builder = ChartBuilder::new(config, layout, diagnostics);
    builder.add_background();
    builder.add_grid();
    builder.add_margins();
    if connect {
        builder.add_series(points);
    }
    builder.add_points(points);

    diagnostics.debug(&format!(
        "rendered {} fragments for {} points",
        builder.elements.len(),
        points.len()
    ));
    Ok(builder.build())
}
