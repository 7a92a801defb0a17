//! Configuration for chart rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to start the document with an XML declaration
    pub standalone: bool,

    /// Whether to put each fragment on its own line
    pub pretty_print: bool,

    /// Join consecutive points with path segments
    pub connect_points: bool,

    /// Prefix for point ids (e.g., "point-" for "point-0"); no ids when unset
    pub point_id_prefix: Option<String>,

    /// Fill for plotted points; the layout's stroke color when unset
    pub point_fill: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            connect_points: false,
            point_id_prefix: Some("point-".to_string()),
            point_fill: None,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set whether to draw a path through the points
    pub fn with_connect_points(mut self, connect: bool) -> Self {
        self.connect_points = connect;
        self
    }

    /// Set the point id prefix
    pub fn with_point_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.point_id_prefix = Some(prefix.into());
        self
    }

    /// Emit points without ids
    pub fn without_point_ids(mut self) -> Self {
        self.point_id_prefix = None;
        self
    }

    /// Set the point fill color
    pub fn with_point_fill(mut self, fill: impl Into<String>) -> Self {
        self.point_fill = Some(fill.into());
        self
    }
}
