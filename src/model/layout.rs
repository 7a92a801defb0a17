//! Layout configuration: screen, graph area, global style and margins
//!
//! Field names follow the layout file format exactly (`Screen.Xorg`,
//! `Graph.XaxisUnitmax`, `Margs.Left.Ticfontoffset`, ...). Every field is
//! optional on input and falls back to its zero value.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::scale::ScaleRange;

/// The rendered canvas
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ScreenData {
    pub label: String,
    pub xorg: i64,
    pub yorg: i64,
    pub width: i64,
    pub height: i64,
}

/// The plotted area and its math-space axes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GraphData {
    pub label: String,
    /// Name of the coordinate space, informational only
    pub space: String,
    pub xaxis_label: String,
    pub xaxis_unitmax: i64,
    pub xaxis_unitmin: i64,
    pub yaxis_label: String,
    pub yaxis_unitmax: i64,
    pub yaxis_unitmin: i64,
    pub grid: bool,
    /// Math units per grid cell
    pub grid_unit: i64,
    pub grid_color: String,
}

impl GraphData {
    pub fn x_range(&self) -> ScaleRange {
        ScaleRange::new(self.xaxis_unitmin, self.xaxis_unitmax)
    }

    pub fn y_range(&self) -> ScaleRange {
        ScaleRange::new(self.yaxis_unitmin, self.yaxis_unitmax)
    }
}

/// One side strip around the graph area
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Margin {
    /// `Left`, `Bott`, `Right` or `Top`
    pub side: String,
    /// Strip thickness in pixels
    pub size: i64,
    pub axis_line: bool,
    pub stroke: String,
    pub stroke_wt: i64,
    /// Pixels between tics
    pub ticunit: i64,
    pub ticsize: i64,
    pub ticstroke: i64,
    pub ticfontpx: i64,
    pub ticfontoffset: i64,
    pub labelpx: i64,
    pub labeltext: String,
}

/// The four margins, keyed by side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Margins {
    pub left: Margin,
    pub bott: Margin,
    pub right: Margin,
    pub top: Margin,
}

impl Margins {
    /// Margins in drawing order
    pub fn iter(&self) -> impl Iterator<Item = &Margin> {
        [&self.left, &self.bott, &self.right, &self.top].into_iter()
    }
}

/// Complete layout for one chart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Layout {
    /// Outline margins and paint the frame in the testing colors
    pub testing: bool,
    pub testing_background_color: String,
    pub testing_stroke_color: String,
    pub background_color: String,
    pub stroke_color: String,
    pub font_family: String,
    pub screen: ScreenData,
    pub graph: GraphData,
    pub margs: Margins,
}

impl Layout {
    /// Load a layout file; `.toml` files are read as TOML, anything else as JSON
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = super::read_source(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT_JSON: &str = r##"{
        "Testing": true,
        "TestingBackgroundColor": "#eee",
        "TestingStrokeColor": "red",
        "BackgroundColor": "white",
        "StrokeColor": "black",
        "FontFamily": "Verdana",
        "Screen": {"Label": "s1", "Xorg": 0, "Yorg": 0, "Width": 1000, "Height": 800},
        "Graph": {
            "Label": "g1", "Space": "cartesian",
            "XaxisLabel": "time", "XaxisUnitmax": 100, "XaxisUnitmin": 0,
            "YaxisLabel": "load", "YaxisUnitmax": 50, "YaxisUnitmin": -50,
            "Grid": true, "GridUnit": 10, "GridColor": "#ccc"
        },
        "Margs": {
            "Left": {"Side": "Left", "Size": 100, "AxisLine": true, "Stroke": "black",
                     "StrokeWt": 2, "Ticunit": 50, "Ticsize": 10, "Ticstroke": 1,
                     "Ticfontpx": 12, "Ticfontoffset": 5, "Labelpx": 16, "Labeltext": "Load"},
            "Bott": {"Side": "Bott", "Size": 80}
        }
    }"##;

    #[test]
    fn test_parse_json_layout() {
        let layout = Layout::from_json_str(LAYOUT_JSON).expect("Should parse");
        assert!(layout.testing);
        assert_eq!(layout.font_family, "Verdana");
        assert_eq!(layout.screen.width, 1000);
        assert_eq!(layout.graph.yaxis_unitmin, -50);
        assert_eq!(layout.graph.grid_color, "#ccc");
        assert_eq!(layout.margs.left.ticfontoffset, 5);
        assert_eq!(layout.margs.left.labeltext, "Load");
        assert_eq!(layout.margs.bott.size, 80);
    }

    #[test]
    fn test_missing_fields_are_zero_valued() {
        let layout = Layout::from_json_str(LAYOUT_JSON).expect("Should parse");
        assert_eq!(layout.margs.right, Margin::default());
        assert_eq!(layout.margs.bott.ticunit, 0);
        assert!(!layout.margs.bott.axis_line);
    }

    #[test]
    fn test_parse_toml_layout() {
        let toml_str = r##"
FontFamily = "Arial"

[Screen]
Label = "s1"
Width = 500
Height = 400

[Graph]
XaxisUnitmax = 10
Grid = false

[Margs.Top]
Side = "Top"
Size = 20
"##;
        let layout = Layout::from_toml_str(toml_str).expect("Should parse");
        assert_eq!(layout.font_family, "Arial");
        assert_eq!(layout.screen.height, 400);
        assert_eq!(layout.graph.xaxis_unitmax, 10);
        assert_eq!(layout.margs.top.side, "Top");
    }

    #[test]
    fn test_invalid_json_error() {
        let result = Layout::from_json_str("{ not json");
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn test_error_with_zero_value_fallback() {
        let layout = Layout::from_json_str("42").unwrap_or_default();
        assert_eq!(layout, Layout::default());
    }

    #[test]
    fn test_margins_iter_order() {
        let mut margs = Margins::default();
        margs.left.side = "Left".into();
        margs.bott.side = "Bott".into();
        margs.right.side = "Right".into();
        margs.top.side = "Top".into();
        let sides: Vec<_> = margs.iter().map(|m| m.side.as_str()).collect();
        assert_eq!(sides, ["Left", "Bott", "Right", "Top"]);
    }
}
