//! SVG primitive emitters
//!
//! Each function returns one self-contained fragment. Numbers are written as
//! integers and strings are inserted verbatim: colors, font names and labels
//! are not escaped.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::diagnostics::Diagnostics;

/// Horizontal alignment of a `<text>` element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The margin a tic label belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Bott,
    Right,
    Top,
}

impl Side {
    /// Anchor that keeps tic labels clear of the axis line
    pub fn tic_anchor(&self) -> TextAnchor {
        match self {
            Side::Left => TextAnchor::End,
            Side::Bott => TextAnchor::Middle,
            Side::Right => TextAnchor::Start,
            Side::Top => TextAnchor::Middle,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Bott => "Bott",
            Side::Right => "Right",
            Side::Top => "Top",
        }
    }
}

/// Error for a side name outside `Left`, `Bott`, `Right` and `Top`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("side == {0} is unknown")]
pub struct UnknownSide(pub String);

impl FromStr for Side {
    type Err = UnknownSide;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Left" => Ok(Side::Left),
            "Bott" | "Bottom" => Ok(Side::Bott),
            "Right" => Ok(Side::Right),
            "Top" => Ok(Side::Top),
            other => Err(UnknownSide(other.to_string())),
        }
    }
}

/// `<?xml ...?>` header for a standalone document
pub fn xml_declaration() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#.to_string()
}

/// Opening `<svg>` tag with a fixed 1000x1000 viewbox
pub fn svg_start(id: Option<&str>, width: i64, height: i64) -> String {
    format!(
        r#"<svg{} viewbox="0 0 1000 1000"  width="{}" height="{}"  xmlns="http://www.w3.org/2000/svg">"#,
        id_attr(id),
        width,
        height
    )
}

pub fn svg_end() -> String {
    "</svg>".to_string()
}

#[allow(clippy::too_many_arguments)]
pub fn svg_rect(
    id: Option<&str>,
    fill: &str,
    stroke: &str,
    stroke_width: Option<i64>,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
) -> String {
    let stroke_width = stroke_width
        .map(|w| format!(r#" stroke-width="{}""#, w))
        .unwrap_or_default();
    format!(
        r#"<rect{} fill="{}" stroke="{}"{} x="{}" y="{}" width="{}" height="{}" />"#,
        id_attr(id),
        fill,
        stroke,
        stroke_width,
        x,
        y,
        width,
        height
    )
}

pub fn svg_line(stroke: &str, stroke_width: i64, x1: i64, y1: i64, x2: i64, y2: i64) -> String {
    format!(
        r#"<line style="stroke:{};stroke-width:{}" x1="{}" y1="{}" x2="{}" y2="{}" />"#,
        stroke, stroke_width, x1, y1, x2, y2
    )
}

/// A plotted point as a `<circle>`
///
/// Without an id the tag keeps a double space before `stroke`.
pub fn svg_point(
    id: Option<&str>,
    fill: &str,
    stroke: &str,
    stroke_width: i64,
    cx: i64,
    cy: i64,
    r: i64,
) -> String {
    let id = id.map(|i| format!(r#"id="{}""#, i)).unwrap_or_default();
    format!(
        r#"<circle {} stroke="{}" stroke-width="{}" fill="{}" cx="{}" cy="{}" r="{}" />"#,
        id, stroke, stroke_width, fill, cx, cy, r
    )
}

/// A single cubic Bézier segment: `M m C c1, c2, c3`
#[allow(clippy::too_many_arguments)]
pub fn svg_path(
    id: &str,
    fill: &str,
    stroke: &str,
    stroke_width: i64,
    m: (i64, i64),
    c1: (i64, i64),
    c2: (i64, i64),
    c3: (i64, i64),
) -> String {
    format!(
        r#"<path d="M {} {} C {} {}, {} {}, {} {}" id="{}" fill="{}" stroke="{}" stroke-width="{}" />"#,
        m.0, m.1, c1.0, c1.1, c2.0, c2.1, c3.0, c3.1, id, fill, stroke, stroke_width
    )
}

/// A label rotated by `rotation` degrees about its own anchor point
pub fn svg_text(
    x: i64,
    y: i64,
    font_size: i64,
    rotation: i64,
    font_family: &str,
    anchor: TextAnchor,
    label: &str,
) -> String {
    format!(
        r#"<text x="{x}" y="{y}" font-family="{font_family}" font-size="{font_size}px" text-anchor="{anchor}" alignment-baseline="middle" transform="rotate({rotation} {x} {y})"> {label} </text>"#
    )
}

/// Numeric tic label anchored according to its margin
///
/// An unknown `side` is reported once through `diagnostics` and yields an
/// empty fragment.
pub fn svg_tic_label(
    diagnostics: &dyn Diagnostics,
    x: i64,
    y: i64,
    side: &str,
    font_family: &str,
    font_size: i64,
    idx: i64,
) -> String {
    match side.parse::<Side>() {
        Ok(side) => tic_label(x, y, side, font_family, font_size, idx),
        Err(e) => {
            diagnostics.warn(&format!("svg_tic_label: {e}"));
            String::new()
        }
    }
}

/// [`svg_tic_label`] for an already-resolved side
pub fn tic_label(x: i64, y: i64, side: Side, font_family: &str, font_size: i64, idx: i64) -> String {
    format!(
        r#"<text x="{}" y="{}" font-family="{}" font-size="{}px" text-anchor="{}" alignment-baseline="middle" > {} </text>"#,
        x,
        y,
        font_family,
        font_size,
        side.tic_anchor(),
        idx
    )
}

/// Grid lines in a group translated to `(x, y)`
///
/// Horizontal lines are `width / xgrid` apart and vertical lines
/// `height / ygrid` apart, both running from 0 through the far edge. A
/// count or step that is not positive is reported and leaves the group empty.
#[allow(clippy::too_many_arguments)]
pub fn svg_grid(
    diagnostics: &dyn Diagnostics,
    stroke: &str,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    xgrid: i64,
    ygrid: i64,
) -> String {
    match grid_step(width, xgrid).zip(grid_step(height, ygrid)) {
        Some((row_step, column_step)) => {
            svg_grid_spaced(diagnostics, stroke, x, y, width, height, row_step, column_step)
        }
        None => {
            diagnostics.warn(&format!(
                "svg_grid: cannot divide {width}x{height} into {xgrid}x{ygrid} cells"
            ));
            format!("{}{}", grid_open(x, y), GRID_CLOSE)
        }
    }
}

/// Grid lines in a group translated to `(x, y)`, spaced in pixels
///
/// Horizontal lines are `row_step` apart and vertical lines `column_step`
/// apart. A step that is not positive is reported and leaves the group empty.
#[allow(clippy::too_many_arguments)]
pub fn svg_grid_spaced(
    diagnostics: &dyn Diagnostics,
    stroke: &str,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    row_step: i64,
    column_step: i64,
) -> String {
    let mut grid = grid_open(x, y);

    if row_step <= 0 || column_step <= 0 {
        diagnostics.warn(&format!(
            "svg_grid: steps {row_step}x{column_step} cannot fill {width}x{height}"
        ));
    } else {
        diagnostics.debug(&format!(
            "grid x:{x}, y:{y}, max x:{width}, max y:{height}, rows:{row_step}, columns:{column_step}"
        ));
        for i in offsets(height, row_step) {
            grid.push_str(&svg_line(stroke, 1, 0, i, width, i));
            grid.push('\n');
        }
        for i in offsets(width, column_step) {
            grid.push_str(&svg_line(stroke, 1, i, 0, i, height));
            grid.push('\n');
        }
    }

    grid.push_str(GRID_CLOSE);
    grid
}

const GRID_CLOSE: &str = " </g>\n";

fn grid_open(x: i64, y: i64) -> String {
    let scale = 1.0_f64;
    format!(
        "<g transform=\"translate({} {}) scale({:.3} {:.3})\">\n",
        x, y, scale, scale
    )
}

/// `length / cells` when both the count and the step are positive
pub(crate) fn grid_step(length: i64, cells: i64) -> Option<i64> {
    if cells <= 0 {
        return None;
    }
    Some(length / cells).filter(|step| *step > 0)
}

/// `0, step, 2 * step, ...` up to and including `limit`, stopping before overflow
pub(crate) fn offsets(limit: i64, step: i64) -> impl Iterator<Item = i64> {
    std::iter::successors(Some(0_i64), move |i| i.checked_add(step))
        .take_while(move |i| *i <= limit)
}

fn id_attr(id: Option<&str>) -> String {
    id.map(|i| format!(r#" id="{}""#, i)).unwrap_or_default()
}
