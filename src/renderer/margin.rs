//! Axis line, tics and labels for one margin
//!
//! All coordinates are screen pixels. Left and Right count tics upward from
//! the bottom edge of the graph area, Bott and Top count rightward from its
//! left edge; Right and Top mirror Left and Bott across the graph.

use crate::diagnostics::Diagnostics;
use crate::model::{Layout, Margin};
use crate::scale::{scale_graph_to_math, ScaleRange};

use super::chart::GraphArea;
use super::svg::{offsets, svg_line, svg_rect, svg_text, tic_label, Side, TextAnchor};

/// Render every fragment for `margin`
///
/// A margin without a side is absent; one whose side is not recognized is
/// reported and skipped.
pub fn render_margin(
    diagnostics: &dyn Diagnostics,
    layout: &Layout,
    area: &GraphArea,
    margin: &Margin,
) -> Vec<String> {
    if margin.side.is_empty() {
        return Vec::new();
    }
    let side = match margin.side.parse::<Side>() {
        Ok(side) => side,
        Err(e) => {
            diagnostics.warn(&format!("render_margin: {e}"));
            return Vec::new();
        }
    };

    let mut fragments = Vec::new();

    if layout.testing {
        let (x, y, width, height) = strip(side, area, margin.size);
        fragments.push(svg_rect(
            Some(&format!("margin-{}", side.as_str())),
            &layout.testing_background_color,
            &layout.testing_stroke_color,
            None,
            x,
            y,
            width,
            height,
        ));
    }

    if margin.axis_line {
        let (x1, y1, x2, y2) = axis(side, area);
        fragments.push(svg_line(&margin.stroke, margin.stroke_wt, x1, y1, x2, y2));
    }

    fragments.extend(render_tics(diagnostics, layout, area, margin, side));

    if !margin.labeltext.is_empty() {
        let (x, y, rotation) = axis_label_position(side, layout, area, margin.labelpx);
        fragments.push(svg_text(
            x,
            y,
            margin.labelpx,
            rotation,
            &layout.font_family,
            TextAnchor::Middle,
            &margin.labeltext,
        ));
    }

    fragments
}

fn render_tics(
    diagnostics: &dyn Diagnostics,
    layout: &Layout,
    area: &GraphArea,
    margin: &Margin,
    side: Side,
) -> Vec<String> {
    if margin.ticunit <= 0 {
        if margin.ticsize > 0 {
            diagnostics.warn(&format!(
                "render_margin: {} margin has tics but Ticunit == {}",
                side.as_str(),
                margin.ticunit
            ));
        }
        return Vec::new();
    }

    let length = axis_length(side, area);
    let range = math_range(side, layout);
    let gap = margin.ticsize.saturating_add(margin.ticfontoffset);

    let mut fragments = Vec::new();
    for offset in offsets(length, margin.ticunit) {
        let (x1, y1, x2, y2) = tic(side, area, offset, margin.ticsize);
        fragments.push(svg_line(&margin.stroke, margin.ticstroke, x1, y1, x2, y2));

        let (lx, ly) = tic_label_position(side, area, offset, gap);
        let value = range
            .min
            .saturating_add(scale_graph_to_math(offset, 0, length, range.min, range.max));
        fragments.push(tic_label(
            lx,
            ly,
            side,
            &layout.font_family,
            margin.ticfontpx,
            value,
        ));
    }
    fragments
}

/// The strip's rectangle as `(x, y, width, height)`
fn strip(side: Side, area: &GraphArea, size: i64) -> (i64, i64, i64, i64) {
    match side {
        Side::Left => (area.x.saturating_sub(size), area.y, size, area.height),
        Side::Bott => (area.x, area.bottom(), area.width, size),
        Side::Right => (area.right(), area.y, size, area.height),
        Side::Top => (area.x, area.y.saturating_sub(size), area.width, size),
    }
}

/// The axis line along the graph edge shared with the strip
fn axis(side: Side, area: &GraphArea) -> (i64, i64, i64, i64) {
    match side {
        Side::Left => (area.x, area.y, area.x, area.bottom()),
        Side::Bott => (area.x, area.bottom(), area.right(), area.bottom()),
        Side::Right => (area.right(), area.y, area.right(), area.bottom()),
        Side::Top => (area.x, area.y, area.right(), area.y),
    }
}

fn axis_length(side: Side, area: &GraphArea) -> i64 {
    match side {
        Side::Left | Side::Right => area.height,
        Side::Bott | Side::Top => area.width,
    }
}

fn math_range(side: Side, layout: &Layout) -> ScaleRange {
    match side {
        Side::Left | Side::Right => layout.graph.y_range(),
        Side::Bott | Side::Top => layout.graph.x_range(),
    }
}

/// A tic mark `offset` pixels from the axis origin, pointing into the strip
fn tic(side: Side, area: &GraphArea, offset: i64, size: i64) -> (i64, i64, i64, i64) {
    match side {
        Side::Left => {
            let y = area.bottom().saturating_sub(offset);
            (area.x.saturating_sub(size), y, area.x, y)
        }
        Side::Right => {
            let y = area.bottom().saturating_sub(offset);
            (area.right(), y, area.right().saturating_add(size), y)
        }
        Side::Bott => {
            let x = area.x.saturating_add(offset);
            (x, area.bottom(), x, area.bottom().saturating_add(size))
        }
        Side::Top => {
            let x = area.x.saturating_add(offset);
            (x, area.y.saturating_sub(size), x, area.y)
        }
    }
}

fn tic_label_position(side: Side, area: &GraphArea, offset: i64, gap: i64) -> (i64, i64) {
    match side {
        Side::Left => (area.x.saturating_sub(gap), area.bottom().saturating_sub(offset)),
        Side::Right => (area.right().saturating_add(gap), area.bottom().saturating_sub(offset)),
        Side::Bott => (area.x.saturating_add(offset), area.bottom().saturating_add(gap)),
        Side::Top => (area.x.saturating_add(offset), area.y.saturating_sub(gap)),
    }
}

/// Axis label position and rotation, `labelpx` in from the outer edge
fn axis_label_position(
    side: Side,
    layout: &Layout,
    area: &GraphArea,
    labelpx: i64,
) -> (i64, i64, i64) {
    let screen = &layout.screen;
    let right = screen.xorg.saturating_add(screen.width);
    let bottom = screen.yorg.saturating_add(screen.height);
    match side {
        Side::Left => (screen.xorg.saturating_add(labelpx), area.center_y(), -90),
        Side::Right => (right.saturating_sub(labelpx), area.center_y(), 90),
        Side::Bott => (area.center_x(), bottom.saturating_sub(labelpx), 0),
        Side::Top => (area.center_x(), screen.yorg.saturating_add(labelpx), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::testing::RecordingDiagnostics;
    use crate::diagnostics::NullDiagnostics;
    use pretty_assertions::assert_eq;

    fn area() -> GraphArea {
        GraphArea {
            x: 100,
            y: 50,
            width: 400,
            height: 200,
        }
    }

    fn layout() -> Layout {
        let mut layout = Layout::default();
        layout.font_family = "Arial".into();
        layout.screen.width = 600;
        layout.screen.height = 300;
        layout.graph.xaxis_unitmin = 0;
        layout.graph.xaxis_unitmax = 40;
        layout.graph.yaxis_unitmin = -10;
        layout.graph.yaxis_unitmax = 10;
        layout
    }

    fn margin(side: &str) -> Margin {
        Margin {
            side: side.into(),
            size: 50,
            axis_line: true,
            stroke: "black".into(),
            stroke_wt: 2,
            ticunit: 100,
            ticsize: 8,
            ticstroke: 1,
            ticfontpx: 10,
            ticfontoffset: 4,
            labelpx: 14,
            labeltext: String::new(),
        }
    }

    #[test]
    fn test_left_margin() {
        let fragments = render_margin(&NullDiagnostics, &layout(), &area(), &margin("Left"));
        assert_eq!(
            fragments[0],
            r#"<line style="stroke:black;stroke-width:2" x1="100" y1="50" x2="100" y2="250" />"#
        );
        // axis, then a tic and a label for offsets 0, 100, 200
        assert_eq!(fragments.len(), 7);
        assert_eq!(
            fragments[1],
            r#"<line style="stroke:black;stroke-width:1" x1="92" y1="250" x2="100" y2="250" />"#
        );
        assert_eq!(
            fragments[2],
            r#"<text x="88" y="250" font-family="Arial" font-size="10px" text-anchor="end" alignment-baseline="middle" > -10 </text>"#
        );
        assert!(fragments[4].contains(r#"y="150""#));
        assert!(fragments[4].contains("> 0 <"));
        assert!(fragments[6].contains(r#"y="50""#));
        assert!(fragments[6].contains("> 10 <"));
    }

    #[test]
    fn test_bottom_margin() {
        let fragments = render_margin(&NullDiagnostics, &layout(), &area(), &margin("Bott"));
        assert_eq!(
            fragments[0],
            r#"<line style="stroke:black;stroke-width:2" x1="100" y1="250" x2="500" y2="250" />"#
        );
        // offsets 0, 100, 200, 300, 400
        assert_eq!(fragments.len(), 11);
        assert_eq!(
            fragments[3],
            r#"<line style="stroke:black;stroke-width:1" x1="200" y1="250" x2="200" y2="258" />"#
        );
        assert_eq!(
            fragments[4],
            r#"<text x="200" y="262" font-family="Arial" font-size="10px" text-anchor="middle" alignment-baseline="middle" > 10 </text>"#
        );
    }

    #[test]
    fn test_right_mirrors_left() {
        let fragments = render_margin(&NullDiagnostics, &layout(), &area(), &margin("Right"));
        assert_eq!(
            fragments[0],
            r#"<line style="stroke:black;stroke-width:2" x1="500" y1="50" x2="500" y2="250" />"#
        );
        assert_eq!(
            fragments[1],
            r#"<line style="stroke:black;stroke-width:1" x1="500" y1="250" x2="508" y2="250" />"#
        );
        assert!(fragments[2].contains(r#"x="512" y="250""#));
        assert!(fragments[2].contains(r#"text-anchor="start""#));
    }

    #[test]
    fn test_top_mirrors_bottom() {
        let fragments = render_margin(&NullDiagnostics, &layout(), &area(), &margin("Top"));
        assert_eq!(
            fragments[0],
            r#"<line style="stroke:black;stroke-width:2" x1="100" y1="50" x2="500" y2="50" />"#
        );
        assert_eq!(
            fragments[1],
            r#"<line style="stroke:black;stroke-width:1" x1="100" y1="42" x2="100" y2="50" />"#
        );
        assert!(fragments[2].contains(r#"x="100" y="38""#));
    }

    #[test]
    fn test_axis_label_rotation() {
        let mut left = margin("Left");
        left.labeltext = "Load".into();
        let fragments = render_margin(&NullDiagnostics, &layout(), &area(), &left);
        let label = fragments.last().expect("label fragment");
        assert_eq!(
            label,
            r#"<text x="14" y="150" font-family="Arial" font-size="14px" text-anchor="middle" alignment-baseline="middle" transform="rotate(-90 14 150)"> Load </text>"#
        );

        let mut right = margin("Right");
        right.labeltext = "Load".into();
        let fragments = render_margin(&NullDiagnostics, &layout(), &area(), &right);
        assert!(fragments
            .last()
            .expect("label fragment")
            .contains("rotate(90 586 150)"));
    }

    #[test]
    fn test_testing_outline() {
        let mut layout = layout();
        layout.testing = true;
        layout.testing_background_color = "#eee".into();
        layout.testing_stroke_color = "red".into();
        let fragments = render_margin(&NullDiagnostics, &layout, &area(), &margin("Top"));
        assert_eq!(
            fragments[0],
            r##"<rect id="margin-Top" fill="#eee" stroke="red" x="100" y="0" width="400" height="50" />"##
        );
    }

    #[test]
    fn test_unknown_side_is_skipped() {
        let diag = RecordingDiagnostics::default();
        let fragments = render_margin(&diag, &layout(), &area(), &margin("Diagonal"));
        assert!(fragments.is_empty());
        assert_eq!(diag.warnings.borrow().len(), 1);
    }

    #[test]
    fn test_absent_margin_is_silent() {
        let diag = RecordingDiagnostics::default();
        let fragments = render_margin(&diag, &layout(), &area(), &Margin::default());
        assert!(fragments.is_empty());
        assert!(diag.warnings.borrow().is_empty());
    }

    #[test]
    fn test_zero_ticunit_skips_tics() {
        let diag = RecordingDiagnostics::default();
        let mut left = margin("Left");
        left.ticunit = 0;
        let fragments = render_margin(&diag, &layout(), &area(), &left);
        assert_eq!(fragments.len(), 1);
        assert_eq!(diag.warnings.borrow().len(), 1);
    }

    #[test]
    fn test_huge_ticunit_ends_tics() {
        let wide = GraphArea {
            x: 0,
            y: 0,
            width: i64::MAX,
            height: 10,
        };
        let mut bott = margin("Bott");
        bott.ticunit = i64::MAX / 2 + 1;
        let fragments = render_margin(&NullDiagnostics, &layout(), &wide, &bott);
        // axis, then a tic and a label at offsets 0 and i64::MAX / 2 + 1
        assert_eq!(fragments.len(), 5);
    }

    #[test]
    fn test_no_axis_line() {
        let mut bott = margin("Bott");
        bott.axis_line = false;
        bott.ticunit = 400;
        let fragments = render_margin(&NullDiagnostics, &layout(), &area(), &bott);
        // tic and label at offsets 0 and 400 only
        assert_eq!(fragments.len(), 4);
        assert!(fragments[3].contains("> 40 <"));
    }
}
