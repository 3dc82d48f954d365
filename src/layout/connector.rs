use crate::surface::Surface;

use super::{CellSize, ConnectorSpec, GridPoint, PixelPoint, RoutedPath};

/// Extra vertical clearance at the arrow tip so the marker does not
/// overlap the target cell's center.
const ARROWHEAD_CLEARANCE: f32 = 3.0;

/// Fraction of a cell dimension used to detach the start/end points from
/// the cell center, keeping stacked arrows distinguishable.
const CENTER_OFFSET_FRAC: f32 = 0.125;

/// Routes a connector as a two-segment elbow: start -> bend -> end, with
/// the bend at (start.row, end.col).
///
/// Only the start point is offset horizontally (toward the end column) and
/// only the end point vertically (short of the approach direction), so
/// parallel arrows stay separated while the bend stays on the cell center.
pub fn route(spec: &ConnectorSpec, cell: CellSize) -> RoutedPath {
    let bend = GridPoint {
        row: spec.start.row,
        col: spec.end.col,
    };

    let offset_abs_x = cell.width * CENTER_OFFSET_FRAC;
    let offset_abs_y = cell.height * CENTER_OFFSET_FRAC + ARROWHEAD_CLEARANCE;

    // Left-to-right arrows leave the start cell on the right, and vice versa.
    let offset_x = if spec.start.col < spec.end.col {
        offset_abs_x
    } else {
        -offset_abs_x
    };
    // Downward arrows stop short above the end cell, upward ones below it.
    let offset_y = if spec.start.row < spec.end.row {
        -offset_abs_y
    } else {
        offset_abs_y
    };

    RoutedPath {
        start: PixelPoint {
            x: cell.center_x(spec.start.col) + offset_x,
            y: cell.center_y(spec.start.row),
        },
        bend: PixelPoint {
            x: cell.center_x(bend.col),
            y: cell.center_y(bend.row),
        },
        end: PixelPoint {
            x: cell.center_x(spec.end.col),
            y: cell.center_y(spec.end.row) + offset_y,
        },
    }
}

/// Draws a routed connector onto the surface: a sharp-elbow polyline, two
/// concentric dots at the bend (black base, color-coded overlay), and an
/// arrowhead marker at the terminal end.
///
/// Appends only; removing stale connectors is the caller's lifecycle.
pub fn draw_connector(path: &RoutedPath, spec: &ConnectorSpec, surface: &mut Surface) {
    // Marker defs are per connector so each arrow keeps its own size.
    let marker_size = spec.marker_size();
    let marker_id = surface.add_marker_def(marker_size);

    surface.push_connector(format!(
        "<path d=\"M {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" marker-end=\"url(#{})\"/>",
        path.start.x,
        path.start.y,
        path.bend.x,
        path.bend.y,
        path.end.x,
        path.end.y,
        spec.color,
        spec.stroke_width,
        marker_id
    ));

    surface.push_decoration(format!(
        "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" stroke-width=\"0\" fill-opacity=\"1\" fill=\"black\"/>",
        path.bend.x, path.bend.y, spec.stroke_width
    ));
    surface.push_decoration(format!(
        "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" stroke-width=\"0\" fill-opacity=\"0.75\" fill=\"{}\"/>",
        path.bend.x, path.bend.y, spec.stroke_width, spec.color
    ));
}
