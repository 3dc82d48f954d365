pub mod connector;
pub mod legend;

pub use connector::{draw_connector, route};
pub use legend::{
    LegendEntry, LegendHeader, LegendLayout, LegendTitle, Swatch, SwatchShape, compose_layout,
    create_swatch, update_swatch,
};

use serde::{Deserialize, Serialize};

/// A cell address in the diagram matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPoint {
    pub row: i32,
    pub col: i32,
}

/// A resolved drawing-surface coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

/// Pixel dimensions of one matrix cell, constant for a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

impl CellSize {
    /// Center x of a column: `width * col + width * 0.5`.
    pub fn center_x(&self, col: i32) -> f32 {
        self.width * col as f32 + self.width * 0.5
    }

    /// Center y of a row: `height * row + height * 0.5`.
    pub fn center_y(&self, row: i32) -> f32 {
        self.height * row as f32 + self.height * 0.5
    }
}

/// Full description of one connector arrow request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorSpec {
    pub start: GridPoint,
    pub end: GridPoint,
    pub color: String,
    pub stroke_width: f32,
    #[serde(default)]
    pub marker_size: Option<f32>,
}

impl ConnectorSpec {
    /// Arrowhead marker size, defaulting to 0.4x the stroke width.
    pub fn marker_size(&self) -> f32 {
        self.marker_size.unwrap_or(self.stroke_width * 0.4)
    }
}

/// A routed two-segment connector. The bend shares the start's row and the
/// end's column; offsets apply to the start and end points only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutedPath {
    pub start: PixelPoint,
    pub bend: PixelPoint,
    pub end: PixelPoint,
}
