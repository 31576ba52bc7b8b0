use serde::{Deserialize, Serialize};

use polydraw_core::{CanvasSize, Color, Extent, Point};

/// One call made on a render driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderOp {
    Clear,
    SetProjection { extent: Extent },
    ResizeViewport { width: f64, height: f64 },
    UploadPositions { count: usize },
    UploadColors { count: usize },
    DrawPoint,
    DrawLineStrip { count: usize },
}

/// A primitive visible on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawItem {
    /// Start marker of a polyline.
    Point { at: Point, color: Color },
    LineStrip { points: Vec<Point>, colors: Vec<Color> },
}

/// Everything on screen after the last clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub extent: Extent,
    pub projection: [f32; 16],
    pub viewport: CanvasSize,
    pub clear_color: Color,
    pub items: Vec<DrawItem>,
}

impl RenderFrame {
    pub fn empty(extent: Extent, viewport: CanvasSize) -> Self {
        Self {
            extent,
            projection: extent.ortho_matrix(),
            viewport,
            clear_color: Color::WHITE,
            items: Vec::new(),
        }
    }

    pub fn line_strips(&self) -> impl Iterator<Item = (&[Point], &[Color])> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::LineStrip { points, colors } => Some((points.as_slice(), colors.as_slice())),
            DrawItem::Point { .. } => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = (&Point, &Color)> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Point { at, color } => Some((at, color)),
            DrawItem::LineStrip { .. } => None,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
