use serde::{Deserialize, Serialize};

use polydraw_core::{CanvasSize, Color, ColorCycle, DrawingHistory, Extent, SessionConfig};
use polydraw_renderer::Canvas;

/// Interaction mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Geometry comes from loaded files.
    #[default]
    File,
    /// Clicks add points to polylines.
    Draw,
}

/// All mutable drawing state of one session.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: SessionConfig,
    pub mode: Mode,
    pub colors: ColorCycle,
    pub extent: Extent,
    pub history: DrawingHistory,
    pub canvas: Canvas,
    /// Set while `b` is held.
    pub new_line: bool,
    /// Whether the next click may extend the last polyline.
    pub in_progress: bool,
}

impl Session {
    pub fn new(config: SessionConfig, surface: CanvasSize) -> Self {
        Self {
            extent: config.default_extent,
            config,
            mode: Mode::default(),
            colors: ColorCycle::new(),
            history: DrawingHistory::new(),
            canvas: Canvas::new(surface),
            new_line: false,
            in_progress: false,
        }
    }

    pub fn color(&self) -> Color {
        self.colors.current()
    }

    /// Forget all geometry and return to the default extent.
    pub fn clear(&mut self) {
        self.history.reset();
        self.in_progress = false;
        self.extent = self.config.default_extent;
    }
}
