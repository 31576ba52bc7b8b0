use serde::{Deserialize, Serialize};

use polydraw_core::{fit_viewport, to_logical, CanvasRect, CanvasSize, Extent, Point};

/// The drawing canvas: its base size, the viewport currently fitted inside
/// it, and where it sits on the device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Size before any aspect-ratio fitting.
    pub base: CanvasSize,
    /// Size after fitting the current extent.
    pub viewport: CanvasSize,
    /// Top-left corner in device pixels.
    pub rect: CanvasRect,
}

impl Canvas {
    pub fn new(base: CanvasSize) -> Self {
        Self {
            base,
            viewport: base,
            rect: CanvasRect::default(),
        }
    }

    /// Resize the viewport so it has the extent's aspect ratio.
    pub fn fit_extent(&mut self, extent: &Extent) -> CanvasSize {
        let (width, height) = fit_viewport(
            extent.width(),
            extent.height(),
            self.base.width,
            self.base.height,
        );
        self.viewport = CanvasSize::new(width, height);
        self.viewport
    }

    /// Convert a device pixel position to logical coordinates.
    pub fn logical_at(&self, device_x: f64, device_y: f64, extent: &Extent) -> Point {
        to_logical(device_x, device_y, self.rect, self.viewport, extent)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasSize::default())
    }
}
