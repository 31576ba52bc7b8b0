use polydraw_core::{CanvasSize, Color, Extent, Point};

use crate::driver::{RenderDriver, RenderError};
use crate::render_data::{DrawItem, RenderFrame, RenderOp};

/// A driver that draws into memory and keeps a log of every call.
#[derive(Debug, Clone)]
pub struct RecordingDriver {
    surface: Option<CanvasSize>,
    ops: Vec<RenderOp>,
    positions: Vec<Point>,
    colors: Vec<Color>,
    frame: RenderFrame,
}

impl RecordingDriver {
    pub fn new(surface: CanvasSize) -> Self {
        Self {
            surface: Some(surface),
            ops: Vec::new(),
            positions: Vec::new(),
            colors: Vec::new(),
            frame: RenderFrame::empty(Extent::default(), surface),
        }
    }

    /// A driver with no surface; [`RenderDriver::surface`] fails.
    pub fn detached() -> Self {
        Self {
            surface: None,
            ops: Vec::new(),
            positions: Vec::new(),
            colors: Vec::new(),
            frame: RenderFrame::empty(Extent::default(), CanvasSize::default()),
        }
    }

    pub fn ops(&self) -> &[RenderOp] {
        &self.ops
    }

    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    fn color_at(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or_default()
    }
}

impl RenderDriver for RecordingDriver {
    fn surface(&self) -> Result<CanvasSize, RenderError> {
        self.surface.ok_or(RenderError::MissingContext)
    }

    fn clear(&mut self) {
        self.ops.push(RenderOp::Clear);
        self.frame.items.clear();
    }

    fn set_projection(&mut self, extent: &Extent) {
        self.ops.push(RenderOp::SetProjection { extent: *extent });
        self.frame.extent = *extent;
        self.frame.projection = extent.ortho_matrix();
    }

    fn resize_viewport(&mut self, width: f64, height: f64) {
        self.ops.push(RenderOp::ResizeViewport { width, height });
        self.frame.viewport = CanvasSize::new(width, height);
    }

    fn upload_positions(&mut self, points: &[Point]) {
        self.ops.push(RenderOp::UploadPositions {
            count: points.len(),
        });
        self.positions = points.to_vec();
    }

    fn upload_colors(&mut self, colors: &[Color]) {
        self.ops.push(RenderOp::UploadColors {
            count: colors.len(),
        });
        self.colors = colors.to_vec();
    }

    fn draw_point(&mut self) {
        self.ops.push(RenderOp::DrawPoint);
        let Some(&at) = self.positions.first() else {
            log::warn!("draw_point with no uploaded positions");
            return;
        };
        let color = self.color_at(0);
        self.frame.items.push(DrawItem::Point { at, color });
    }

    fn draw_line_strip(&mut self, count: usize) {
        self.ops.push(RenderOp::DrawLineStrip { count });
        let count = count.min(self.positions.len());
        let points = self.positions[..count].to_vec();
        let colors: Vec<Color> = (0..count).map(|i| self.color_at(i)).collect();
        self.frame.items.push(DrawItem::LineStrip { points, colors });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{apply_extent, repaint};
    use crate::viewport::Canvas;
    use polydraw_core::{ColorPolicy, DrawingHistory, Polyline};

    fn sample_history() -> DrawingHistory {
        let mut history = DrawingHistory::new();
        history.append(
            Polyline::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)]).unwrap(),
            Color::BLACK,
        );
        history.append(Polyline::from_point(Point::new(3.0, 4.0)), Color::RED);
        history
    }

    #[test]
    fn test_detached_driver_has_no_surface() {
        let driver = RecordingDriver::detached();
        assert_eq!(driver.surface(), Err(RenderError::MissingContext));
    }

    #[test]
    fn test_repaint_call_sequence() {
        let mut driver = RecordingDriver::new(CanvasSize::default());
        repaint(&mut driver, &sample_history(), ColorPolicy::Uniform, Color::BLUE);

        assert_eq!(
            driver.ops(),
            &[
                RenderOp::Clear,
                RenderOp::UploadPositions { count: 2 },
                RenderOp::UploadColors { count: 2 },
                RenderOp::DrawPoint,
                RenderOp::DrawLineStrip { count: 2 },
                RenderOp::UploadPositions { count: 1 },
                RenderOp::UploadColors { count: 1 },
                RenderOp::DrawPoint,
                RenderOp::DrawLineStrip { count: 1 },
            ]
        );
    }

    #[test]
    fn test_repaint_frame_uniform_color() {
        let mut driver = RecordingDriver::new(CanvasSize::default());
        repaint(&mut driver, &sample_history(), ColorPolicy::Uniform, Color::BLUE);

        let frame = driver.frame();
        assert_eq!(frame.markers().count(), 2);
        assert!(frame
            .line_strips()
            .all(|(_, colors)| colors.iter().all(|c| *c == Color::BLUE)));
    }

    #[test]
    fn test_repaint_frame_per_polyline_color() {
        let mut driver = RecordingDriver::new(CanvasSize::default());
        repaint(&mut driver, &sample_history(), ColorPolicy::PerPolyline, Color::BLUE);

        let markers: Vec<Color> = driver.frame().markers().map(|(_, c)| *c).collect();
        assert_eq!(markers, vec![Color::BLACK, Color::RED]);
    }

    #[test]
    fn test_repaint_replaces_previous_frame() {
        let mut driver = RecordingDriver::new(CanvasSize::default());
        let history = sample_history();
        repaint(&mut driver, &history, ColorPolicy::Uniform, Color::BLACK);
        repaint(&mut driver, &history, ColorPolicy::Uniform, Color::BLACK);
        assert_eq!(driver.frame().items.len(), 4);
    }

    #[test]
    fn test_apply_extent() {
        let mut driver = RecordingDriver::new(CanvasSize::default());
        let mut canvas = Canvas::default();
        let extent = Extent::new(0.0, 200.0, 0.0, 50.0);
        apply_extent(&mut driver, &mut canvas, &extent);

        assert_eq!(
            driver.ops(),
            &[
                RenderOp::SetProjection { extent },
                RenderOp::ResizeViewport {
                    width: 640.0,
                    height: 160.0
                },
            ]
        );
        assert_eq!(driver.frame().viewport, CanvasSize::new(640.0, 160.0));
        assert_eq!(canvas.viewport, CanvasSize::new(640.0, 160.0));
    }
}
