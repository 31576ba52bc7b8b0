use thiserror::Error;

use polydraw_core::{CanvasSize, Color, ColorPolicy, DrawingHistory, Extent, Point};

use crate::viewport::Canvas;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("rendering surface is unavailable")]
    MissingContext,
}

/// The graphics backend the session draws through.
///
/// Positions and colors are uploaded per polyline, then drawn with
/// [`draw_point`](RenderDriver::draw_point) for the start marker and
/// [`draw_line_strip`](RenderDriver::draw_line_strip) for the segments.
pub trait RenderDriver {
    /// Base size of the drawing surface.
    fn surface(&self) -> Result<CanvasSize, RenderError>;
    /// Clear the surface to the background color.
    fn clear(&mut self);
    fn set_projection(&mut self, extent: &Extent);
    fn resize_viewport(&mut self, width: f64, height: f64);
    fn upload_positions(&mut self, points: &[Point]);
    fn upload_colors(&mut self, colors: &[Color]);
    /// Draw the first uploaded vertex as a point.
    fn draw_point(&mut self);
    /// Draw the first `count` uploaded vertices as connected segments.
    fn draw_line_strip(&mut self, count: usize);
}

/// Clear the surface and draw every polyline in the history.
pub fn repaint<D: RenderDriver + ?Sized>(
    driver: &mut D,
    history: &DrawingHistory,
    policy: ColorPolicy,
    current: Color,
) {
    driver.clear();

    let mut colors = Vec::new();
    for (polyline, color) in history.all(policy, current) {
        driver.upload_positions(polyline.points());
        colors.clear();
        colors.resize(polyline.len(), color);
        driver.upload_colors(&colors);
        driver.draw_point();
        driver.draw_line_strip(polyline.len());
    }
    log::debug!("Repainted {} polylines", history.len());
}

/// Project the extent and fit the viewport to its aspect ratio.
pub fn apply_extent<D: RenderDriver + ?Sized>(driver: &mut D, canvas: &mut Canvas, extent: &Extent) {
    driver.set_projection(extent);
    let size = canvas.fit_extent(extent);
    driver.resize_viewport(size.width, size.height);
    log::debug!(
        "Extent {:?} fitted to {}x{} viewport",
        extent,
        size.width,
        size.height
    );
}
