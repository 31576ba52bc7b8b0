//! Conversions between device pixels, canvas pixels, and logical extent
//! coordinates.

use serde::{Deserialize, Serialize};

use crate::geometry::{Extent, Point};

/// Position of the canvas' top-left corner in device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
}

impl CanvasRect {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
        }
    }
}

/// Map a device pixel position into logical extent coordinates.
///
/// Device Y grows downward while logical Y grows upward. Positions outside
/// the canvas are not clamped and land outside the extent.
pub fn to_logical(
    device_x: f64,
    device_y: f64,
    rect: CanvasRect,
    size: CanvasSize,
    extent: &Extent,
) -> Point {
    let nx = (device_x - rect.left) / size.width;
    let ny = (size.height - (device_y - rect.top)) / size.height;

    Point::new(
        nx * extent.width() + extent.xmin,
        ny * extent.height() + extent.ymin,
    )
}

/// Forward mapping used when rendering: logical point to device pixels.
pub fn to_device(point: &Point, rect: CanvasRect, size: CanvasSize, extent: &Extent) -> (f64, f64) {
    let ndc = extent.to_ndc(point);
    let canvas_x = (ndc.x + 1.0) / 2.0 * size.width;
    let canvas_y = (1.0 - ndc.y) / 2.0 * size.height;
    (canvas_x + rect.left, canvas_y + rect.top)
}

/// Shrink the base canvas so it has the extent's aspect ratio.
///
/// The limiting dimension keeps its base size; equal ratios return the base
/// size unchanged.
pub fn fit_viewport(
    extent_width: f64,
    extent_height: f64,
    base_width: f64,
    base_height: f64,
) -> (f64, f64) {
    let extent_ratio = extent_width / extent_height;
    let base_ratio = base_width / base_height;

    if extent_ratio > base_ratio {
        (base_width, base_width / extent_ratio)
    } else if extent_ratio < base_ratio {
        (base_height * extent_ratio, base_height)
    } else {
        (base_width, base_height)
    }
}
