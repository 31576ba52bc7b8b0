//! # Polydraw Core
//!
//! Geometry primitives, extent mapping, color cycling, and the drawing
//! history shared by the file reader, the renderer, and the session
//! controller.

pub mod geometry;
pub mod color;
pub mod mapper;
pub mod history;
pub mod config;

pub use geometry::{EmptyPolylineError, Extent, ExtentError, Point, Polyline};
pub use color::{Color, ColorCycle, PALETTE};
pub use mapper::{fit_viewport, to_device, to_logical, CanvasRect, CanvasSize};
pub use history::{ColorPolicy, DrawingHistory};
pub use config::{ParseMode, SessionConfig};
