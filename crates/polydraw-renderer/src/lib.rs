//! # Polydraw Renderer
//!
//! The render driver interface the session draws through, the full-repaint
//! routine, and canvas/viewport state.
//!
//! Every change to the drawing repaints the whole history: the surface is
//! cleared and each polyline is uploaded and drawn again. The
//! [`RecordingDriver`] draws into memory and produces a serializable
//! [`RenderFrame`] for headless use and tests.

pub mod driver;
pub mod viewport;
pub mod render_data;
pub mod recording;

pub use driver::{apply_extent, repaint, RenderDriver, RenderError};
pub use viewport::Canvas;
pub use render_data::{DrawItem, RenderFrame, RenderOp};
pub use recording::RecordingDriver;
