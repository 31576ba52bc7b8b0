//! # Polydraw
//!
//! The drawing session: File Mode loads `.dat` files, Draw Mode builds
//! polylines from clicks, and every change repaints the whole history
//! through a [`RenderDriver`](polydraw_renderer::RenderDriver).

use thiserror::Error;

use polydraw_io::ParseError;
use polydraw_renderer::RenderError;

pub mod controller;
pub mod input;
pub mod session;

pub use controller::Controller;
pub use input::Key;
pub use session::{Mode, Session};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("malformed file: {0}")]
    Parse(#[from] ParseError),

    #[error("files can only be loaded in File Mode")]
    NotInFileMode,
}
