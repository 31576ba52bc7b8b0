//! # Polydraw I/O
//!
//! Reader for the `.dat` polyline format: an optional comment header, a `*`
//! marker line, then extent updates and point-counted polylines.

pub mod dat;

pub use dat::{parse, parse_document, Command, DatDocument, ParseError};
pub use polydraw_core::ParseMode;
