//! Render Model - Render surface and recorded documents
//!
//! This crate defines the drawing contract the export engine talks to, the
//! WinAnsi text encoding shared by measuring and drawing, text metrics and
//! line wrapping, and a recording surface that captures pages of positioned
//! text runs.

mod document;
mod encoding;
mod error;
mod metrics;
mod surface;
mod wrap;

pub use document::*;
pub use encoding::*;
pub use error::*;
pub use metrics::*;
pub use surface::*;
pub use wrap::*;
