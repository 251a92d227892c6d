//! PDF Export Module
//!
//! Serializes recorded documents (pages of positioned text runs) into
//! PDF 1.4 files using the standard Helvetica fonts.
//!
//! # Architecture
//!
//! - `objects`: PDF object model (Dictionary, Array, Stream, Reference)
//! - `content`: Content stream generation (text operators)
//! - `fonts`: Standard font resources
//! - `writer`: File structure, compression and cross-reference table
//! - `options`: PDF export configuration
//! - `api`: Public API for PDF export

mod api;
mod content;
mod fonts;
mod objects;
mod options;
mod writer;

pub use api::*;
pub use render_model::{encode_text, REPLACEMENT};
pub use options::*;
pub use writer::{PdfDocumentWriter, PdfError, PDF_VERSION};
