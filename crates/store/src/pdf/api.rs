//! PDF Export Public API

use super::options::PdfExportOptions;
use super::writer::{PdfDocumentWriter, Result};
use render_model::Document;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Export a recorded document to a PDF file
///
/// # Example
///
/// ```ignore
/// use store::pdf::{export_pdf, PdfExportOptions};
///
/// let options = PdfExportOptions::new().with_author("Solutions Team");
/// export_pdf(&document, "acme_onboarding.pdf", &options)?;
/// ```
pub fn export_pdf(
    document: &Document,
    path: impl AsRef<Path>,
    options: &PdfExportOptions,
) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    PdfDocumentWriter::new(options.clone()).write(document, writer)
}

/// Export a recorded document to PDF bytes in memory
pub fn write_document(document: &Document, options: &PdfExportOptions) -> Result<Vec<u8>> {
    PdfDocumentWriter::new(options.clone()).write_to_bytes(document)
}
