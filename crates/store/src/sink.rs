//! PDF file sink
//!
//! Receives the finished document from the layout pass and writes it as a
//! PDF file into an output directory.

use crate::pdf::{export_pdf, PdfExportOptions};
use render_model::{Document, DocumentSink, RenderError};
use std::io;
use std::path::{Path, PathBuf};

/// A file written by [`PdfFileSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Writes saved documents as PDF files under `output_dir`
#[derive(Debug, Clone)]
pub struct PdfFileSink {
    output_dir: PathBuf,
    options: PdfExportOptions,
    last_written: Option<WrittenFile>,
}

impl PdfFileSink {
    pub fn new(output_dir: impl Into<PathBuf>, options: PdfExportOptions) -> Self {
        Self {
            output_dir: output_dir.into(),
            options,
            last_written: None,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The most recently written file, if any
    pub fn last_written(&self) -> Option<&WrittenFile> {
        self.last_written.as_ref()
    }

    fn write(&self, document: &Document, file_name: &str) -> io::Result<WrittenFile> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(file_name);
        export_pdf(document, &path, &self.options).map_err(io::Error::other)?;
        let size_bytes = std::fs::metadata(&path)?.len();
        Ok(WrittenFile { path, size_bytes })
    }
}

impl DocumentSink for PdfFileSink {
    fn save(&mut self, document: &Document, file_name: &str) -> render_model::Result<()> {
        let written = self
            .write(document, file_name)
            .map_err(|e| RenderError::save(file_name, e))?;
        tracing::debug!(
            "wrote {} ({} bytes)",
            written.path.display(),
            written.size_bytes
        );
        self.last_written = Some(written);
        Ok(())
    }
}
