//! Onboarding form export to PDF files

use crate::sink::PdfFileSink;
use crate::{ExportSettings, Result, StoreError};
use chrono::{DateTime, Utc};
use form_model::FormState;
use layout_engine::OnboardingExporter;
use std::path::PathBuf;

/// Summary of a completed export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Full path of the written PDF
    pub path: PathBuf,
    pub file_name: String,
    pub page_count: usize,
    pub size_bytes: u64,
}

/// Export `state` as a PDF file stamped with the current instant
pub fn export_onboarding_pdf(state: &FormState, settings: &ExportSettings) -> Result<ExportReport> {
    export_onboarding_pdf_at(state, settings, Utc::now())
}

/// Export `state` as a PDF file stamped with `generated_at`
///
/// The timestamp appears in the page header and in the file name.
pub fn export_onboarding_pdf_at(
    state: &FormState,
    settings: &ExportSettings,
    generated_at: DateTime<Utc>,
) -> Result<ExportReport> {
    let exporter = OnboardingExporter::with_geometry(settings.page)?;
    let mut sink = PdfFileSink::new(settings.output_dir.clone(), settings.pdf.clone());

    let outcome = exporter.export(state, &mut sink, generated_at)?;
    let written = sink.last_written().cloned().ok_or_else(|| {
        StoreError::Io(std::io::Error::other(format!(
            "{} was not written",
            outcome.file_name
        )))
    })?;

    Ok(ExportReport {
        path: written.path,
        file_name: outcome.file_name,
        page_count: outcome.document.page_count(),
        size_bytes: written.size_bytes,
    })
}
