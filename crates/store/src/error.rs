//! Error types for storage operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] crate::pdf::PdfError),

    #[error("Layout error: {0}")]
    Layout(#[from] layout_engine::LayoutError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
