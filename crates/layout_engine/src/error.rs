//! Error types for layout engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid page setup: {0}")]
    InvalidPageSetup(String),

    #[error("Render surface error: {0}")]
    Render(#[from] render_model::RenderError),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
