//! Error types for render model

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to save {file_name}: {source}")]
    Save {
        file_name: String,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    /// Wrap an I/O failure raised while saving `file_name`
    pub fn save(file_name: impl Into<String>, source: std::io::Error) -> Self {
        RenderError::Save {
            file_name: file_name.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
