//! Error types for form model parsing

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormModelError {
    #[error("Unknown {kind} label: {label:?}")]
    UnknownLabel { kind: &'static str, label: String },

    #[error("Unknown technical stack category: {0}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, FormModelError>;
