//! Store - PDF export and export settings
//!
//! This crate serializes recorded documents as PDF files, provides the file
//! sink the layout engine saves into, loads export settings, and exposes the
//! one-call onboarding export.

mod error;
mod export;
mod settings;
mod sink;
pub mod pdf;

pub use error::*;
pub use export::*;
pub use settings::*;
pub use sink::*;
