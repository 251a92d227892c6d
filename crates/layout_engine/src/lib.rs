//! Layout Engine - Paginated export of onboarding forms
//!
//! This crate walks a form snapshot in a fixed section order and flows it
//! onto pages through a render surface, breaking pages before any chunk
//! that would cross the bottom of the printable area.

mod error;
mod filename;
mod geometry;
mod onboarding;
mod paginator;

pub use error::*;
pub use filename::*;
pub use geometry::*;
pub use onboarding::*;
pub use paginator::*;
