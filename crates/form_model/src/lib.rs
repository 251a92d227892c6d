//! Form Model - Onboarding questionnaire state
//!
//! This crate holds the values of every onboarding form section and the
//! closed set of updates that produce a new form state from the previous one.
//! Export code only ever reads a `&FormState` snapshot.

mod error;
mod form;
mod items;
mod stack;
mod update;

pub use error::*;
pub use form::*;
pub use items::*;
pub use stack::*;
pub use update::*;
