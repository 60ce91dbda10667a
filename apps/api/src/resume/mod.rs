//! Resume draft editing as an explicit state container.

pub mod draft;
pub mod handlers;

pub use draft::{apply_event, ResumeEvent};
