//! Capture surface: the session state machine, its outcomes, and error types.
//!
//! This module curates the primary capture APIs so hosts can
//! `use crashnote::capture::*` to access [`CaptureSession`],
//! [`CaptureOutcome`], and the [`CaptureError`]/[`Result`] pair.

mod error;
mod session;

pub use error::{CaptureError, Result};
pub use session::{CaptureOutcome, CaptureSession};
