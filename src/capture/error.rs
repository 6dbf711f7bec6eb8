//! Error types for the capture pipeline.

use std::io;

use thiserror::Error;

use crate::codec::CodecError;

/// Failure inside a capture attempt.
///
/// There is no local recovery: the interceptor is already restored when any
/// of these occur, so they surface through the runtime's default unhandled
/// path instead of re-entering capture.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CaptureError {
    /// The notes dialog could not be displayed.
    #[error("notes dialog failed: {0}")]
    Dialog(#[source] io::Error),
    /// The encoded record could not be written.
    #[error("failed to persist error record: {0}")]
    Persist(#[source] io::Error),
    /// The configured log spec could not render the snapshot.
    #[error("record encoding failed: {0}")]
    Encode(#[from] CodecError),
}

/// Result type used throughout the capture API.
pub type Result<T> = std::result::Result<T, CaptureError>;
