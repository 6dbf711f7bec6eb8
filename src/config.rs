//! Capture configuration.
//!
//! A plain struct supplied at session construction; every option has a
//! documented default, so hosts typically tweak one field of
//! [`CaptureConfig::default`].

use crate::codec::LogSpec;

/// Options recognised by a [`CaptureSession`](crate::CaptureSession).
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Whether [`install`](crate::CaptureSession::install) hooks the
    /// process-wide interceptor. Defaults to true only in release builds,
    /// the Rust analogue of "only when packaged for end users".
    pub handle_errors: bool,
    /// Whether the dialog-facing snapshot keeps its traceback. The persisted
    /// record always carries the full trace regardless. Defaults to false.
    pub show_traceback_to_user: bool,
    /// Template for the persisted record.
    pub log_spec: LogSpec,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            handle_errors: !cfg!(debug_assertions),
            show_traceback_to_user: false,
            log_spec: LogSpec::default(),
        }
    }
}
