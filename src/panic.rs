//! The fault value delivered to the interceptor.
//!
//! A [`Fault`] carries the category, message, and formatted trace of one
//! unhandled error. [`Fault::from_panic`] builds it from runtime panic hook
//! info, downcasting the payload to its usual string forms.

use std::{backtrace::Backtrace, panic::PanicHookInfo};

/// Identifier used for [`Fault::kind`] when the fault originates from a
/// runtime panic.
pub const PANIC_KIND: &str = "panic";

/// The error triple delivered to the interceptor: category, message, and
/// formatted stack trace.
#[derive(Debug, Clone)]
pub struct Fault {
    /// Category/class identifier of the error.
    pub kind: String,
    /// Message/payload of the error.
    pub message: String,
    /// Full formatted stack trace, trimmed of surrounding whitespace.
    pub trace: String,
}

impl Fault {
    /// Build a fault from its raw parts, trimming the trace text.
    #[must_use]
    pub fn new(
        kind: impl Into<String>,
        message: impl Into<String>,
        trace: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            trace: trace.into().trim().to_owned(),
        }
    }

    /// Build a fault from panic hook info, capturing a backtrace.
    ///
    /// The payload is downcast to `&'static str` or `String`; any other
    /// payload type yields a placeholder message. The panic's source
    /// location, when known, heads the trace text so the persisted record
    /// points at the failing frame even when the backtrace itself is
    /// uninformative.
    #[must_use]
    pub fn from_panic(info: &PanicHookInfo<'_>) -> Self {
        let message = if let Some(s) = info.payload().downcast_ref::<&'static str>() {
            (*s).to_owned()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_owned()
        };

        let backtrace = Backtrace::force_capture();
        let trace = match info.location() {
            Some(location) => format!("panicked at {location}\n{backtrace}"),
            None => backtrace.to_string(),
        };

        Self::new(PANIC_KIND, message, trace)
    }
}
