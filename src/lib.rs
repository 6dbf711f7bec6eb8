//! Public API for the `crashnote` library.
//!
//! This crate captures unhandled errors in desktop GUI applications: it
//! intercepts the process-wide hook, snapshots error context, collects
//! optional user notes through a modal dialog, writes one structured record
//! per error to the per-user log directory, and then terminates the process.

pub mod capture;
pub use capture::{CaptureError, CaptureOutcome, CaptureSession, Result};
pub mod codec;
pub use codec::{CodecError, Escaped, LogSpec, RecordCodec};
pub mod config;
pub use config::CaptureConfig;
pub mod context;
pub mod dialog;
pub mod hooks;
pub use hooks::{CaptureHooks, HookOutcome};
pub mod interceptor;
pub mod panic;
pub use panic::Fault;
pub mod prelude;
pub mod sink;
pub mod snapshot;
pub use snapshot::ErrorSnapshot;
