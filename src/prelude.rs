//! Optional convenience imports for common crashnote workflows.
//!
//! This module is intentionally small and focused on high-frequency types.
//! Prefer importing specialised APIs directly from their owning modules.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use crashnote::prelude::*;
//!
//! let context = Arc::new(StaticContext::new("Demo", "1.0", "demo"));
//! let sink = Arc::new(DirectorySink::new(Arc::new(FixedDir::new("/tmp")), "demo"));
//! let session = Arc::new(CaptureSession::new(context, sink));
//! session.install();
//! ```

pub use crate::{
    capture::{CaptureError, CaptureOutcome, CaptureSession, Result},
    codec::LogSpec,
    config::CaptureConfig,
    context::{HostContext, StaticContext},
    dialog::NotesDialog,
    hooks::{CaptureHooks, HookOutcome},
    sink::{DirectorySink, FixedDir, RecordSink},
    snapshot::ErrorSnapshot,
};
