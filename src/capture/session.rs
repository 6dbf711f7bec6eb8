//! The capture session: hook management and the per-error state machine.

use std::sync::Arc;

use crate::{
    codec::RecordCodec,
    config::CaptureConfig,
    context::HostContext,
    dialog::{NotesDialog, NullDialog},
    hooks::{CaptureHooks, DefaultHooks, HookOutcome},
    interceptor::{InterceptorSlot, PanicSlot},
    panic::Fault,
    sink::RecordSink,
    snapshot::ErrorSnapshot,
};

use super::error::{CaptureError, Result};

/// How a capture attempt ended.
///
/// The two stopped variants mark the distinct veto points; both leave the
/// process running in an unspecified state, which is the documented sharp
/// edge of the hook contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum CaptureOutcome {
    /// The before hook vetoed the pipeline: no dialog, no record, no exit.
    StoppedBeforeDialog,
    /// The after hook vetoed termination: the record is written, the process
    /// stays up.
    StoppedBeforeExit,
    /// The full pipeline ran; the caller should terminate the process with a
    /// success status.
    Terminate,
}

/// Owns the process-wide interceptor and drives the capture pipeline.
///
/// The host constructs one session at startup, keeps it in an [`Arc`], and
/// calls [`install`](Self::install). From then on an unhandled error runs
/// snapshot → before hook → dialog → record → after hook → exit.
///
/// ```no_run
/// use std::sync::Arc;
///
/// use crashnote::{
///     CaptureSession,
///     context::StaticContext,
///     sink::{DirectorySink, FixedDir},
/// };
///
/// let context = Arc::new(StaticContext::new("Demo", "1.0", "demo"));
/// let sink = Arc::new(DirectorySink::new(
///     Arc::new(FixedDir::new("/tmp/demo-errors")),
///     "demo",
/// ));
/// let session = Arc::new(CaptureSession::new(context, sink));
/// session.install();
/// ```
pub struct CaptureSession {
    config: CaptureConfig,
    codec: RecordCodec,
    context: Arc<dyn HostContext>,
    sink: Arc<dyn RecordSink>,
    hooks: Arc<dyn CaptureHooks>,
    dialog: Arc<dyn NotesDialog>,
    slot: Arc<dyn InterceptorSlot>,
}

impl CaptureSession {
    /// Build a session with default configuration, no-op hooks, the headless
    /// dialog, and the runtime panic hook as its interceptor slot.
    #[must_use]
    pub fn new(context: Arc<dyn HostContext>, sink: Arc<dyn RecordSink>) -> Self {
        let config = CaptureConfig::default();
        Self {
            codec: RecordCodec::new(config.log_spec.clone()),
            config,
            context,
            sink,
            hooks: Arc::new(DefaultHooks),
            dialog: Arc::new(NullDialog),
            slot: Arc::new(PanicSlot),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: CaptureConfig) -> Self {
        self.codec = RecordCodec::new(config.log_spec.clone());
        self.config = config;
        self
    }

    /// Supply host hooks for the two veto points.
    #[must_use]
    pub fn with_hooks(mut self, hooks: Arc<dyn CaptureHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Supply the toolkit's modal notes dialog.
    #[must_use]
    pub fn with_dialog(mut self, dialog: Arc<dyn NotesDialog>) -> Self {
        self.dialog = dialog;
        self
    }

    /// Substitute the interceptor slot, primarily for tests.
    #[must_use]
    pub fn with_slot(mut self, slot: Arc<dyn InterceptorSlot>) -> Self {
        self.slot = slot;
        self
    }

    /// Install the interceptor when the configuration enables capture.
    ///
    /// The `handle_errors` default restricts capture to release builds, so a
    /// development run keeps the runtime's own reporting.
    pub fn install(self: &Arc<Self>) {
        if self.config.handle_errors {
            self.enable(true);
        }
    }

    /// Install (`true`) or tear down (`false`) the process-wide interceptor.
    ///
    /// Repeated `enable(true)` calls simply re-install; `enable(false)`
    /// restores the platform/runtime default handler.
    pub fn enable(self: &Arc<Self>, flag: bool) {
        if flag {
            let session = Arc::clone(self);
            self.slot
                .install(Box::new(move |fault| session.intercept(fault)));
            tracing::debug!("error capture enabled");
        } else {
            self.slot.restore_default();
            tracing::debug!("error capture disabled");
        }
    }

    /// Interceptor entry point: run the pipeline and act on its outcome.
    fn intercept(&self, fault: Fault) {
        match self.capture(fault) {
            Ok(CaptureOutcome::Terminate) => std::process::exit(0),
            Ok(outcome) => {
                tracing::warn!(?outcome, "capture stopped by hook; process left running");
            }
            Err(error) => {
                // The default interceptor is already re-armed; report and let
                // the runtime finish the error its usual way.
                tracing::error!(%error, "error capture failed");
            }
        }
    }

    /// Run the capture pipeline for one unhandled error.
    ///
    /// The first action unconditionally restores the default interceptor, so
    /// a failure anywhere below reaches the runtime instead of recursing into
    /// this routine.
    ///
    /// # Errors
    ///
    /// Returns a [`CaptureError`] when the dialog, the codec, or the record
    /// write fails. The attempt is abandoned; nothing is retried.
    pub fn capture(&self, fault: Fault) -> Result<CaptureOutcome> {
        self.slot.restore_default();

        let mut snapshot = ErrorSnapshot::capture(&fault, self.context.as_ref());
        tracing::error!(
            kind = %snapshot.exception_kind,
            value = %snapshot.exception_value,
            "unhandled error captured"
        );

        if self.hooks.before_handle(&mut snapshot) == HookOutcome::Stop {
            tracing::warn!("before hook stopped capture; no record written");
            return Ok(CaptureOutcome::StoppedBeforeDialog);
        }

        let notes = self
            .dialog
            .collect_notes(&self.user_facing(&snapshot))
            .map_err(CaptureError::Dialog)?;
        snapshot.merge_notes(&notes);

        let record = self.codec.encode(&snapshot)?;
        let file_name = self.codec.file_name(&snapshot);
        self.sink
            .write(&file_name, &record)
            .map_err(CaptureError::Persist)?;

        if self.hooks.after_handle(&snapshot) == HookOutcome::Stop {
            tracing::warn!("after hook stopped termination; process left running");
            return Ok(CaptureOutcome::StoppedBeforeExit);
        }
        Ok(CaptureOutcome::Terminate)
    }

    /// Copy of the snapshot shown to the user, with the traceback blanked
    /// unless configuration says otherwise. The persisted record always keeps
    /// the real trace.
    fn user_facing(&self, snapshot: &ErrorSnapshot) -> ErrorSnapshot {
        let mut shown = snapshot.clone();
        if !self.config.show_traceback_to_user {
            shown.traceback.clear();
        }
        shown
    }
}
