//! Error-context snapshots built at the moment an unhandled error is
//! captured.
//!
//! An [`ErrorSnapshot`] is assembled once per capture from the failing
//! [`Fault`](crate::panic::Fault) and the host collaborators, enriched by the
//! before hook and the notes dialog, consumed by the record codec, and then
//! discarded. Nothing retains snapshots between captures.

use chrono::{DateTime, Utc};

use crate::{context::HostContext, panic::Fault};

/// Rendering format for [`ErrorSnapshot::captured_at`]: UTC at fixed
/// microsecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Everything known about an unhandled error at capture time.
///
/// Field values are plain text; escaping happens in the codec when the
/// snapshot is rendered into a record, never here.
#[derive(Debug, Clone)]
pub struct ErrorSnapshot {
    /// Capture instant, UTC.
    pub captured_at: DateTime<Utc>,
    /// Host OS/platform descriptor.
    pub platform: String,
    /// Hosting application name.
    pub app_name: String,
    /// Hosting application version.
    pub app_version: String,
    /// Licence identity; empty until a before hook fills it in.
    pub app_license: String,
    /// Best-effort description of the focused window, empty if unavailable.
    pub active_window: String,
    /// Best-effort description of the focused control, empty if unavailable.
    pub active_control: String,
    /// Category/class identifier of the error.
    pub exception_kind: String,
    /// Message/payload of the error.
    pub exception_value: String,
    /// Full formatted stack trace, trimmed of surrounding whitespace.
    pub traceback: String,
    /// Deferred UI callbacks still outstanding, empty when the host cannot
    /// report them.
    pub pending_callbacks: String,
    /// Free text entered in the notes dialog; `None` until the dialog
    /// interaction completes.
    pub user_notes: Option<String>,
}

impl ErrorSnapshot {
    /// Build a snapshot for `fault` from the host collaborators.
    ///
    /// `user_notes` is left unset: a snapshot handed to the before hook never
    /// carries notes.
    #[must_use]
    pub fn capture(fault: &Fault, context: &dyn HostContext) -> Self {
        let identity = context.identity();
        Self {
            captured_at: Utc::now(),
            platform: context.platform(),
            app_name: identity.name,
            app_version: identity.version,
            app_license: String::new(),
            active_window: context.active_window(),
            active_control: context.active_control(),
            exception_kind: fault.kind.clone(),
            exception_value: fault.message.clone(),
            traceback: fault.trace.clone(),
            pending_callbacks: context.pending_callbacks(),
            user_notes: None,
        }
    }

    /// Record the user's dialog notes, trimmed of surrounding whitespace.
    pub fn merge_notes(&mut self, notes: &str) {
        self.user_notes = Some(notes.trim().to_owned());
    }

    /// Field values in persisted-record order, keyed by placeholder name.
    ///
    /// `user_notes` renders as the empty string when never set.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, String); 12] {
        [
            (
                "timestamp",
                self.captured_at.format(TIMESTAMP_FORMAT).to_string(),
            ),
            ("app_name", self.app_name.clone()),
            ("app_version", self.app_version.clone()),
            ("app_license", self.app_license.clone()),
            ("platform", self.platform.clone()),
            ("exc_type", self.exception_kind.clone()),
            ("exc_obj", self.exception_value.clone()),
            ("active_form", self.active_window.clone()),
            ("active_control", self.active_control.clone()),
            ("tb_msg", self.traceback.clone()),
            ("last_callafter_stack", self.pending_callbacks.clone()),
            ("user_notes", self.user_notes.clone().unwrap_or_default()),
        ]
    }
}
