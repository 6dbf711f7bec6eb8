//! Host extension points invoked around the capture pipeline.
//!
//! [`CaptureHooks`] exposes the two veto points the embedding application may
//! override: before the dialog is shown and after the record is written. Both
//! default to [`HookOutcome::Proceed`].

use crate::snapshot::ErrorSnapshot;

/// Result of a capture hook: continue the pipeline or stop it here.
///
/// Stopping leaves the process running in an unspecified state. That escape
/// hatch is part of the contract, documented as discouraged, and deliberately
/// not softened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum HookOutcome {
    /// Continue with the default pipeline.
    Proceed,
    /// Veto the remainder of the pipeline at this hook's stopping point.
    Stop,
}

/// Trait encapsulating the host-supplied capture hooks.
///
/// Implementations run on whatever thread delivered the unhandled error, with
/// the interceptor already restored to the runtime default.
pub trait CaptureHooks: Send + Sync {
    /// Invoked with the freshly built snapshot, before any dialog is shown.
    ///
    /// The snapshot is mutable so hosts can enrich it; filling in
    /// [`app_license`](ErrorSnapshot::app_license) is the typical use.
    /// Returning [`HookOutcome::Stop`] skips the dialog, the record write,
    /// and process termination.
    fn before_handle(&self, _snapshot: &mut ErrorSnapshot) -> HookOutcome { HookOutcome::Proceed }

    /// Invoked after the record has been persisted, before termination.
    ///
    /// Returning [`HookOutcome::Stop`] keeps the process alive; the record is
    /// already on disk at that point.
    fn after_handle(&self, _snapshot: &ErrorSnapshot) -> HookOutcome { HookOutcome::Proceed }
}

/// No-op hooks: every capture runs the full pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHooks;

impl CaptureHooks for DefaultHooks {}
