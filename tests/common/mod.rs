//! Shared test doubles for the capture pipeline.
//!
//! Recording stand-ins for every collaborator seam: the interceptor slot,
//! the notes dialog, the record sink, and the capture hooks.
#![allow(dead_code)]

use std::{
    io,
    path::PathBuf,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use crashnote::{
    CaptureConfig, CaptureSession, LogSpec,
    context::StaticContext,
    dialog::NotesDialog,
    hooks::{CaptureHooks, HookOutcome},
    interceptor::{Interceptor, InterceptorSlot},
    panic::Fault,
    sink::RecordSink,
    snapshot::ErrorSnapshot,
};

/// Observable state of the fake interceptor slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Default,
    Installed,
}

/// Recording stand-in for the process-wide interceptor slot.
pub struct FakeSlot {
    state: Mutex<SlotState>,
    installs: AtomicUsize,
}

impl Default for FakeSlot {
    fn default() -> Self {
        Self {
            state: Mutex::new(SlotState::Default),
            installs: AtomicUsize::new(0),
        }
    }
}

impl FakeSlot {
    pub fn state(&self) -> SlotState { *self.state.lock().expect("slot state poisoned") }

    pub fn installs(&self) -> usize { self.installs.load(Ordering::SeqCst) }
}

impl InterceptorSlot for FakeSlot {
    fn install(&self, _interceptor: Interceptor) {
        *self.state.lock().expect("slot state poisoned") = SlotState::Installed;
        self.installs.fetch_add(1, Ordering::SeqCst);
    }

    fn restore_default(&self) {
        *self.state.lock().expect("slot state poisoned") = SlotState::Default;
    }
}

/// Sink recording every written record in memory.
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    pub fn count(&self) -> usize { self.records.lock().expect("sink poisoned").len() }

    pub fn last_record(&self) -> Option<String> {
        self.records
            .lock()
            .expect("sink poisoned")
            .last()
            .map(|(_, record)| record.clone())
    }

    pub fn last_file_name(&self) -> Option<String> {
        self.records
            .lock()
            .expect("sink poisoned")
            .last()
            .map(|(name, _)| name.clone())
    }
}

impl RecordSink for RecordingSink {
    fn write(&self, file_name: &str, record: &str) -> io::Result<PathBuf> {
        self.records
            .lock()
            .expect("sink poisoned")
            .push((file_name.to_owned(), record.to_owned()));
        Ok(PathBuf::from(file_name))
    }
}

/// Dialog double returning fixed notes and recording what it was shown.
pub struct RecordingDialog {
    notes: String,
    calls: AtomicUsize,
    seen: Mutex<Option<ErrorSnapshot>>,
    watched_slot: Option<Arc<FakeSlot>>,
    slot_state_at_call: Mutex<Option<SlotState>>,
}

impl RecordingDialog {
    pub fn returning(notes: &str) -> Self {
        Self {
            notes: notes.to_owned(),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(None),
            watched_slot: None,
            slot_state_at_call: Mutex::new(None),
        }
    }

    /// Additionally record the slot's state at the moment the dialog opens.
    pub fn watching_slot(notes: &str, slot: Arc<FakeSlot>) -> Self {
        Self {
            watched_slot: Some(slot),
            ..Self::returning(notes)
        }
    }

    pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }

    pub fn seen_traceback(&self) -> Option<String> {
        self.seen
            .lock()
            .expect("dialog poisoned")
            .as_ref()
            .map(|snapshot| snapshot.traceback.clone())
    }

    pub fn slot_state_at_call(&self) -> Option<SlotState> {
        *self.slot_state_at_call.lock().expect("dialog poisoned")
    }
}

impl NotesDialog for RecordingDialog {
    fn collect_notes(&self, snapshot: &ErrorSnapshot) -> io::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(slot) = &self.watched_slot {
            *self.slot_state_at_call.lock().expect("dialog poisoned") = Some(slot.state());
        }
        *self.seen.lock().expect("dialog poisoned") = Some(snapshot.clone());
        Ok(self.notes.clone())
    }
}

/// Dialog double that fails as if no display were available.
#[derive(Default)]
pub struct FailingDialog;

impl NotesDialog for FailingDialog {
    fn collect_notes(&self, _snapshot: &ErrorSnapshot) -> io::Result<String> {
        Err(io::Error::other("no display"))
    }
}

/// Hooks that veto at the before point.
#[derive(Default)]
pub struct StopBefore;

impl CaptureHooks for StopBefore {
    fn before_handle(&self, _snapshot: &mut ErrorSnapshot) -> HookOutcome { HookOutcome::Stop }
}

/// Hooks that veto at the after point.
#[derive(Default)]
pub struct StopAfter;

impl CaptureHooks for StopAfter {
    fn after_handle(&self, _snapshot: &ErrorSnapshot) -> HookOutcome { HookOutcome::Stop }
}

/// Hooks filling in the licence field, the documented before-hook use case.
#[derive(Default)]
pub struct LicenseFiller;

impl CaptureHooks for LicenseFiller {
    fn before_handle(&self, snapshot: &mut ErrorSnapshot) -> HookOutcome {
        snapshot.app_license = "Site licence 42".to_owned();
        HookOutcome::Proceed
    }
}

/// Hooks recording whether the before snapshot already carried notes.
#[derive(Default)]
pub struct NotesProbe {
    before_saw_notes: Mutex<Option<bool>>,
}

impl NotesProbe {
    pub fn before_saw_notes(&self) -> Option<bool> {
        *self.before_saw_notes.lock().expect("probe poisoned")
    }
}

impl CaptureHooks for NotesProbe {
    fn before_handle(&self, snapshot: &mut ErrorSnapshot) -> HookOutcome {
        *self.before_saw_notes.lock().expect("probe poisoned") =
            Some(snapshot.user_notes.is_some());
        HookOutcome::Proceed
    }
}

/// The fault used across the flow tests.
pub fn sample_fault() -> Fault {
    Fault::new(
        "ZeroDivisionError",
        "division by zero",
        "Traceback (most recent call last):\n  1 / 0\n",
    )
}

/// Session wired to the given doubles, with capture always enabled.
pub fn test_session(
    sink: Arc<RecordingSink>,
    dialog: Arc<RecordingDialog>,
    hooks: Arc<dyn CaptureHooks>,
    slot: Arc<FakeSlot>,
    show_traceback_to_user: bool,
) -> Arc<CaptureSession> {
    let context = Arc::new(StaticContext::new("Demo", "1.0", "demo"));
    Arc::new(
        CaptureSession::new(context, sink)
            .with_config(CaptureConfig {
                handle_errors: true,
                show_traceback_to_user,
                log_spec: LogSpec::default(),
            })
            .with_dialog(dialog)
            .with_hooks(hooks)
            .with_slot(slot),
    )
}
