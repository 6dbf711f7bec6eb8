//! The modal notes dialog seam.
//!
//! Rendering belongs to the host's GUI toolkit; the pipeline only needs a
//! blocking call that returns whatever the user typed.

use std::io;

use crate::snapshot::ErrorSnapshot;

/// Collaborator that shows the user a modal notes-entry dialog.
pub trait NotesDialog: Send + Sync {
    /// Display a modal dialog for `snapshot` and block until dismissed.
    ///
    /// The snapshot handed in is the user-facing copy: its traceback may have
    /// been blanked by configuration. Implementations return the entered
    /// notes text; surrounding whitespace is trimmed by the caller.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when the dialog cannot be displayed. The
    /// capture attempt is then abandoned, never retried.
    fn collect_notes(&self, snapshot: &ErrorSnapshot) -> io::Result<String>;
}

/// Headless dialog used when no toolkit dialog has been supplied.
///
/// Collects no notes and never fails, so captures proceed straight to the
/// record write.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDialog;

impl NotesDialog for NullDialog {
    fn collect_notes(&self, _snapshot: &ErrorSnapshot) -> io::Result<String> {
        Ok(String::new())
    }
}
