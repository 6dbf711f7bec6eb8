//! Record persistence: directory resolution and the one-shot file write.
//!
//! Each capture writes one distinct file, all or nothing. There is no
//! append, no locking, and no partial-write recovery; a missing directory or
//! denied write surfaces as a raw I/O failure.

use std::{fs, io, path::PathBuf, sync::Arc};

/// Resolves the writable per-user data directory for an application.
///
/// The resolver is responsible for the directory existing; the sink does not
/// create it.
pub trait LogDirResolver: Send + Sync {
    /// Directory error records are written into.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when no per-user directory can be resolved.
    fn user_data_dir(&self, app_short_name: &str) -> io::Result<PathBuf>;
}

/// Resolver returning one fixed directory regardless of application.
#[derive(Debug, Clone)]
pub struct FixedDir(PathBuf);

impl FixedDir {
    /// Always resolve to `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self { Self(dir.into()) }
}

impl LogDirResolver for FixedDir {
    fn user_data_dir(&self, _app_short_name: &str) -> io::Result<PathBuf> { Ok(self.0.clone()) }
}

/// Collaborator that durably stores one encoded record.
pub trait RecordSink: Send + Sync {
    /// Persist `record` under `file_name`, returning the written path.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when the record cannot be written.
    fn write(&self, file_name: &str, record: &str) -> io::Result<PathBuf>;
}

/// [`RecordSink`] writing each record as a file in the resolved per-user
/// directory.
pub struct DirectorySink {
    resolver: Arc<dyn LogDirResolver>,
    app_short_name: String,
}

impl DirectorySink {
    /// Build a sink that resolves the directory through `resolver` using the
    /// application's short name.
    #[must_use]
    pub fn new(resolver: Arc<dyn LogDirResolver>, app_short_name: impl Into<String>) -> Self {
        Self {
            resolver,
            app_short_name: app_short_name.into(),
        }
    }
}

impl RecordSink for DirectorySink {
    fn write(&self, file_name: &str, record: &str) -> io::Result<PathBuf> {
        let dir = self.resolver.user_data_dir(&self.app_short_name)?;
        let path = dir.join(file_name);
        fs::write(&path, record)?;
        tracing::info!(path = %path.display(), "error record written");
        Ok(path)
    }
}
