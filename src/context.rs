//! Host-application introspection consumed while building a snapshot.
//!
//! The GUI toolkit and application framework sit behind [`HostContext`]; the
//! capture pipeline only ever asks for strings. Everything except identity is
//! best-effort and defaults to empty or a generic value.

/// Identity of the hosting application.
#[derive(Debug, Clone)]
pub struct AppIdentity {
    /// Display name.
    pub name: String,
    /// Version string.
    pub version: String,
    /// Short name used for the per-user data directory.
    pub short_name: String,
}

/// Collaborator interface the host implements for snapshot building.
pub trait HostContext: Send + Sync {
    /// Application identity used in records and directory resolution.
    fn identity(&self) -> AppIdentity;

    /// Host OS/platform descriptor string.
    fn platform(&self) -> String {
        format!(
            "{} {} ({})",
            std::env::consts::OS,
            std::env::consts::ARCH,
            std::env::consts::FAMILY
        )
    }

    /// Description of the focused window, empty when unavailable.
    fn active_window(&self) -> String { String::new() }

    /// Description of the focused control, empty when unavailable.
    fn active_control(&self) -> String { String::new() }

    /// Deferred UI callbacks still outstanding, empty when the framework
    /// cannot report them.
    fn pending_callbacks(&self) -> String { String::new() }
}

/// Minimal [`HostContext`] for hosts without UI-focus introspection.
#[derive(Debug, Clone)]
pub struct StaticContext {
    identity: AppIdentity,
}

impl StaticContext {
    /// Build a context from the application identity alone.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        short_name: impl Into<String>,
    ) -> Self {
        Self {
            identity: AppIdentity {
                name: name.into(),
                version: version.into(),
                short_name: short_name.into(),
            },
        }
    }
}

impl HostContext for StaticContext {
    fn identity(&self) -> AppIdentity { self.identity.clone() }
}
