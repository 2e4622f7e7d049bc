use std::path::PathBuf;

/// Where the config file lives.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigLocation {
    /// Current working directory. This is where the launcher looks by default.
    Cwd,
    /// Platform config directory (XDG on Linux, ~/Library/Application Support on macOS).
    Platform,
    /// An explicit directory.
    Path(PathBuf),
}

/// What a load actually did.
///
/// Loading never fails. Problems are logged and reported here so the caller
/// can decide whether to surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// An existing file was read and parsed.
    Loaded,
    /// No file existed; the default document was written and loaded.
    DefaultsWritten,
    /// The existing file could not be read or decoded. The default document
    /// was written over it and loaded.
    Recovered { reason: String },
    /// The default document could not be written. The in-memory store holds
    /// the defaults, but the file on disk is missing or stale.
    DefaultsUnpersisted { reason: String },
}

impl LoadOutcome {
    /// True when the store came from defaults rather than the user's file.
    pub fn used_defaults(&self) -> bool {
        !matches!(self, LoadOutcome::Loaded)
    }
}

/// A config operation, independent of any CLI framework.
/// Keys are dotted `section.key` paths, split at the first `.`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    Gen { output: Option<PathBuf> },
    List { json: bool },
    Get { key: String },
    Set { key: String, value: String },
    Unset { key: String },
}
