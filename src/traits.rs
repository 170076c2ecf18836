//! Core traits for dependency injection and testability
//!
//! The resolver, the orchestrator and the backends never reach into global
//! state to print or to poke at the host. They receive these collaborators
//! instead, so tests can swap in recording or scripted implementations.

use std::path::PathBuf;

/// Sink for everything the core wants to tell the user
///
/// Must be `Sync`: the output relay forwards lines from two reader
/// threads at once, and both end up in `progress`.
pub trait Reporter: Send + Sync {
    fn info(&self, msg: &str);
    fn success(&self, msg: &str);
    fn warning(&self, msg: &str);
    fn error(&self, msg: &str);

    /// Debug-level message, only shown in verbose mode
    fn verbose(&self, msg: &str);

    /// Re-render the single overwritable progress line for `label`
    fn progress(&self, label: &str, line: &str);

    /// Terminate the current progress line
    fn end_progress(&self);
}

/// Read-only questions asked of the host system
///
/// Mutating subprocesses (install/remove/update) are spawned directly; only
/// the probes used to compute package status go through here.
pub trait SystemProbe: Send + Sync {
    /// Run `program args...` and return its stdout if it exited successfully
    fn capture(&self, program: &str, args: &[&str]) -> Option<String>;

    /// Resolve a binary on `PATH`
    fn lookup(&self, binary: &str) -> Option<PathBuf>;
}

// Default implementations are in their respective modules:
// - ConsoleReporter: crate::ui
// - HostProbe: crate::packages::probe
