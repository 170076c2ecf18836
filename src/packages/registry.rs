//! # Backend Registry
//!
//! Picks the single package manager backend used for the whole invocation.
//!
//! Backends are registered per OS identifier (`std::env::consts::OS`) in
//! preference order. Selection constructs each candidate for the host OS and
//! keeps the first one whose `is_available()` probe succeeds. Nothing is
//! re-evaluated mid-run.
//!
//! ## Adding a New Backend
//!
//! 1. Create `src/packages/<tool>.rs` with a Manager struct
//! 2. Implement the `PackageManager` trait
//! 3. Register it for the relevant OS in `BackendRegistry::register_defaults()`
//!
//! The orchestrator and the commands never need to change.

use crate::packages::PackageManager;
use crate::packages::brew::BrewManager;
use crate::utils::platform;

/// Factory function for creating package manager instances
pub type BackendFactory = Box<dyn Fn() -> Box<dyn PackageManager> + Send + Sync>;

pub struct BackendRegistry {
    factories: Vec<(&'static str, BackendFactory)>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Registry with every built-in backend
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }

    /// Register a backend candidate for `os`; earlier registrations win
    pub fn register<F>(&mut self, os: &'static str, factory: F)
    where
        F: Fn() -> Box<dyn PackageManager> + Send + Sync + 'static,
    {
        self.factories.push((os, Box::new(factory)));
    }

    pub fn register_defaults(&mut self) {
        // Homebrew is the native manager on macOS and the supported one on Linux
        self.register("macos", || Box::new(BrewManager::new()));
        self.register("linux", || Box::new(BrewManager::new()));
    }

    /// First available backend for `os`
    pub fn select(&self, os: &str) -> Option<Box<dyn PackageManager>> {
        self.factories
            .iter()
            .filter(|(o, _)| *o == os)
            .map(|(_, factory)| factory())
            .find(|manager| manager.is_available())
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Backend for the current host, or `None` when nothing usable is installed
pub fn for_os() -> Option<Box<dyn PackageManager>> {
    BackendRegistry::with_defaults().select(platform::current_os())
}
