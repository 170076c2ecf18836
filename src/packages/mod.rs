//! # Package Manager Backends
//!
//! - `traits` - the `PackageManager` contract every backend implements
//! - `relay` - concurrent stdout/stderr draining for backend subprocesses
//! - `probe` - host-backed `SystemProbe` used for status checks
//! - `brew` - Homebrew backend (install, upgrade, uninstall, status)
//! - `registry` - per-OS backend selection
//! - `scan` - read-only listing of everything the host manager has installed

pub mod brew;
pub mod probe;
pub mod registry;
pub mod relay;
pub mod scan;
pub mod traits;

pub use registry::for_os;
pub use traits::PackageManager;
