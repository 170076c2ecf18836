use crate::core::types::{LineSink, Package, PackageStatus};
use crate::error::Result;

/// Contract every native package manager backend satisfies
///
/// Mutating calls work alias by alias and are not atomic across the aliases
/// of one package: if the second alias fails, the first stays installed.
pub trait PackageManager: Send + Sync {
    /// Short tool name, e.g. `brew`
    fn name(&self) -> &'static str;

    /// Install every alias of `pkg`, streaming subprocess output to `on_line`.
    /// Stops at the first failing alias and returns its error.
    fn install(&self, pkg: &Package, on_line: Option<&LineSink<'_>>) -> Result<()>;

    /// Upgrade every alias of `pkg` without streaming output.
    /// Stops at the first failing alias and returns its error.
    fn update(&self, pkg: &Package) -> Result<()>;

    /// Uninstall every alias of `pkg`. Lines are tagged `[alias]` unless the
    /// tool already bracket-prefixed them.
    fn remove(&self, pkg: &Package, on_line: Option<&LineSink<'_>>) -> Result<()>;

    /// Inspect the first alias only. Absence is `missing`, not an error;
    /// only a package without any name is an error.
    fn get_status(&self, pkg: &Package) -> Result<PackageStatus>;

    /// True when the tool is present and answers a version probe
    fn is_available(&self) -> bool;
}
