use crate::config;
use crate::core::orchestrator::Operation;
use crate::error::Result;
use crate::traits::Reporter;
use crate::ui::ConsoleReporter;
use std::path::PathBuf;

#[derive(Debug)]
pub struct UpdateOptions {
    pub config: PathBuf,
    /// Aliases to upgrade; empty means the whole manifest
    pub packages: Vec<String>,
}

/// Upgrade manifest packages. Upgrades run quietly, so no live progress.
pub fn run(options: UpdateOptions) -> Result<i32> {
    let reporter = ConsoleReporter;
    let loaded = config::load_manifest(&options.config)?;
    reporter.verbose(&format!("Loaded manifest from {}", loaded.path.display()));

    let backend = super::select_backend(&reporter)?;
    Ok(super::execute_batch(
        Operation::UPDATE,
        &options.packages,
        &loaded.manifest.packages(),
        &reporter,
        |pkg, _| backend.update(pkg),
    ))
}
