use crate::config;
use crate::core::orchestrator::Operation;
use crate::error::Result;
use crate::traits::Reporter;
use crate::ui::ConsoleReporter;
use std::path::PathBuf;

#[derive(Debug)]
pub struct RemoveOptions {
    pub config: PathBuf,
    /// At least one alias; clap enforces it
    pub packages: Vec<String>,
}

pub fn run(options: RemoveOptions) -> Result<i32> {
    let reporter = ConsoleReporter;
    let loaded = config::load_manifest(&options.config)?;
    reporter.verbose(&format!("Loaded manifest from {}", loaded.path.display()));

    let backend = super::select_backend(&reporter)?;
    Ok(super::execute_batch(
        Operation::REMOVE,
        &options.packages,
        &loaded.manifest.packages(),
        &reporter,
        |pkg, sink| backend.remove(pkg, sink),
    ))
}
