//! # Subcommands
//!
//! One module per subcommand. Package commands (`install`, `update`,
//! `remove`) share the same pipeline: load the manifest, select the backend,
//! resolve targets, run the orchestrator, print the summary.

pub mod completions;
pub mod config;
pub mod custom;
pub mod install;
pub mod lint;
pub mod remove;
pub mod scan;
pub mod status;
pub mod update;

use crate::core::orchestrator::{self, Operation};
use crate::core::resolver;
use crate::core::types::{LineSink, Package};
use crate::error::{Result, VoltigError};
use crate::packages::{self, PackageManager};
use crate::traits::Reporter;

/// The single backend for this invocation, or `NoBackend` before any work starts
pub(crate) fn select_backend(reporter: &dyn Reporter) -> Result<Box<dyn PackageManager>> {
    let backend = packages::for_os().ok_or(VoltigError::NoBackend)?;
    reporter.verbose(&format!("Using {} backend", backend.name()));
    Ok(backend)
}

/// Resolve `requested` against `manifest`, run `backend_op` for each target
/// and return the process exit code
pub(crate) fn execute_batch<F>(
    op: Operation,
    requested: &[String],
    manifest: &[Package],
    reporter: &dyn Reporter,
    backend_op: F,
) -> i32
where
    F: FnMut(&Package, Option<&LineSink<'_>>) -> Result<()>,
{
    if requested.is_empty() {
        reporter.info(&format!(
            "{} all packages from config ({})",
            op.verb,
            manifest.len()
        ));
    } else {
        reporter.info(&format!(
            "{} specified packages: {}",
            op.verb,
            requested.join(", ")
        ));
    }

    let resolution = resolver::resolve_targets(requested, manifest, reporter);
    let result = orchestrator::run_operation(op, &resolution.targets, reporter, backend_op);
    orchestrator::summarize(op, &result, &resolution.not_found, reporter).exit_code()
}
