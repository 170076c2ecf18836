//! Batch execution of one backend operation over resolved targets
//!
//! Packages are processed strictly one after another so at most one package
//! manager subprocess is alive at a time and the live progress line always
//! belongs to a single package. A failing package never stops the batch.

use crate::core::types::{LineSink, OperationResult, Package};
use crate::error::Result;
use crate::traits::Reporter;
use std::sync::atomic::{AtomicBool, Ordering};

/// Wording of an operation in logs and summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub verb: &'static str,
    pub action: &'static str,
    pub past: &'static str,
}

impl Operation {
    pub const INSTALL: Self = Self {
        verb: "Installing",
        action: "install",
        past: "installed",
    };
    pub const UPDATE: Self = Self {
        verb: "Updating",
        action: "update",
        past: "updated",
    };
    pub const REMOVE: Self = Self {
        verb: "Removing",
        action: "remove",
        past: "removed",
    };
}

/// Last non-empty trimmed line of a (possibly multi-line) chunk
fn last_non_empty(chunk: &str) -> Option<&str> {
    chunk
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .last()
}

/// Run `backend_op` for every target, in order, and collect per-alias outcomes.
///
/// Every alias of a package goes to `successes` or `failures` depending on
/// the single result of `backend_op` for that package.
pub fn run_operation<F>(
    op: Operation,
    targets: &[Package],
    reporter: &dyn Reporter,
    mut backend_op: F,
) -> OperationResult
where
    F: FnMut(&Package, Option<&LineSink<'_>>) -> Result<()>,
{
    let mut result = OperationResult::default();
    let total = targets.len();

    for (i, pkg) in targets.iter().enumerate() {
        let label = pkg.display_name();
        reporter.info(&format!("{} package {} ({}/{})", op.verb, label, i + 1, total));

        let rendered = AtomicBool::new(false);
        let sink: &LineSink<'_> = &|line: &str| {
            if let Some(last) = last_non_empty(line) {
                rendered.store(true, Ordering::Relaxed);
                reporter.progress(&label, last);
            }
        };

        let outcome = backend_op(pkg, Some(sink));

        if rendered.load(Ordering::Relaxed) {
            reporter.end_progress();
        }

        match outcome {
            Ok(()) => {
                reporter.success(&format!("Successfully {} package {}", op.past, label));
                result.successes.extend(pkg.names.iter().cloned());
            }
            Err(e) => {
                reporter.error(&format!("Failed to {} package {}: {}", op.action, label, e));
                result.failures.extend(pkg.names.iter().cloned());
            }
        }
    }

    result
}

/// Final verdict of a command run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    Failed,
    Completed,
    NothingToDo,
}

impl BatchOutcome {
    pub fn decide(result: &OperationResult, not_found: &[String]) -> Self {
        if !result.failures.is_empty() || !not_found.is_empty() {
            Self::Failed
        } else if !result.successes.is_empty() {
            Self::Completed
        } else {
            Self::NothingToDo
        }
    }

    pub fn exit_code(self) -> i32 {
        match self {
            Self::Failed => 1,
            Self::Completed | Self::NothingToDo => 0,
        }
    }
}

/// Print the end-of-batch summary and return the verdict
pub fn summarize(
    op: Operation,
    result: &OperationResult,
    not_found: &[String],
    reporter: &dyn Reporter,
) -> BatchOutcome {
    if !result.successes.is_empty() {
        reporter.info(&format!(
            "Successfully {} packages: {}",
            op.past,
            result.successes.join(", ")
        ));
    }
    if !result.failures.is_empty() {
        reporter.error(&format!(
            "Failed to {} packages: {}",
            op.action,
            result.failures.join(", ")
        ));
    }
    if !not_found.is_empty() {
        reporter.error(&format!(
            "Packages not found in config: {}",
            not_found.join(", ")
        ));
    }

    let outcome = BatchOutcome::decide(result, not_found);
    match outcome {
        BatchOutcome::Completed => reporter.success(&format!(
            "All requested packages {} successfully",
            op.past
        )),
        BatchOutcome::NothingToDo => reporter.info(&format!("No packages were {}", op.past)),
        BatchOutcome::Failed => {}
    }
    outcome
}
