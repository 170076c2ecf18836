//! Status Command
//!
//! Reports the installation state of every manifest package as a table or,
//! with `--json`, as a JSON array of `{name, status, version}` records.

use crate::config;
use crate::core::types::{Package, PackageStatus, StatusKind};
use crate::error::Result;
use crate::packages::PackageManager;
use crate::traits::Reporter;
use crate::ui::{self, ConsoleReporter};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug)]
pub struct StatusOptions {
    pub config: PathBuf,
    pub json: bool,
}

pub fn run(options: StatusOptions) -> Result<i32> {
    let reporter = ConsoleReporter;
    let loaded = config::load_manifest(&options.config)?;
    let backend = super::select_backend(&reporter)?;

    let statuses = collect_statuses(backend.as_ref(), &loaded.manifest.packages(), &reporter);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
    } else {
        print_table(&statuses);
    }
    Ok(0)
}

/// Query every package; a failed query is reported and skipped
pub fn collect_statuses(
    backend: &dyn PackageManager,
    packages: &[Package],
    reporter: &dyn Reporter,
) -> Vec<PackageStatus> {
    packages
        .iter()
        .filter_map(|pkg| match backend.get_status(pkg) {
            Ok(status) => Some(status),
            Err(e) => {
                reporter.error(&format!(
                    "Failed to get status for {}: {}",
                    pkg.display_name(),
                    e
                ));
                None
            }
        })
        .collect()
}

pub(crate) fn print_table(statuses: &[PackageStatus]) {
    if statuses.is_empty() {
        ui::info("No packages in config");
        return;
    }

    ui::header("Package Status");
    for status in statuses {
        let label = format!("{:<22}", status.status.to_string());
        let label = match status.status {
            StatusKind::Installed => label.green(),
            StatusKind::Missing => label.red(),
            StatusKind::External | StatusKind::VersionManaged(_) => label.cyan(),
        };
        let version = if status.version.is_empty() {
            "-".dimmed()
        } else {
            status.version.normal()
        };
        println!("  {:<28} {} {}", status.name.bold(), label, version);
    }
}
