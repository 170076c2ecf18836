//! Lint Command
//!
//! Loads the manifest and runs the checks in `config::validate`.
//! Exit code is 1 when any issue is found.

use crate::config::{self, validate};
use crate::error::Result;
use crate::ui;
use std::path::Path;

pub fn run(config_path: &Path) -> Result<i32> {
    let loaded = config::load_manifest(config_path)?;
    ui::verbose(&format!("Linting {}", loaded.path.display()));

    let issues = validate::validate(&loaded.manifest);
    if issues.is_empty() {
        ui::success("Config validation successful");
        return Ok(0);
    }

    for issue in &issues {
        ui::error(&issue.to_string());
    }
    ui::warning(&format!(
        "{} issue(s) found in {}",
        issues.len(),
        loaded.path.display()
    ));
    Ok(1)
}
