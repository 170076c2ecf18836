use crate::config;
use crate::error::Result;
use crate::ui;
use std::path::Path;

/// Print the manifest as it was understood by the loader
pub fn run(config_path: &Path) -> Result<i32> {
    let loaded = config::load_manifest(config_path)?;
    ui::keyval("Config", &loaded.path.display().to_string());
    ui::keyval("Packages", &loaded.manifest.packages.len().to_string());
    ui::keyval("Commands", &loaded.manifest.commands.len().to_string());
    println!();
    print!("{}", serde_yml::to_string(&loaded.manifest)?);
    Ok(0)
}
