use crate::error::Result;
use crate::packages::probe::HostProbe;
use crate::packages::scan;
use crate::ui;
use crate::utils::platform;

/// List every package the host's native manager has installed
pub fn run(json: bool) -> Result<i32> {
    let os = platform::current_os();
    let source = scan::detect(os, &HostProbe)?;
    ui::verbose(&format!("Scanning installed packages with {}", source.binary()));

    let found = scan::scan_with(source, &HostProbe)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(0);
    }

    if found.is_empty() {
        ui::info("No installed packages found");
        return Ok(0);
    }
    super::status::print_table(&found);
    ui::info(&format!("{} package(s) found", found.len()));
    Ok(0)
}
