//! User-defined commands
//!
//! Any subcommand clap does not know is looked up in the manifest's
//! `commands:` map and run through the platform shell with inherited stdio.
//! Extra CLI arguments are shell-quoted and appended to the command line.

use crate::config::types::CustomCommand;
use crate::config::{self, validate};
use crate::error::{Result, VoltigError};
use crate::ui;
use crate::utils::platform;
use std::path::{Path, PathBuf};
use std::process::Stdio;

#[derive(Debug)]
pub struct CustomOptions {
    pub config: PathBuf,
    /// Command name followed by its arguments
    pub argv: Vec<String>,
}

pub fn run(options: CustomOptions) -> Result<i32> {
    let (name, extra) = options
        .argv
        .split_first()
        .ok_or_else(|| VoltigError::Other("missing command name".to_string()))?;

    if validate::is_protected(name) {
        return Err(VoltigError::Other(format!(
            "User command not allowed: {} (name is protected by core CLI)",
            name
        )));
    }

    let loaded = config::load_manifest(&options.config)?;
    let Some(def) = loaded.manifest.commands.get(name) else {
        return Err(VoltigError::Other(format!(
            "unrecognized subcommand '{}' (not a built-in and not defined under `commands:` in {})",
            name,
            loaded.path.display()
        )));
    };

    let line = command_line(name, def, extra)?;
    if !def.summary.is_empty() {
        ui::info(&def.summary);
    }
    ui::verbose(&format!("Running: {}", line));

    let mut cmd = platform::build_shell_command(&line, def.shell.as_deref());
    if let Some(dir) = work_dir(def, &loaded.path) {
        cmd.current_dir(dir);
    }
    for (key, value) in parse_environment(name, &def.environment)? {
        cmd.env(key, value);
    }
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let status = cmd.status().map_err(|e| VoltigError::SystemCommandFailed {
        command: line.clone(),
        reason: e.to_string(),
    })?;

    if status.success() {
        Ok(0)
    } else {
        ui::error(&format!("Command failed: {} ({})", name, status));
        Ok(1)
    }
}

/// Full shell line: `command` (or `script`), then default `args`, then CLI extras
pub fn command_line(name: &str, def: &CustomCommand, extra: &[String]) -> Result<String> {
    let base = def
        .command
        .as_deref()
        .or(def.script.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            VoltigError::ConfigError(format!(
                "command '{}' needs a `command` or `script`",
                name
            ))
        })?;

    let args: Vec<&str> = def
        .args
        .iter()
        .chain(extra)
        .map(String::as_str)
        .collect();
    if args.is_empty() {
        return Ok(base.to_string());
    }

    let quoted = shlex::try_join(args)
        .map_err(|e| VoltigError::Other(format!("cannot quote arguments for '{}': {}", name, e)))?;
    Ok(format!("{} {}", base, quoted))
}

/// `workDir`, relative paths taken from the manifest's directory
fn work_dir(def: &CustomCommand, manifest_path: &Path) -> Option<PathBuf> {
    let dir = def.work_dir.as_deref().filter(|d| !d.trim().is_empty())?;
    let dir = Path::new(dir);
    if dir.is_absolute() {
        return Some(dir.to_path_buf());
    }
    let base = manifest_path.parent().unwrap_or(Path::new("."));
    Some(base.join(dir))
}

pub fn parse_environment<'a>(name: &str, entries: &'a [String]) -> Result<Vec<(&'a str, &'a str)>> {
    entries
        .iter()
        .map(|entry| match entry.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
            _ => Err(VoltigError::ConfigError(format!(
                "command '{}': environment entry '{}' must be KEY=VALUE",
                name, entry
            ))),
        })
        .collect()
}
