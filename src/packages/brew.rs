//! Homebrew package manager
//!
//! Installs, upgrades and removes packages with `brew`, one alias at a time.
//! Status falls back to a `PATH` lookup so tools installed outside Homebrew
//! (nvm, pyenv, vendor installers) are still reported as present.

use crate::core::types::{LineSink, Package, PackageStatus, StatusKind};
use crate::error::{Result, VoltigError};
use crate::packages::probe::HostProbe;
use crate::packages::relay;
use crate::packages::traits::PackageManager;
use crate::traits::SystemProbe;
use crate::ui;
use crate::utils::sanitize;
use regex::Regex;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::LazyLock;

const BREW: &str = "brew";

/// Lines the tool already tagged, e.g. `[wget] Uninstalling...`
static BRACKET_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[[^\]]+\] ").expect("Invalid regex pattern"));

/// Version-like token in `--version` output: 1.2, 1.2.3, v18.16.0
static VERSION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v?\d+\.\d+(\.\d+)?").expect("Invalid regex pattern"));

pub struct BrewManager {
    probe: Box<dyn SystemProbe>,
}

impl BrewManager {
    pub fn new() -> Self {
        Self::with_probe(Box::new(HostProbe))
    }

    pub fn with_probe(probe: Box<dyn SystemProbe>) -> Self {
        Self { probe }
    }

    fn check_exit(alias: &str, action: &str, status: ExitStatus) -> Result<()> {
        if status.success() {
            Ok(())
        } else {
            Err(VoltigError::PackageOperation {
                alias: alias.to_string(),
                action: action.to_string(),
                reason: status.to_string(),
            })
        }
    }

    fn wrap(alias: &str, action: &str) -> impl Fn(VoltigError) -> VoltigError {
        let alias = alias.to_string();
        let action = action.to_string();
        move |e| VoltigError::PackageOperation {
            alias: alias.clone(),
            action: action.clone(),
            reason: e.to_string(),
        }
    }

    fn version_manager(&self, name: &str, path: &Path) -> Option<String> {
        match name {
            "node" | "nodejs" if self.probe.lookup("nvm").is_some() || is_nvm_node(path) => {
                Some("nvm".to_string())
            }
            "python" | "python3"
                if self.probe.lookup("pyenv").is_some() || is_pyenv_python(path) =>
            {
                Some("pyenv".to_string())
            }
            _ => None,
        }
    }

    /// First version-like token of `<binary> --version`, the whole output
    /// when there is none, `unknown` when the probe fails
    fn binary_version(&self, binary: &str) -> String {
        match self.probe.capture(binary, &["--version"]) {
            Some(out) => VERSION_TOKEN
                .find(&out)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| out.trim().to_string()),
            None => "unknown".to_string(),
        }
    }
}

impl Default for BrewManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Arguments for `brew install`; a pinned version installs the versioned cask
pub fn install_args(alias: &str, pkg: &Package) -> Vec<String> {
    match pkg.pinned_version() {
        Some(version) => vec![
            "install".to_string(),
            "--cask".to_string(),
            format!("{}@{}", alias, version),
        ],
        None => vec!["install".to_string(), alias.to_string()],
    }
}

/// Tag a line with its alias unless it already carries a bracket prefix
pub fn tag_line(alias: &str, line: &str) -> String {
    if BRACKET_PREFIX.is_match(line) {
        line.to_string()
    } else {
        format!("[{}] {}", alias, line)
    }
}

/// Version column of `brew list --versions <name>` (`wget 1.21.4`)
fn listed_version(output: &str) -> String {
    let trimmed = output.trim();
    trimmed
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
        .unwrap_or_else(|| trimmed.to_string())
}

pub fn is_nvm_node(path: &Path) -> bool {
    path.to_string_lossy().contains(".nvm/versions/")
}

pub fn is_pyenv_python(path: &Path) -> bool {
    path.to_string_lossy().contains(".pyenv/versions/")
}

impl PackageManager for BrewManager {
    fn name(&self) -> &'static str {
        BREW
    }

    fn install(&self, pkg: &Package, on_line: Option<&LineSink<'_>>) -> Result<()> {
        for alias in &pkg.names {
            sanitize::validate_package_name(alias).map_err(Self::wrap(alias, "install"))?;
            ui::verbose(&format!("brew {}", install_args(alias, pkg).join(" ")));

            let mut cmd = Command::new(BREW);
            cmd.args(install_args(alias, pkg));

            let status =
                relay::run_streamed(&mut cmd, on_line).map_err(Self::wrap(alias, "install"))?;
            Self::check_exit(alias, "install", status)?;
        }
        Ok(())
    }

    fn update(&self, pkg: &Package) -> Result<()> {
        for alias in &pkg.names {
            sanitize::validate_package_name(alias).map_err(Self::wrap(alias, "update"))?;
            ui::verbose(&format!("brew upgrade {}", alias));

            let status = Command::new(BREW)
                .args(["upgrade", alias.as_str()])
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map_err(|e| VoltigError::PackageOperation {
                    alias: alias.clone(),
                    action: "update".to_string(),
                    reason: e.to_string(),
                })?;
            Self::check_exit(alias, "update", status)?;
        }
        Ok(())
    }

    fn remove(&self, pkg: &Package, on_line: Option<&LineSink<'_>>) -> Result<()> {
        for alias in &pkg.names {
            sanitize::validate_package_name(alias).map_err(Self::wrap(alias, "remove"))?;
            ui::verbose(&format!("brew uninstall {}", alias));

            let tagged: &LineSink<'_> = &|line: &str| {
                let line = tag_line(alias, line);
                match on_line {
                    Some(sink) => sink(&line),
                    None => ui::info(&line),
                }
            };

            let mut cmd = Command::new(BREW);
            cmd.args(["uninstall", alias.as_str()])
                .env("HOMEBREW_NO_AUTO_UPDATE", "1");

            let status = relay::run_streamed(&mut cmd, Some(tagged))
                .map_err(Self::wrap(alias, "remove"))?;
            Self::check_exit(alias, "remove", status)?;
        }
        Ok(())
    }

    fn get_status(&self, pkg: &Package) -> Result<PackageStatus> {
        let name = pkg
            .names
            .first()
            .ok_or_else(|| VoltigError::Other("package has no name".to_string()))?;

        if let Some(out) = self.probe.capture(BREW, &["list", "--versions", name])
            && !out.trim().is_empty()
        {
            return Ok(PackageStatus::installed(name, &listed_version(&out)));
        }

        // Not managed by brew, maybe installed some other way
        if let Some(path) = self.probe.lookup(name) {
            let status = match self.version_manager(name, &path) {
                Some(manager) => StatusKind::VersionManaged(manager),
                None => StatusKind::External,
            };
            return Ok(PackageStatus {
                name: name.clone(),
                status,
                version: self.binary_version(name),
            });
        }

        Ok(PackageStatus::missing(name))
    }

    fn is_available(&self) -> bool {
        self.probe.lookup(BREW).is_some() && self.probe.capture(BREW, &["--version"]).is_some()
    }
}
