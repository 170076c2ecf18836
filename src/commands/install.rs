//! Install Command
//!
//! Installs manifest packages through the host backend, optionally
//! bootstrapping Homebrew first.

use crate::config;
use crate::core::orchestrator::Operation;
use crate::core::types::LineSink;
use crate::error::{Result, VoltigError};
use crate::packages::probe::HostProbe;
use crate::packages::relay;
use crate::traits::{Reporter, SystemProbe};
use crate::ui::ConsoleReporter;
use crate::utils::platform;
use std::path::PathBuf;

const HOMEBREW_INSTALLER_URL: &str =
    "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";

/// Options for the install command
#[derive(Debug)]
pub struct InstallOptions {
    pub config: PathBuf,
    /// Aliases to install; empty means the whole manifest
    pub packages: Vec<String>,
    /// Run the Homebrew installer when `brew` is missing
    pub bootstrap_brew: bool,
}

pub fn run(options: InstallOptions) -> Result<i32> {
    let reporter = ConsoleReporter;
    let loaded = config::load_manifest(&options.config)?;
    reporter.verbose(&format!("Loaded manifest from {}", loaded.path.display()));

    if options.bootstrap_brew {
        bootstrap_homebrew(platform::current_os(), &HostProbe, &reporter)?;
    }

    let backend = super::select_backend(&reporter)?;
    Ok(super::execute_batch(
        Operation::INSTALL,
        &options.packages,
        &loaded.manifest.packages(),
        &reporter,
        |pkg, sink| backend.install(pkg, sink),
    ))
}

/// Install Homebrew with the official script when it is not on PATH.
///
/// Only macOS and Linux are supported; elsewhere this warns and does nothing.
pub fn bootstrap_homebrew(os: &str, probe: &dyn SystemProbe, reporter: &dyn Reporter) -> Result<()> {
    if !matches!(os, "macos" | "linux") {
        reporter.warning(&format!("Homebrew bootstrap is not supported on {}", os));
        return Ok(());
    }
    if let Some(path) = probe.lookup("brew") {
        reporter.verbose(&format!("Homebrew already present at {}", path.display()));
        return Ok(());
    }

    reporter.info("Homebrew not found, running the official installer");
    let script = format!("/bin/bash -c \"$(curl -fsSL {})\"", HOMEBREW_INSTALLER_URL);
    let mut cmd = platform::build_shell_command(&script, None);
    cmd.env("NONINTERACTIVE", "1");

    let sink: &LineSink<'_> = &|line: &str| reporter.progress("homebrew", line);
    let status = relay::run_streamed(&mut cmd, Some(sink));
    reporter.end_progress();

    let status = status?;
    if !status.success() {
        return Err(VoltigError::SystemCommandFailed {
            command: "homebrew installer".to_string(),
            reason: format!("installer exited with {}", status),
        });
    }

    reporter.success("Homebrew installed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{Entry, RecordingReporter, ScriptedProbe};

    #[test]
    fn test_bootstrap_skipped_on_unsupported_os() {
        let reporter = RecordingReporter::default();
        bootstrap_homebrew("windows", &ScriptedProbe::default(), &reporter).unwrap();
        assert_eq!(
            reporter.entries(),
            vec![Entry::Warning(
                "Homebrew bootstrap is not supported on windows".into()
            )]
        );
    }

    #[test]
    fn test_bootstrap_noop_when_brew_present() {
        let reporter = RecordingReporter::default();
        let probe = ScriptedProbe::default().with_path("brew", "/opt/homebrew/bin/brew");
        bootstrap_homebrew("macos", &probe, &reporter).unwrap();
        assert!(reporter.progress_lines().is_empty());
        assert!(
            !reporter
                .entries()
                .iter()
                .any(|e| matches!(e, Entry::Info(_)))
        );
    }
}
