//! System package scan
//!
//! Lists everything the host's native package manager reports as installed,
//! independent of the manifest. Each listing format gets a small text parser
//! producing `PackageStatus { status: installed }` records.

use crate::core::types::PackageStatus;
use crate::error::{Result, VoltigError};
use crate::traits::SystemProbe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanSource {
    Brew,
    Dpkg,
    Pacman,
    Choco,
    Winget,
}

impl ScanSource {
    /// Sources to try for an OS, in preference order
    pub fn candidates(os: &str) -> &'static [ScanSource] {
        match os {
            "macos" => &[ScanSource::Brew],
            "linux" => &[ScanSource::Dpkg, ScanSource::Pacman],
            "windows" => &[ScanSource::Choco, ScanSource::Winget],
            _ => &[],
        }
    }

    pub fn binary(self) -> &'static str {
        match self {
            Self::Brew => "brew",
            Self::Dpkg => "dpkg-query",
            Self::Pacman => "pacman",
            Self::Choco => "choco",
            Self::Winget => "winget",
        }
    }

    pub fn args(self) -> &'static [&'static str] {
        match self {
            Self::Brew => &["list", "--versions"],
            Self::Dpkg => &["-W", "-f=${binary:Package}\t${Version}\n"],
            Self::Pacman => &["-Q"],
            Self::Choco => &["list", "--local-only"],
            Self::Winget => &["list"],
        }
    }

    pub fn parse(self, output: &str) -> Vec<PackageStatus> {
        match self {
            Self::Brew | Self::Pacman => parse_whitespace(output),
            Self::Dpkg => parse_tsv(output),
            Self::Choco => parse_choco(output),
            Self::Winget => parse_winget(output),
        }
    }
}

/// Pick the first listing tool present on the host
pub fn detect(os: &str, probe: &dyn SystemProbe) -> Result<ScanSource> {
    let candidates = ScanSource::candidates(os);
    if candidates.is_empty() {
        return Err(VoltigError::Other(format!("unsupported OS: {}", os)));
    }
    candidates
        .iter()
        .copied()
        .find(|source| probe.lookup(source.binary()).is_some())
        .ok_or(VoltigError::NoBackend)
}

pub fn scan_system(os: &str, probe: &dyn SystemProbe) -> Result<Vec<PackageStatus>> {
    scan_with(detect(os, probe)?, probe)
}

/// Run the listing command of an already detected `source` and parse it
pub fn scan_with(source: ScanSource, probe: &dyn SystemProbe) -> Result<Vec<PackageStatus>> {
    let output = probe.capture(source.binary(), source.args()).ok_or_else(|| {
        VoltigError::SystemCommandFailed {
            command: format!("{} {}", source.binary(), source.args().join(" ")),
            reason: "command exited unsuccessfully".to_string(),
        }
    })?;
    Ok(source.parse(&output))
}

/// Parse space-separated output (`brew list --versions`, `pacman -Q`)
///
/// Format: "package-name version"
fn parse_whitespace(output: &str) -> Vec<PackageStatus> {
    output
        .lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(name), Some(version)) => Some(PackageStatus::installed(name, version)),
                _ => None,
            }
        })
        .collect()
}

/// Parse tab-separated output (`dpkg-query -W -f=...`)
fn parse_tsv(output: &str) -> Vec<PackageStatus> {
    output
        .lines()
        .filter_map(|line| {
            let mut parts = line.split('\t');
            match (parts.next(), parts.next()) {
                (Some(name), Some(version)) if !name.trim().is_empty() => {
                    Some(PackageStatus::installed(name.trim(), version.trim()))
                }
                _ => None,
            }
        })
        .collect()
}

fn parse_choco(output: &str) -> Vec<PackageStatus> {
    output
        .lines()
        .filter(|line| !line.starts_with("Chocolatey") && !line.contains("packages installed"))
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(name), Some(version)) => Some(PackageStatus::installed(name, version)),
                _ => None,
            }
        })
        .collect()
}

/// `winget list` prints a `Name Id Version ...` table; version is the third column
fn parse_winget(output: &str) -> Vec<PackageStatus> {
    output
        .lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() >= 3 && parts[0] != "Name" {
                Some(PackageStatus::installed(parts[0], parts[2]))
            } else {
                None
            }
        })
        .collect()
}
