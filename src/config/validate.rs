//! Manifest validation
//!
//! Loading only checks that the YAML has the right shape. These checks cover
//! what the loader cannot: duplicate aliases, incomplete entries, names that
//! are unsafe to hand to a subprocess, and user commands that would shadow
//! a built-in subcommand.

use crate::config::types::Manifest;
use crate::utils::sanitize;
use std::collections::HashSet;

/// Subcommands a manifest `commands:` entry may never take over
pub const PROTECTED_COMMANDS: &[&str] = &[
    "install",
    "i",
    "update",
    "u",
    "remove",
    "rm",
    "status",
    "st",
    "scan",
    "config",
    "lint",
    "completions",
    "help",
    "version",
];

pub fn is_protected(name: &str) -> bool {
    PROTECTED_COMMANDS.contains(&name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestIssue {
    DuplicateName(String),
    MissingFields { index: usize },
    UnsafeName { name: String, reason: String },
    ProtectedCommand(String),
}

impl std::fmt::Display for ManifestIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName(name) => write!(f, "Duplicate package name: {}", name),
            Self::MissingFields { index } => write!(
                f,
                "Missing required fields in package #{} (name and manager are required)",
                index + 1
            ),
            Self::UnsafeName { name, reason } => {
                write!(f, "Unsafe package name '{}': {}", name, reason)
            }
            Self::ProtectedCommand(name) => write!(
                f,
                "Protected command cannot be overridden: {} (name is reserved by the CLI)",
                name
            ),
        }
    }
}

/// Collect every problem in the manifest, in manifest order
pub fn validate(manifest: &Manifest) -> Vec<ManifestIssue> {
    let mut issues = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for (index, entry) in manifest.packages.iter().enumerate() {
        if entry.name.is_empty() || entry.manager.trim().is_empty() {
            issues.push(ManifestIssue::MissingFields { index });
        }

        for name in &entry.name {
            if !seen.insert(name.as_str()) {
                issues.push(ManifestIssue::DuplicateName(name.clone()));
            }
            if let Err(e) = sanitize::validate_package_name(name) {
                issues.push(ManifestIssue::UnsafeName {
                    name: name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    for name in manifest.commands.keys() {
        if is_protected(name) {
            issues.push(ManifestIssue::ProtectedCommand(name.clone()));
        }
    }

    issues
}
