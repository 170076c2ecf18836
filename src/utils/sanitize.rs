//! Input sanitization for names handed to package manager subprocesses

use crate::error::{Result, VoltigError};
use regex::Regex;
use std::sync::LazyLock;

/// Safe characters for package names across package managers
/// Allows: alphanumeric, dash, underscore, dot, plus, at sign, slash (taps, scopes)
static SAFE_PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9@._+/-]+$").expect("Invalid regex pattern"));

/// Characters that could be dangerous in shell contexts
static SHELL_DANGEROUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[;`$(){}|&<>\\'"\n\r\t]"#).expect("Invalid regex pattern"));

const MAX_NAME_LEN: usize = 256;

/// Validate a package name is safe to pass as a subprocess argument
///
/// Runs on every alias before it reaches a backend command line and on
/// every manifest name during `lint`.
pub fn validate_package_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(VoltigError::InvalidPackageName(
            "package name cannot be empty".to_string(),
        ));
    }

    if name.len() > MAX_NAME_LEN {
        let head: String = name.chars().take(50).collect();
        return Err(VoltigError::InvalidPackageName(format!(
            "too long (max {} chars): {}...",
            MAX_NAME_LEN, head
        )));
    }

    if SHELL_DANGEROUS.is_match(name) {
        return Err(VoltigError::InvalidPackageName(format!(
            "contains unsafe characters: {}",
            name
        )));
    }

    if !SAFE_PACKAGE_NAME.is_match(name) {
        return Err(VoltigError::InvalidPackageName(format!(
            "contains invalid characters: {}",
            name
        )));
    }

    if name.contains("..") {
        return Err(VoltigError::InvalidPackageName(format!(
            "cannot contain path traversal: {}",
            name
        )));
    }

    // A leading dash would be parsed as a flag by the package manager
    if name.starts_with('-') {
        return Err(VoltigError::InvalidPackageName(format!(
            "cannot start with '-': {}",
            name
        )));
    }

    Ok(())
}
