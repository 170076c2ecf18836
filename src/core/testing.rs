//! Test doubles shared by the unit tests of the core and the backends

use crate::core::types::{LineSink, Package, PackageStatus};
use crate::error::{Result, VoltigError};
use crate::packages::PackageManager;
use crate::traits::{Reporter, SystemProbe};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Info(String),
    Success(String),
    Warning(String),
    Error(String),
    Verbose(String),
    Progress(String, String),
    EndProgress,
}

/// Reporter that remembers everything it was told
#[derive(Debug, Default)]
pub struct RecordingReporter {
    entries: Mutex<Vec<Entry>>,
}

impl RecordingReporter {
    fn push(&self, entry: Entry) {
        self.entries.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(|e| match e {
                Entry::Error(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn progress_lines(&self) -> Vec<(String, String)> {
        self.entries()
            .into_iter()
            .filter_map(|e| match e {
                Entry::Progress(label, line) => Some((label, line)),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, msg: &str) {
        self.push(Entry::Info(msg.to_string()));
    }

    fn success(&self, msg: &str) {
        self.push(Entry::Success(msg.to_string()));
    }

    fn warning(&self, msg: &str) {
        self.push(Entry::Warning(msg.to_string()));
    }

    fn error(&self, msg: &str) {
        self.push(Entry::Error(msg.to_string()));
    }

    fn verbose(&self, msg: &str) {
        self.push(Entry::Verbose(msg.to_string()));
    }

    fn progress(&self, label: &str, line: &str) {
        self.push(Entry::Progress(label.to_string(), line.to_string()));
    }

    fn end_progress(&self) {
        self.push(Entry::EndProgress);
    }
}

/// Probe answering from canned tables instead of the host
#[derive(Debug, Default)]
pub struct ScriptedProbe {
    /// `"program arg1 arg2"` -> stdout of a successful run
    pub outputs: HashMap<String, String>,
    /// binary -> resolved path
    pub paths: HashMap<String, PathBuf>,
}

impl ScriptedProbe {
    pub fn with_output(mut self, command_line: &str, stdout: &str) -> Self {
        self.outputs
            .insert(command_line.to_string(), stdout.to_string());
        self
    }

    pub fn with_path(mut self, binary: &str, path: &str) -> Self {
        self.paths.insert(binary.to_string(), PathBuf::from(path));
        self
    }
}

impl SystemProbe for ScriptedProbe {
    fn capture(&self, program: &str, args: &[&str]) -> Option<String> {
        let mut key = program.to_string();
        for arg in args {
            key.push(' ');
            key.push_str(arg);
        }
        self.outputs.get(&key).cloned()
    }

    fn lookup(&self, binary: &str) -> Option<PathBuf> {
        self.paths.get(binary).cloned()
    }
}

/// Backend whose per-alias behavior is fixed up front
#[derive(Debug, Default)]
pub struct ScriptedManager {
    /// aliases whose operations fail
    pub failing: Vec<String>,
    /// alias -> installed version reported by `get_status`
    pub installed: HashMap<String, String>,
    /// lines emitted through the sink on install/remove
    pub chatter: Vec<String>,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedManager {
    pub fn failing_on(mut self, alias: &str) -> Self {
        self.failing.push(alias.to_string());
        self
    }

    pub fn with_installed(mut self, alias: &str, version: &str) -> Self {
        self.installed.insert(alias.to_string(), version.to_string());
        self
    }

    pub fn with_chatter(mut self, line: &str) -> Self {
        self.chatter.push(line.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn run(&self, action: &str, pkg: &Package, on_line: Option<&LineSink<'_>>) -> Result<()> {
        for alias in &pkg.names {
            self.calls.lock().unwrap().push(format!("{} {}", action, alias));
            if let Some(sink) = on_line {
                for line in &self.chatter {
                    sink(line);
                }
            }
            if self.failing.contains(alias) {
                return Err(VoltigError::PackageOperation {
                    alias: alias.clone(),
                    action: action.to_string(),
                    reason: "scripted failure".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl PackageManager for ScriptedManager {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn install(&self, pkg: &Package, on_line: Option<&LineSink<'_>>) -> Result<()> {
        self.run("install", pkg, on_line)
    }

    fn update(&self, pkg: &Package) -> Result<()> {
        self.run("update", pkg, None)
    }

    fn remove(&self, pkg: &Package, on_line: Option<&LineSink<'_>>) -> Result<()> {
        self.run("remove", pkg, on_line)
    }

    fn get_status(&self, pkg: &Package) -> Result<PackageStatus> {
        let alias = pkg
            .names
            .first()
            .ok_or_else(|| VoltigError::Other("package has no names".to_string()))?;
        if self.failing.contains(alias) {
            return Err(VoltigError::Other(format!("cannot query {}", alias)));
        }
        Ok(match self.installed.get(alias) {
            Some(version) => PackageStatus::installed(alias, version),
            None => PackageStatus::missing(alias),
        })
    }

    fn is_available(&self) -> bool {
        true
    }
}
