use crate::traits::SystemProbe;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Probe backed by the real host: spawns processes and searches `PATH`
#[derive(Debug, Default, Clone, Copy)]
pub struct HostProbe;

impl SystemProbe for HostProbe {
    fn capture(&self, program: &str, args: &[&str]) -> Option<String> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn lookup(&self, binary: &str) -> Option<PathBuf> {
        which::which(binary).ok()
    }
}
