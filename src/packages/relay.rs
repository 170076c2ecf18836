//! Output relay for package manager subprocesses
//!
//! stdout and stderr are drained by two scoped reader threads while the
//! parent waits; both must hit end-of-stream before the child is reaped,
//! otherwise a chatty tool can fill a pipe buffer and block forever.
//! Lines from one stream keep their order, lines across streams do not.

use crate::core::types::LineSink;
use crate::error::{Result, VoltigError};
use crate::ui;
use std::io::{self, BufRead, BufReader, ErrorKind, Read};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

/// Split a raw chunk on embedded newlines and forward every non-empty trimmed line
pub fn forward_chunk(chunk: &str, on_line: &LineSink<'_>) {
    for line in chunk.split('\n') {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            on_line(trimmed);
        }
    }
}

/// Forward every line of `stream` until end-of-stream.
///
/// A read error stops line forwarding but the rest of the stream is still
/// discarded to EOF so the child never blocks on a full pipe. The error is
/// handed back to the caller.
fn drain<R: Read>(stream: R, on_line: &LineSink<'_>) -> Option<io::Error> {
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return None,
            Ok(_) => forward_chunk(&String::from_utf8_lossy(&buf), on_line),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                ui::verbose(&format!("Output relay read failed: {}", e));
                let _ = io::copy(&mut reader, &mut io::sink());
                return Some(e);
            }
        }
    }
}

/// Spawn `cmd`, relay its output line by line and wait for it to exit.
///
/// Without a sink, lines go to the regular info output.
pub fn run_streamed(cmd: &mut Command, on_line: Option<&LineSink<'_>>) -> Result<ExitStatus> {
    let cmd_debug = format!("{:?}", cmd);
    let fallback = |line: &str| ui::info(line);
    let on_line: &LineSink<'_> = on_line.unwrap_or(&fallback);

    cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

    let mut child = cmd
        .spawn()
        .map_err(|e| VoltigError::SystemCommandFailed {
            command: cmd_debug.clone(),
            reason: e.to_string(),
        })?;

    let (stdout, stderr) = match (child.stdout.take(), child.stderr.take()) {
        (Some(stdout), Some(stderr)) => (stdout, stderr),
        _ => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(VoltigError::RelayError {
                command: cmd_debug,
                reason: "Failed to capture stdout/stderr".to_string(),
            });
        }
    };

    let read_error = thread::scope(|s| {
        let out = s.spawn(move || drain(stdout, on_line));
        let err = s.spawn(move || drain(stderr, on_line));
        let out = out.join().ok().flatten();
        let err = err.join().ok().flatten();
        out.or(err)
    });

    let status = child.wait().map_err(|e| VoltigError::SystemCommandFailed {
        command: cmd_debug.clone(),
        reason: e.to_string(),
    })?;

    match read_error {
        Some(e) => Err(VoltigError::RelayError {
            command: cmd_debug,
            reason: format!("reading output failed: {}", e),
        }),
        None => Ok(status),
    }
}
