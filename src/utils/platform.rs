use std::process::Command;

/// Host OS identifier (`macos`, `linux`, `windows`, ...)
pub fn current_os() -> &'static str {
    std::env::consts::OS
}

/// Build a shell command in a platform-aware way.
///
/// - explicit `shell`: `<shell> -c <command>`
/// - Unix: `sh -c <command>`
/// - Windows: `cmd /C <command>`
pub fn build_shell_command(command: &str, shell: Option<&str>) -> Command {
    if let Some(shell) = shell.map(str::trim).filter(|s| !s.is_empty()) {
        let mut cmd = Command::new(shell);
        cmd.arg("-c").arg(command);
        return cmd;
    }

    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }

    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}
