#![cfg(any(target_os = "linux", target_os = "macos"))]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn voltig() -> Command {
    Command::new(env!("CARGO_BIN_EXE_voltig"))
}

const MANIFEST: &str = r#"
packages:
  - name: wget
    manager: brew
  - name: [ripgrep, rg]
    manager: brew
  - name: broken
    manager: brew
  - name: tool
    manager: brew
    version: "1.2"
  - name: voltig-absent-pkg
    manager: brew
"#;

struct TestEnv {
    _tmp: TempDir,
    manifest: PathBuf,
    mock_bin_dir: PathBuf,
    log: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let tmp = tempfile::tempdir().expect("tempdir");
        let root = tmp.path().to_path_buf();

        let mock_bin_dir = root.join("bin");
        fs::create_dir_all(&mock_bin_dir).expect("mkdir bin dir");

        let manifest = root.join("voltig.yml");
        fs::write(&manifest, MANIFEST).expect("write voltig.yml");

        let log = root.join("brew.log");
        fs::write(&log, "").expect("create log");

        // `broken` fails every operation; `wget` is the only installed formula
        let mock_bin = mock_bin_dir.join("brew");
        let script = r#"#!/bin/sh
echo "$*" >> "$MOCK_BREW_LOG"
for arg in "$@"; do
  case "$arg" in
    broken*) echo "Error: No available formula with the name \"broken\"" >&2; exit 1 ;;
  esac
done
case "${1:-}" in
  --version) echo "Homebrew 4.2.0" ;;
  list)
    if [ "${3:-}" = "wget" ]; then echo "wget 1.21.4"; else exit 1; fi
    ;;
  install)
    echo "==> Downloading $2"
    echo "==> Pouring $2" >&2
    ;;
  uninstall)
    echo "Uninstalling /usr/local/Cellar/$2"
    echo "[x] pre-tagged"
    ;;
  upgrade) ;;
  *) exit 1 ;;
esac
"#;
        fs::write(&mock_bin, script).expect("write mock binary");

        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&mock_bin).expect("metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&mock_bin, perms).expect("chmod");

        Self {
            _tmp: tmp,
            manifest,
            mock_bin_dir,
            log,
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = voltig();
        let old_path = std::env::var("PATH").unwrap_or_default();
        let new_path = format!("{}:{}", self.mock_bin_dir.display(), old_path);
        cmd.env("PATH", new_path)
            .env("MOCK_BREW_LOG", &self.log)
            .env("NO_COLOR", "1")
            .env_remove("VOLTIG_VERBOSE")
            .arg("-c")
            .arg(&self.manifest);
        cmd
    }

    fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .expect("read log")
            .lines()
            .filter(|l| !l.starts_with("--version") && !l.starts_with("list"))
            .map(str::to_string)
            .collect()
    }
}

#[test]
fn e2e_install_selected_packages() {
    let env = TestEnv::new();

    env.cmd()
        .args(["install", "wget", "rg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing package wget (1/2)"))
        .stdout(predicate::str::contains("Successfully installed packages: wget, ripgrep, rg"))
        .stdout(predicate::str::contains("All requested packages installed successfully"));

    assert_eq!(
        env.calls(),
        vec!["install wget", "install ripgrep", "install rg"]
    );
}

#[test]
fn e2e_install_failure_continues_and_exits_nonzero() {
    let env = TestEnv::new();

    env.cmd()
        .args(["i", "broken", "wget"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to install package broken"))
        .stderr(predicate::str::contains("Failed to install packages: broken"))
        .stdout(predicate::str::contains("Successfully installed packages: wget"));

    assert_eq!(env.calls(), vec!["install broken", "install wget"]);
}

#[test]
fn e2e_install_unknown_package_runs_nothing() {
    let env = TestEnv::new();

    env.cmd()
        .args(["install", "ghost"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Package not found in config: ghost"))
        .stderr(predicate::str::contains("Packages not found in config: ghost"));

    assert!(env.calls().is_empty());
}

#[test]
fn e2e_install_pinned_version_uses_cask() {
    let env = TestEnv::new();

    env.cmd().args(["install", "tool"]).assert().success();
    assert_eq!(env.calls(), vec!["install --cask tool@1.2"]);
}

#[test]
fn e2e_remove_all_aliases() {
    let env = TestEnv::new();

    env.cmd()
        .args(["rm", "ripgrep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All requested packages removed successfully"))
        .stdout(predicate::str::contains("[ripgrep] Uninstalling /usr/local/Cellar/ripgrep"))
        .stdout(predicate::str::contains("[rg] Uninstalling /usr/local/Cellar/rg"))
        .stdout(predicate::str::contains("[x] pre-tagged"))
        .stdout(predicate::str::contains("[ripgrep] [x]").not())
        .stdout(predicate::str::contains("[rg] [x]").not());

    assert_eq!(env.calls(), vec!["uninstall ripgrep", "uninstall rg"]);
}

#[test]
fn e2e_remove_requires_a_package() {
    let env = TestEnv::new();
    env.cmd().arg("remove").assert().failure();
    assert!(env.calls().is_empty());
}

#[test]
fn e2e_update_selected_package() {
    let env = TestEnv::new();

    env.cmd()
        .args(["update", "wget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All requested packages updated successfully"));

    assert_eq!(env.calls(), vec!["upgrade wget"]);
}

#[test]
fn e2e_status_json() {
    let env = TestEnv::new();

    let output = env
        .cmd()
        .args(["status", "--json"])
        .output()
        .expect("run status");
    assert!(output.status.success());

    let statuses: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("status prints JSON");
    let statuses = statuses.as_array().expect("array");
    assert_eq!(statuses.len(), 5);
    assert_eq!(
        statuses[0],
        serde_json::json!({"name": "wget", "status": "installed", "version": "1.21.4"})
    );
    assert_eq!(
        statuses[4],
        serde_json::json!({"name": "voltig-absent-pkg", "status": "missing", "version": ""})
    );
}

#[test]
fn e2e_no_backend_fails_before_work() {
    let env = TestEnv::new();
    let empty_bin = env.mock_bin_dir.with_file_name("empty");
    fs::create_dir_all(&empty_bin).expect("mkdir empty");

    env.cmd()
        .env("PATH", &empty_bin)
        .args(["install", "wget"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "No supported package manager found for this OS",
        ));
}

#[test]
fn e2e_verbose_from_environment() {
    let env = TestEnv::new();

    env.cmd()
        .env("VOLTIG_VERBOSE", "1")
        .args(["install", "wget"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Using brew backend"));
}

#[test]
fn e2e_quiet_suppresses_info() {
    let env = TestEnv::new();

    env.cmd()
        .args(["-q", "install", "wget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing package").not());
}

#[test]
fn e2e_verbose_environment_false_values_stay_quiet() {
    for value in ["0", "false", "no", ""] {
        let env = TestEnv::new();

        env.cmd()
            .env("VOLTIG_VERBOSE", value)
            .args(["install", "wget"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Using brew backend").not());
    }
}
