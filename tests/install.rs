#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn culebra_tools() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_culebra-tools"));
    cmd.env("RUST_LOG", "off").env("NO_COLOR", "1");
    cmd
}

fn run_with_toolchain(toolchain: &str) -> Output {
    culebra_tools()
        .args(["--toolchain", toolchain, "--project-dir"])
        .arg(std::env::temp_dir())
        .output()
        .expect("Failed to run culebra-tools")
}

/// Directory holding a `dotnet` stand-in that echoes its arguments and exits
/// with `status`.
fn fake_dotnet_dir(name: &str, status: i32) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("culebra-tools-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let script = dir.join("dotnet");
    fs::write(&script, format!("#!/bin/sh\necho \"dotnet $*\"\nexit {status}\n")).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    dir
}

fn path_with(dir: &Path) -> String {
    format!("{}:{}", dir.display(), std::env::var("PATH").unwrap_or_default())
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn all_steps_succeed() {
    let output = run_with_toolchain("true");

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout(&output);
    assert!(!stdout.contains("Had error"));
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn build_failure_aborts_before_install() {
    let output = run_with_toolchain("false");

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout(&output);
    assert!(stdout.contains("Had error at command false tool uninstall -g CulebraLang"));
    assert!(stdout.contains("Had error at command false build"));
    assert!(!stdout.contains("false tool install"));
}

#[test]
fn exit_code_is_the_failed_step_status() {
    let output = run_with_toolchain("sh -c 'exit 3' toolchain");

    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).contains("Had error at command sh -c 'exit 3' toolchain build"));
}

#[test]
fn repeated_runs_exit_identically() {
    let first = run_with_toolchain("false");
    let second = run_with_toolchain("false");

    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(stdout(&first), stdout(&second));
}

#[test]
fn no_arguments_runs_dotnet_steps_despite_invalid_log_filter() {
    let dir = fake_dotnet_dir("bad-filter", 0);

    let output = culebra_tools()
        .env("RUST_LOG", "[[bad")
        .env("PATH", path_with(&dir))
        .current_dir(&dir)
        .output()
        .expect("Failed to run culebra-tools");

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout(&output);
    assert!(stdout.contains("dotnet tool uninstall -g CulebraLang"));
    assert!(stdout.contains("dotnet build"));
    assert!(stdout.contains("dotnet tool install --global --add-source ./nupkg CulebraLang"));
    assert!(!stdout.contains("Had error"));
}

#[test]
fn environment_does_not_change_commands() {
    let dir = fake_dotnet_dir("ignored-env", 0);

    let output = culebra_tools()
        .env("PATH", path_with(&dir))
        .env("CULEBRA_TOOLCHAIN", "false")
        .env("CULEBRA_TOOL_NAME", "Other")
        .env("CULEBRA_PACKAGE_SOURCE", "elsewhere")
        .env("CULEBRA_LOG_FORMAT", "xml")
        .current_dir(&dir)
        .output()
        .expect("Failed to run culebra-tools");

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout(&output);
    assert!(stdout.contains("dotnet tool install --global --add-source ./nupkg CulebraLang"));
    assert!(!stdout.contains("Other"));
}

#[test]
fn no_arguments_propagates_dotnet_build_status() {
    let dir = fake_dotnet_dir("build-fails", 5);

    let output = culebra_tools()
        .env("PATH", path_with(&dir))
        .current_dir(&dir)
        .output()
        .expect("Failed to run culebra-tools");

    assert_eq!(output.status.code(), Some(5));
    let stdout = stdout(&output);
    assert!(stdout.contains("Had error at command dotnet build"));
    assert!(!stdout.contains("dotnet tool install"));
}

#[test]
fn log_format_accepted_before_subcommand() {
    let output = culebra_tools()
        .args(["--log-format", "json", "install", "--toolchain", "true"])
        .output()
        .expect("Failed to run culebra-tools");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).lines().count(), 3);
}
