#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// `clocky` binary with HOME (and APPDATA) pointed at `home`, so the real
/// user configuration is never read or written.
pub fn clk(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("clocky");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Fresh, empty per-test directory inside the system temp dir.
pub fn setup_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("clocky_tests");
    path.push(name);
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Work log path inside `home` (not created).
pub fn worklog_in(home: &Path) -> String {
    home.join("worklog.csv").to_string_lossy().to_string()
}

/// Init the work log and add two shifts through the CLI.
pub fn init_with_data(home: &Path, worklog: &str) {
    clk(home)
        .args(["--file", worklog, "--test", "init"])
        .assert()
        .success();

    clk(home)
        .args(["--file", worklog, "add", "2025-09-01", "--in", "09:00", "--out", "17:00"])
        .assert()
        .success();

    clk(home)
        .args(["--file", worklog, "add", "2025-09-02", "--in", "08:15", "--out", "12:30"])
        .assert()
        .success();
}
