#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn documents_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn write_document(dir: &TempDir, name: &str, content: &str) {
    dir.child(name)
        .write_str(content)
        .unwrap_or_else(|e| panic!("Failed to write {name}: {e}"));
}

pub fn numbered_lines(range: std::ops::RangeInclusive<usize>) -> String {
    range.map(|n| format!("line {n}\n")).collect()
}

pub fn run_tridiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("tridiff").expect("Failed to find tridiff binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is not UTF-8")
}
