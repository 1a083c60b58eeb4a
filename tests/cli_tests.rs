//! Tests that drive the ats-scorer binary

use std::path::Path;
use std::process::{Command, Output};

fn ats_scorer(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ats-scorer"))
        .args(args)
        .output()
        .expect("binary should run")
}

#[test]
fn test_config_reset_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new_config.toml");
    let path_arg = path.to_str().unwrap();

    let output = ats_scorer(&["-c", path_arg, "config", "reset"]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(path.exists());
}

#[test]
fn test_config_reset_repairs_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[output]\nsample_size = 0\n").unwrap();
    let path_arg = path.to_str().unwrap();

    let show = ats_scorer(&["-c", path_arg, "config", "show"]);
    assert_eq!(show.status.code(), Some(1));

    let reset = ats_scorer(&["-c", path_arg, "config", "reset"]);
    assert!(reset.status.success());

    let show = ats_scorer(&["-c", path_arg, "config", "show"]);
    assert!(show.status.success());
    assert!(String::from_utf8_lossy(&show.stdout).contains("sample_size = 10"));
}

#[test]
fn test_config_path_ignores_missing_file() {
    let output = ats_scorer(&["-c", "does/not/exist.toml", "config", "path"]);

    assert!(output.status.success());
    let printed = String::from_utf8_lossy(&output.stdout);
    assert_eq!(Path::new(printed.trim()), Path::new("does/not/exist.toml"));
}

#[test]
fn test_unreadable_pdf_exits_with_message() {
    let output = ats_scorer(&[
        "score",
        "-r",
        "tests/fixtures/corrupt.pdf",
        "--job-text",
        "python developer",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Could not read PDF. Try another file."));
}
