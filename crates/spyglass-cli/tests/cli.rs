//! End-to-end runs of the `spyglass` binary over fixture modules.

use std::path::PathBuf;
use std::process::Command;

fn write_fixture(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("spyglass-cli-{name}-{}.wasm", std::process::id()));
    std::fs::write(&path, bytes).unwrap();
    path
}

fn run(path: &PathBuf) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_spyglass"))
        .arg(path)
        .output()
        .unwrap()
}

#[test]
fn dumps_add_module() {
    let path = write_fixture("add", &spyglass_testdata::add_module());
    let output = run(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("version: 1"));
    assert!(stdout.contains("id: 1 (type)"));
    assert!(stdout.contains("type constructor: func param count: 2"));
    assert!(stdout.contains("field: add kind: function"));
    assert!(stdout.contains("function #0 length: 7"));
    assert!(stdout.contains("get_local"));
}

#[test]
fn dumps_import_module() {
    let path = write_fixture("import", &spyglass_testdata::import_module());
    let output = run(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("module: env field: f kind: function"));
}

#[test]
fn rejects_invalid_input() {
    let path = write_fixture("bogus", b"not a wasm binary");
    let output = run(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not a valid wasm binary"));
}

#[test]
fn rejects_missing_file() {
    let path = PathBuf::from("/nonexistent/spyglass-test.wasm");
    let output = run(&path);
    assert!(!output.status.success());
}
