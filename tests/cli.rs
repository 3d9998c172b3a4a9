//! Runs the compiled binary against the fixtures.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_altacv-builder");

fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/cv");
    for entry in fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

#[test]
fn stdout_mode_prints_document_and_writes_nothing() {
    let tmp = setup_fixtures();
    let out = Command::new(BIN)
        .arg(tmp.path().join("config.yaml"))
        .arg("--stdout")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("%% If you need to pass whatever options to xcolor"));
    assert!(stdout.ends_with("\\end{document}\n"));
    assert!(!tmp.path().join("en").exists());
}

#[test]
fn default_config_path_writes_language_dir() {
    let tmp = setup_fixtures();
    let out = Command::new(BIN)
        .current_dir(tmp.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("First column\n001 work\n002 volunteer\n003 new-page\n004 certificates"));
    assert!(stdout.contains("Wrote ./en/main.tex ("));

    let tex = fs::read_to_string(tmp.path().join("en/main.tex")).unwrap();
    assert!(tex.contains(r"\name{Marina Duarte}"));
}

#[test]
fn unknown_section_warning_goes_to_stderr() {
    let tmp = setup_fixtures();
    let out = Command::new(BIN)
        .arg(tmp.path().join("config.pt.toml"))
        .arg("--stdout")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown section 'hobbies'"), "stderr: {stderr}");
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(!stdout.contains("hobbies"));
}

#[test]
fn missing_config_exits_with_error() {
    let tmp = TempDir::new().unwrap();
    let out = Command::new(BIN)
        .current_dir(tmp.path())
        .arg("nope.yaml")
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("nope.yaml"));
}
