use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd() -> Command {
    cargo_bin_cmd!("eve")
}

fn read_index(out: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(out.join("index.json")).expect("index.json written"))
        .expect("valid json")
}

#[test]
fn run_without_extensions() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("nested/vv");
    cmd()
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Extended Verification and Validation"))
        .stdout(contains("Done!"))
        .stdout(contains(out.join("index.html").display().to_string()));

    let index = read_index(&out);
    assert_eq!(index["title"], "Summary");
    assert_eq!(index["elements"], Value::Array(Vec::new()));
    assert!(out.join("index.html").is_file());
}

#[test]
fn comment_is_echoed() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .args(["-c", "dome regression"])
        .arg("-o")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(contains("  dome regression"));
}

#[test]
fn missing_extension_config_fails() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("vv");
    cmd()
        .arg("-e")
        .arg(tmp.path().join("absent.json"))
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("absent.json"));
    assert!(!out.join("index.json").exists());
}

#[test]
fn malformed_extension_config_fails() {
    let tmp = TempDir::new().unwrap();
    let bad = tmp.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    cmd()
        .arg("-e")
        .arg(&bad)
        .arg("-o")
        .arg(tmp.path().join("vv"))
        .assert()
        .failure()
        .stderr(contains("bad.json"));
}

#[test]
fn unknown_flag_is_usage_error() {
    cmd().arg("--nope").assert().code(2);
}

#[test]
fn unregistered_module_reports_error_element() {
    let tmp = TempDir::new().unwrap();
    let ext = tmp.path().join("ext.json");
    fs::write(&ext, r#"{"dome": {"module": "validation/dome.py"}}"#).unwrap();
    let out = tmp.path().join("vv");
    cmd().arg("-e").arg(&ext).arg("-o").arg(&out).assert().success();

    let index = read_index(&out);
    let elements = index["elements"].as_array().unwrap();
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0]["type"], "error");
    assert_eq!(elements[0]["title"], "dome");
}

#[test]
fn report_follows_config_order() {
    let tmp = TempDir::new().unwrap();
    let ext = tmp.path().join("ext.json");
    fs::write(
        &ext,
        r#"{"shelf": {"module": "shelf.py"}, "dome": {"module": "dome.py"}, "ismip": {"module": "ismip.py"}}"#,
    )
    .unwrap();
    let out = tmp.path().join("vv");
    cmd().arg("-e").arg(&ext).arg("-o").arg(&out).assert().success();

    let index = read_index(&out);
    let titles: Vec<&str> = index["elements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["shelf", "dome", "ismip"]);
}

#[cfg(unix)]
#[test]
fn command_extensions_merge_and_run() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("base.json");
    let site = tmp.path().join("site.json");
    fs::write(
        &base,
        r#"{
            "dome": {"module": "command", "command": ["sh", "-c", "exit 1"]},
            "shelf": {"module": "command", "command": ["sh", "-c", "cat >/dev/null; echo '{\"type\":\"note\"}'"]}
        }"#,
    )
    .unwrap();
    fs::write(
        &site,
        r#"{"dome": {"command": ["sh", "-c", "cat >/dev/null; echo '[{\"type\":\"a\"},{\"type\":\"b\"}]'"]}}"#,
    )
    .unwrap();

    let out = tmp.path().join("vv");
    cmd()
        .arg("-e")
        .arg(&base)
        .arg(&site)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let index = read_index(&out);
    let types: Vec<&str> = index["elements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, ["a", "b", "note"]);
}
