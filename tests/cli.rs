//! Spawns the `trustmark-decode` binary and checks exit codes and the JSON
//! printed on stdout.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn decode_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("trustmark-decode");
    cmd.env_remove("RUST_LOG").env_remove("TRUSTMARK_MODELS");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    let text = String::from_utf8(output.stdout.clone()).unwrap();
    serde_json::from_str(text.trim()).unwrap_or_else(|e| panic!("invalid JSON {text:?}: {e}"))
}

#[test]
fn help_exits_0() {
    decode_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TrustMark"));
}

#[test]
fn version_exits_0() {
    decode_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("trustmark-decode"));
}

#[test]
fn no_arguments_exits_1_with_error_json() {
    let output = decode_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let v = stdout_json(&output);
    assert_eq!(v["success"], false);
    assert_eq!(v["hasWatermark"], false);
    assert!(v["error"].as_str().is_some_and(|s| !s.is_empty()));
}

#[cfg(not(feature = "trustmark"))]
#[test]
fn missing_backend_exits_1() {
    let output = decode_cmd().arg("photo.png").output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let v = stdout_json(&output);
    assert_eq!(v["success"], false);
    assert!(v["error"]
        .as_str()
        .is_some_and(|s| s.starts_with("Missing dependency:")));
}

#[cfg(not(feature = "trustmark"))]
#[test]
fn missing_backend_is_checked_before_arguments() {
    let output = decode_cmd().output().unwrap();
    let v = stdout_json(&output);
    assert!(v["error"]
        .as_str()
        .is_some_and(|s| s.starts_with("Missing dependency:")));
}

#[cfg(feature = "trustmark")]
#[test]
fn nonexistent_image_exits_0_with_not_found() {
    let output = decode_cmd()
        .args(["/no/such/image.png", "Q"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let v = stdout_json(&output);
    assert_eq!(v["success"], false);
    assert_eq!(v["hasWatermark"], false);
    assert_eq!(v["error"], "Image file not found: /no/such/image.png");
}

#[cfg(not(feature = "trustmark"))]
#[test]
fn extra_arguments_are_not_a_usage_error() {
    let output = decode_cmd()
        .args(["photo.png", "P", "extra", "--bogus"])
        .output()
        .unwrap();
    let v = stdout_json(&output);
    assert!(v["error"]
        .as_str()
        .is_some_and(|s| s.starts_with("Missing dependency:")));
}

#[cfg(feature = "trustmark")]
#[test]
fn extra_arguments_are_ignored() {
    let output = decode_cmd()
        .args(["/no/such/image.png", "P", "extra", "--more"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_json(&output)["error"],
        "Image file not found: /no/such/image.png"
    );
}

#[cfg(feature = "trustmark")]
#[test]
fn flag_like_argument_is_treated_as_image_path() {
    let output = decode_cmd().arg("--bogus").output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let v = stdout_json(&output);
    assert_eq!(v["success"], false);
    assert_eq!(v["error"], "Image file not found: --bogus");
}

#[cfg(feature = "trustmark")]
#[test]
fn no_arguments_reports_usage() {
    let output = decode_cmd().output().unwrap();
    let v = stdout_json(&output);
    assert!(v["error"]
        .as_str()
        .is_some_and(|s| s.starts_with("Usage: trustmark-decode")));
}
