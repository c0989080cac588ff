//! Error scenario integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn docdash_bin() -> Command {
    let mut cmd = Command::cargo_bin("docdash").expect("binary should be built");
    cmd.env("HOME", "/nonexistent") // Prevent reading config file
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .env_remove("DOCDASH_BASE_URL")
        .env_remove("DOCDASH_CSRF_TOKEN")
        .env_remove("DOCDASH_SESSION_COOKIE");
    cmd
}

#[test]
fn paste_with_empty_clipboard() {
    let dir = tempfile::tempdir().unwrap();
    let session = dir.path().join("session.json");

    // Nothing listens here; the clipboard check must fail before any request
    docdash_bin()
        .args(["paste", "--into", "4"])
        .args(["--base-url", "http://127.0.0.1:9"])
        .args(["--csrf-token", "token"])
        .args(["--session-file", session.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Clipboard is empty"));
}

#[test]
fn corrupt_clipboard_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let session = dir.path().join("session.json");
    std::fs::write(&session, "{not json").unwrap();

    docdash_bin()
        .args(["clipboard", "show"])
        .args(["--session-file", session.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Clipboard is empty"));
}

#[test]
fn unreachable_server_reports_request_failure() {
    let dir = tempfile::tempdir().unwrap();

    docdash_bin()
        .args(["favorite", "document", "3"])
        .args(["--base-url", "http://127.0.0.1:9"])
        .args(["--csrf-token", "token"])
        .args(["--session-file", dir.path().join("s.json").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Request failed"));
}

#[test]
fn unknown_kind_is_a_usage_error() {
    docdash_bin()
        .args(["copy", "spreadsheet", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn bulk_delete_with_nothing_selected() {
    let dir = tempfile::tempdir().unwrap();

    docdash_bin()
        .args(["bulk-delete", "--yes"])
        .args(["--base-url", "http://127.0.0.1:9"])
        .args(["--csrf-token", "token"])
        .args(["--session-file", dir.path().join("s.json").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing selected"));
}

#[test]
fn config_get_unknown_key() {
    docdash_bin()
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_unknown_key() {
    docdash_bin()
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_set_invalid_base_url() {
    docdash_bin()
        .args(["config", "set", "base_url", "docs.example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("http://"));
}

#[test]
fn config_set_invalid_timeout() {
    docdash_bin()
        .args(["config", "set", "timeout_secs", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive number"));
}

#[test]
fn config_list_with_no_file() {
    // Works without a config file, showing unset values
    docdash_bin()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not set"))
        .stdout(predicate::str::contains("base_url"));
}
