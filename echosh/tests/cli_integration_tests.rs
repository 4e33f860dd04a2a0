// echosh/tests/cli_integration_tests.rs
//! End-to-end tests for the echosh binary surface.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn echosh() -> Command {
    Command::cargo_bin("echosh").unwrap()
}

#[test]
fn plain_message_without_time_is_byte_exact() {
    echosh()
        .args(["Hello, World!", "--no-time"])
        .assert()
        .success()
        .stdout("Hello, World!\n");
}

#[test]
fn error_flag_wraps_in_red_and_reset() {
    echosh()
        .args(["Error Occurred!", "--no-time", "--error"])
        .assert()
        .success()
        .stdout("\u{1b}[31mError Occurred!\u{1b}[0m\n");
}

#[test]
fn explicit_text_color_wraps_the_message() {
    echosh()
        .args(["ready", "--no-time", "--color", "GREEN"])
        .assert()
        .success()
        .stdout("\u{1b}[32mready\u{1b}[0m\n");
}

#[test]
fn highlight_uses_black_on_bright_yellow() {
    echosh()
        .args(["note", "--no-time", "--highlight"])
        .assert()
        .success()
        .stdout("\u{1b}[30;103mnote\u{1b}[0m\n");
}

#[test]
fn timestamp_prefix_matches_the_clock_format() {
    echosh()
        .args(["Hello, World!"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(
                "^\u{1b}\\[32m\\[\\d{1,2}:\\d{2} (AM|PM) - \\d{2}/\\d{2}/\\d{4}\\]\u{1b}\\[0m Hello, World!\n$",
            )
            .unwrap(),
        );
}

#[test]
fn child_tag_and_label_compose_in_order() {
    echosh()
        .args([
            "starting",
            "--no-time",
            "--child",
            "Worker",
            "--prefix",
            "boot",
        ])
        .assert()
        .success()
        .stdout(
            "\u{1b}[31m[Child Worker Process]\u{1b}[0m \u{1b}[32m[boot]\u{1b}[0m starting\n",
        );
}

#[test]
fn unknown_color_name_fails_before_printing() {
    echosh()
        .args(["oops", "--color", "chartreuse"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Unknown color name 'chartreuse'"));
}

#[test]
fn log_file_keeps_the_newest_lines_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.log");
    for message in ["first", "second", "third", "fourth"] {
        echosh()
            .args([
                message,
                "--no-time",
                "--log-file",
                path.to_str().unwrap(),
                "--log-lines",
                "3",
            ])
            .assert()
            .success();
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), "fourth\nthird\nsecond\n");
}

#[test]
fn log_file_path_can_come_from_the_environment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("env.log");
    echosh()
        .args(["via env", "--no-time"])
        .env("ECHOSH_LOG_FILE", path.to_str().unwrap())
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&path).unwrap(), "via env\n");
}

#[test]
fn logged_copy_drops_the_color_codes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.log");
    echosh()
        .args([
            "deployed",
            "--no-time",
            "--color",
            "RED",
            "--prefix",
            "release",
            "--log-file",
            path.to_str().unwrap(),
        ])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[release] deployed\n");
}

#[test]
fn piped_input_is_printed() {
    echosh()
        .arg("--no-time")
        .write_stdin("piped text\n")
        .assert()
        .success()
        .stdout("piped text\n");
}

#[test]
fn malformed_piped_bytes_are_repaired() {
    echosh()
        .arg("--no-time")
        .write_stdin(&b"bad \xFF byte\n"[..])
        .assert()
        .success()
        .stdout("bad   byte\n");
}

#[test]
fn json_messages_pretty_print_with_four_space_indent() {
    echosh()
        .args(["--json", "--no-time", r#"{"a": [1, 2]}"#])
        .assert()
        .success()
        .stdout("{\n    \"a\": [\n        1,\n        2\n    ]\n}\n");
}

#[test]
fn invalid_json_is_a_clean_failure() {
    echosh()
        .args(["--json", "--no-time", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse the message as JSON"));
}
