//! Integration tests for the `onetap` CLI binary.
//!
//! These tests exercise argument parsing, the transformation commands,
//! output formats, exit codes, and config handling end to end.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `onetap` binary rooted in `config_home`.
///
/// Clears all `ONETAP_*` env vars so tests never pick up ambient defaults.
fn onetap_cmd_in(config_home: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("onetap");
    cmd.env("HOME", config_home)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("ONETAP_OUTPUT")
        .env_remove("ONETAP_COLOR");
    cmd
}

/// Build a [`Command`] with config directories pointed at a nonexistent
/// path, so tests never touch the user's real configuration.
fn onetap_cmd() -> assert_cmd::Command {
    onetap_cmd_in(std::path::Path::new("/tmp/onetap-cli-test-nonexistent"))
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = onetap_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    onetap_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("encode")
            .and(predicate::str::contains("format"))
            .and(predicate::str::contains("generate"))
            .and(predicate::str::contains("calc")),
    );
}

#[test]
fn test_version_flag() {
    onetap_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("onetap"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    onetap_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    onetap_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = onetap_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_invalid_output_format() {
    let output = onetap_cmd()
        .args(["--output", "bogus", "calc", "1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
}

// ── Codecs ──────────────────────────────────────────────────────────

#[test]
fn test_encode_base64() {
    onetap_cmd()
        .args(["encode", "base64", "hello"])
        .assert()
        .success()
        .stdout("aGVsbG8=\n");
}

#[test]
fn test_decode_base64() {
    onetap_cmd()
        .args(["decode", "base64", "aGVsbG8="])
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn test_encode_hex_from_stdin() {
    onetap_cmd()
        .args(["encode", "hex"])
        .write_stdin("Hi\n")
        .assert()
        .success()
        .stdout("48 69\n");
}

#[test]
fn test_decode_invalid_base64_exit_code() {
    let output = onetap_cmd()
        .args(["decode", "base64", "%%%"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3), "Expected decode exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("invalid Base64 input"),
        "Expected decode error message:\n{text}"
    );
}

// ── Text ────────────────────────────────────────────────────────────

#[test]
fn test_text_case_snake() {
    onetap_cmd()
        .args(["text", "case", "snake", "Hello World"])
        .assert()
        .success()
        .stdout("hello_world\n");
}

#[test]
fn test_text_clean_collapses_runs() {
    onetap_cmd()
        .args(["text", "clean", "  hello \t world  "])
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn test_text_clean_all_removes_every_space() {
    onetap_cmd()
        .args(["text", "clean", "--all", "hello  world\tagain"])
        .assert()
        .success()
        .stdout("helloworldagain\n");
}

#[test]
fn test_text_sort_unique() {
    onetap_cmd()
        .args(["text", "sort", "--unique"])
        .write_stdin("b\na\nb\n")
        .assert()
        .success()
        .stdout("a\nb\n");
}

#[test]
fn test_text_stats_json_output() {
    onetap_cmd()
        .args(["-o", "json", "text", "stats", "hello world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"words\": 2"));
}

#[test]
fn test_text_extract_emails() {
    onetap_cmd()
        .args(["-o", "plain", "text", "extract", "emails", "ping a@b.io or c@d.org"])
        .assert()
        .success()
        .stdout("a@b.io\nc@d.org\n");
}

// ── Formatters ──────────────────────────────────────────────────────

#[test]
fn test_format_json_minify() {
    onetap_cmd()
        .args(["format", "json", "--minify", "{\"a\": 1}"])
        .assert()
        .success()
        .stdout("{\"a\":1}\n");
}

#[test]
fn test_format_json_invalid_exit_code() {
    let output = onetap_cmd()
        .args(["format", "json", "{bad"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4), "Expected parse exit code");
}

#[test]
fn test_format_html_escape() {
    onetap_cmd()
        .args(["format", "html", "<b>&</b>"])
        .assert()
        .success()
        .stdout("&lt;b&gt;&amp;&lt;/b&gt;\n");
}

// ── Generators ──────────────────────────────────────────────────────

#[test]
fn test_generate_password_length() {
    let output = onetap_cmd()
        .args(["generate", "password", "-l", "24"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert_eq!(text.trim_end().chars().count(), 24);
}

#[test]
fn test_generate_strong_password_has_all_classes() {
    let output = onetap_cmd()
        .args(["generate", "password", "--strong", "-l", "16"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    let password = text.trim_end();
    assert!(password.chars().any(|c| c.is_ascii_uppercase()));
    assert!(password.chars().any(|c| c.is_ascii_lowercase()));
    assert!(password.chars().any(|c| c.is_ascii_digit()));
    assert!(password.chars().any(|c| "!@#$%^&*".contains(c)));
}

#[test]
fn test_generate_uuid_count() {
    let output = onetap_cmd()
        .args(["generate", "uuid", "-n", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = text.trim_end().lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert_eq!(line.len(), 36, "UUID should be 36 chars: {line}");
        assert_eq!(line.matches('-').count(), 4);
    }
}

#[test]
fn test_generate_number_degenerate_range() {
    onetap_cmd()
        .args(["generate", "number", "5", "5"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_generate_number_inverted_range_exit_code() {
    let output = onetap_cmd()
        .args(["generate", "number", "9", "3"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(6), "Expected range exit code");
}

#[test]
fn test_generate_slug() {
    onetap_cmd()
        .args(["generate", "slug", "Hello, World!"])
        .assert()
        .success()
        .stdout("hello-world\n");
}

// ── Hashes & tokens ─────────────────────────────────────────────────

#[test]
fn test_hash_sha256_empty_plain() {
    onetap_cmd()
        .args(["-o", "plain", "hash", "sha256", ""])
        .assert()
        .success()
        .stdout("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855\n");
}

#[test]
fn test_jwt_encode_decode_round_trip() {
    let encode = onetap_cmd()
        .args(["jwt", "encode", "{\"sub\":\"alice\"}"])
        .output()
        .unwrap();
    assert!(encode.status.success());
    let token = String::from_utf8_lossy(&encode.stdout).trim_end().to_string();
    assert_eq!(token.matches('.').count(), 2, "Expected three segments: {token}");

    onetap_cmd()
        .args(["jwt", "decode", &token])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"));
}

// ── Colors & conversions ────────────────────────────────────────────

#[test]
fn test_color_hex() {
    onetap_cmd()
        .args(["color", "#ff0000"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("rgb(255, 0, 0)").and(predicate::str::contains("hsl(0")),
        );
}

#[test]
fn test_convert_length_plain() {
    onetap_cmd()
        .args(["-o", "plain", "convert", "length", "5", "km", "mi"])
        .assert()
        .success()
        .stdout("3.106855\n");
}

#[test]
fn test_convert_file_size() {
    onetap_cmd()
        .args(["convert", "file-size", "1048576"])
        .assert()
        .success()
        .stdout("1.00 MB\n");
}

// ── Dates & finance ─────────────────────────────────────────────────

#[test]
fn test_date_between() {
    onetap_cmd()
        .args(["date", "between", "2024-01-01", "2024-03-01"])
        .assert()
        .success()
        .stdout("60\n");
}

#[test]
fn test_date_between_order_does_not_matter() {
    onetap_cmd()
        .args(["date", "between", "2024-03-01", "2024-01-01"])
        .assert()
        .success()
        .stdout("60\n");
}

#[test]
fn test_date_show_unix_seconds() {
    onetap_cmd()
        .args(["date", "show", "1709287200"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("2024-03-01").and(predicate::str::contains("1709287200")),
        );
}

#[test]
fn test_finance_tip() {
    onetap_cmd()
        .args(["finance", "tip", "100", "-t", "20", "-p", "2"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("20.00")
                .and(predicate::str::contains("120.00"))
                .and(predicate::str::contains("60.00")),
        );
}

// ── Network ─────────────────────────────────────────────────────────

#[test]
fn test_net_check_ip_private() {
    onetap_cmd()
        .args(["net", "check-ip", "10.0.0.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IPv4").and(predicate::str::contains("private")));
}

#[test]
fn test_net_subnet() {
    onetap_cmd()
        .args(["net", "subnet", "192.168.1.0/24"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("192.168.1.255")
                .and(predicate::str::contains("255.255.255.0"))
                .and(predicate::str::contains("254")),
        );
}

#[test]
fn test_net_ports_table() {
    onetap_cmd()
        .args(["net", "ports"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HTTPS").and(predicate::str::contains("443")));
}

#[test]
fn test_net_port_not_found_exit_code() {
    let output = onetap_cmd().args(["net", "ports", "9"]).output().unwrap();
    assert_eq!(output.status.code(), Some(7), "Expected not-found exit code");
}

// ── Calculator ──────────────────────────────────────────────────────

#[test]
fn test_calc_expression() {
    onetap_cmd()
        .args(["calc", "(2 + 3) * 4"])
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn test_calc_division_by_zero_exit_code() {
    let output = onetap_cmd().args(["calc", "5/(3-3)"]).output().unwrap();
    assert_eq!(output.status.code(), Some(6), "Expected range exit code");
    let text = combined_output(&output);
    assert!(text.contains("divisor"), "Expected divisor in error:\n{text}");
}

// ── Quiet mode ──────────────────────────────────────────────────────

#[test]
fn test_quiet_suppresses_output() {
    onetap_cmd()
        .args(["-q", "encode", "base64", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_show_without_file() {
    // `config show` renders the built-in defaults when no file exists.
    onetap_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output = \"table\""));
}

#[test]
fn test_config_set_unknown_key() {
    let output = onetap_cmd()
        .args(["config", "set", "nonsense", "1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
}

#[test]
fn test_config_set_then_applies_default_output() {
    let dir = tempfile::tempdir().unwrap();

    onetap_cmd_in(dir.path())
        .args(["config", "set", "output", "json"])
        .assert()
        .success();

    onetap_cmd_in(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output = \"json\""));

    // Later invocations pick the configured default up automatically.
    onetap_cmd_in(dir.path())
        .args(["text", "stats", "hello world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"words\": 2"));
}
