// Startup behaviour of the binary: every fatal error must happen before the
// terminal is touched, so stdout stays empty.

use linkstat::commands::build_cli;
use linkstat::core::config::MonitorConfig;
use std::process::{Command, Output};

fn run_linkstat(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_linkstat"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run linkstat")
}

#[test]
fn test_unresolvable_target_exits_before_drawing() {
    let output = run_linkstat(&["no-such-host.invalid"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "nothing may be drawn");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no-such-host.invalid"));
}

#[test]
fn test_zero_interval_is_fatal() {
    let output = run_linkstat(&["-n", "0", "127.0.0.1"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("interval"));
}

#[test]
fn test_non_numeric_interval_is_fatal() {
    let output = run_linkstat(&["-n", "often"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_oversized_interval_label_is_fatal() {
    let output = run_linkstat(&["-n", &u64::MAX.to_string()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_two_targets_are_rejected() {
    let output = run_linkstat(&["10.0.0.1", "10.0.0.2"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_ipv6_flag_with_ipv4_literal_is_fatal() {
    let output = run_linkstat(&["-6", "192.0.2.1"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_parser_rejects_extra_positional() {
    let result = build_cli().try_get_matches_from(["linkstat", "a", "b"]);
    assert!(result.is_err());
}

#[test]
fn test_parser_defaults_to_loopback() {
    let matches = build_cli().try_get_matches_from(["linkstat"]).unwrap();
    let config = MonitorConfig::from_matches(&matches).unwrap();
    assert_eq!(config.target, "127.0.0.1");
    assert_eq!(config.interval_label, "5s");
}
