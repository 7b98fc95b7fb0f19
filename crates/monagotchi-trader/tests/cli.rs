//! End-to-end tests for the binary's output contract.
//!
//! Only paths that fail before any RPC request are exercised here, so the
//! tests run the real binary without a node.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::process::{Command, Output};

use serde_json::Value;

const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const TOKEN: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
const RPC: &str = "http://127.0.0.1:8545";

fn trader(args: &[&str], env: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_monagotchi-trader"))
        .args(args)
        .env_clear()
        .envs(env.iter().copied())
        .output()
        .unwrap()
}

/// Parse stdout, asserting it holds exactly one JSON line.
fn envelope(output: &Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "expected one line, got {stdout:?}");
    serde_json::from_str(lines[0]).unwrap()
}

#[test]
fn no_command_prints_usage_envelope() {
    let output = trader(&[], &[]);
    assert_eq!(output.status.code(), Some(1));
    let value = envelope(&output);
    assert_eq!(value["success"], Value::Bool(false));
    assert_eq!(value["error"], "Usage: monagotchi-trader <balance|burn|info>");
}

#[test]
fn unknown_command_prints_usage_envelope() {
    let output = trader(&["withdraw"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        envelope(&output)["error"],
        "Usage: monagotchi-trader <balance|burn|info>"
    );
}

#[test]
fn burn_without_action_prints_burn_usage() {
    let output = trader(&["burn"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        envelope(&output)["error"],
        "Usage: monagotchi-trader burn <feed|play|clean|heal>"
    );
}

#[test]
fn unknown_action_fails_before_configuration() {
    // No environment at all: the action is rejected first.
    let output = trader(&["burn", "dance"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        envelope(&output),
        serde_json::json!({
            "success": false,
            "error": "Unknown action: dance. Valid: feed, play, clean, heal"
        })
    );
}

#[test]
fn missing_configuration_prints_nothing_on_stdout() {
    for command in [&["balance"][..], &["info"][..], &["burn", "feed"][..]] {
        let output = trader(command, &[]);
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty(), "stdout must stay empty for {command:?}");
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("MONAGOTCHI_TOKEN_ADDRESS not set"));
    }
}

#[test]
fn each_missing_variable_is_named() {
    let output = trader(&["balance"], &[("MONAGOTCHI_TOKEN_ADDRESS", TOKEN)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr).unwrap().contains("MONAD_PRIVATE_KEY not set"));

    let output = trader(
        &["balance"],
        &[("MONAGOTCHI_TOKEN_ADDRESS", TOKEN), ("MONAD_PRIVATE_KEY", DEV_KEY)],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr).unwrap().contains("MONAD_RPC_URL not set"));
}

#[test]
fn unparseable_key_is_runtime_failure() {
    let output = trader(
        &["balance"],
        &[
            ("MONAGOTCHI_TOKEN_ADDRESS", TOKEN),
            ("MONAD_PRIVATE_KEY", "0xdeadbeef"),
            ("MONAD_RPC_URL", RPC),
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    let value = envelope(&output);
    assert_eq!(value["success"], Value::Bool(false));
    assert!(value["error"].as_str().unwrap().starts_with("invalid private key"));
}

#[test]
fn version_flag_exits_cleanly() {
    let output = trader(&["--version"], &[]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout).unwrap().contains("monagotchi-trader"));
}
