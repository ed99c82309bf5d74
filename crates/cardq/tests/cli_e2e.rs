//! End-to-end tests for the `cardq` binary.
//!
//! Each test runs the built binary with an isolated config file and checks
//! exit codes and JSON output.

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

struct CliContext {
    bin_path: PathBuf,
    config_dir: TempDir,
}

impl CliContext {
    fn new() -> Self {
        Self {
            bin_path: PathBuf::from(env!("CARGO_BIN_EXE_cardq")),
            config_dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn config_path(&self) -> PathBuf {
        self.config_dir.path().join("config.toml")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.bin_path)
            .args(args)
            .env("CARDQ_CONFIG", self.config_path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to run cardq")
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut full_args = vec!["--json"];
        full_args.extend_from_slice(args);
        let output = self.run(&full_args);
        assert!(
            output.status.success(),
            "cardq {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}

#[test]
fn test_compile_json() {
    let ctx = CliContext::new();
    let json = ctx.run_json(&["compile", "name:Doji", "clan:Crane", "force>3", "is:unique"]);

    assert_eq!(json["text"], "Doji");
    assert_eq!(json["constraints"]["clans"][0], "Crane");
    assert_eq!(json["constraints"]["force"]["min"], 4);
    assert_eq!(json["constraints"]["is_unique"], true);
}

#[test]
fn test_compile_table() {
    let ctx = CliContext::new();
    let output = ctx.run(&["compile", "--", "-is:unique", "Doji"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Text: Doji"));
    assert!(stdout.contains("is_unique"));
}

#[test]
fn test_bound_policy_from_config_and_flag() {
    let ctx = CliContext::new();
    let expr = ["compile", "gold>=1", "gold>=4", "gold<=6", "gold<=9"];

    let json = ctx.run_json(&expr);
    assert_eq!(json["constraints"]["gold_cost"]["max"], 9);

    let output = ctx.run(&["config", "set", "search.numeric_bounds", "tightest"]);
    assert!(output.status.success());

    let json = ctx.run_json(&expr);
    assert_eq!(json["constraints"]["gold_cost"]["min"], 4);
    assert_eq!(json["constraints"]["gold_cost"]["max"], 6);
}

#[test]
fn test_parse_and_tokens_json() {
    let ctx = CliContext::new();

    let json = ctx.run_json(&["parse", "clan:Crane OR clan:Lion"]);
    assert_eq!(json["combinator"], "OR");
    assert_eq!(json["terms"].as_array().map(Vec::len), Some(2));

    let json = ctx.run_json(&["tokens", "c:Crane \"Doji Hoturi\""]);
    assert_eq!(json["tokens"][1]["text"], "\"Doji Hoturi\"");
    assert_eq!(json["tokens"][1]["position"], 8);
}

#[test]
fn test_check_reports_but_succeeds() {
    let ctx = CliContext::new();
    let json = ctx.run_json(&["check", "clna:Crane"]);
    assert_eq!(json["diagnostics"][0]["kind"], "unknown_field");
    assert_eq!(json["diagnostics"][0]["suggestion"], "clan");
}

#[test]
fn test_invalid_config_value_exit_code() {
    let ctx = CliContext::new();
    let output = ctx.run(&["--json", "config", "set", "search.numeric_bounds", "loosest"]);
    assert_eq!(output.status.code(), Some(5));

    let error: Value = serde_json::from_slice(&output.stderr).expect("stderr is not JSON");
    assert_eq!(error["error"]["code"], "SEARCH_ERROR");
}

#[test]
fn test_unknown_config_key_exit_code() {
    let ctx = CliContext::new();
    let output = ctx.run(&["config", "set", "output.pager", "less"]);
    assert_eq!(output.status.code(), Some(5));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: configuration error"));
}

#[test]
fn test_broken_config_still_allows_config_path() {
    let ctx = CliContext::new();
    std::fs::write(ctx.config_path(), "version = [").expect("failed to write config");

    let output = ctx.run(&["config", "path"]);
    assert!(output.status.success());

    let output = ctx.run(&["compile", "Doji"]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_no_command_prints_hint() {
    let ctx = CliContext::new();
    let output = ctx.run(&[]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--help"));
}
