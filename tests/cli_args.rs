//! Integration tests for CLI argument handling and the REPL loop
//!
//! Tests the --cache-ttl flag and drives short scripted sessions over a
//! stdin pipe. Nothing here touches the network: only commands that stay
//! local (help, unknown words, exit) are scripted.

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pokedex"))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute pokedex")
}

/// Helper to run a scripted REPL session, feeding `input` over stdin
fn run_repl(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pokedex"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn pokedex");
    child
        .stdin
        .take()
        .expect("stdin not piped")
        .write_all(input.as_bytes())
        .expect("Failed to write REPL input");
    child.wait_with_output().expect("Failed to wait for pokedex")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pokedex"), "Help should mention pokedex");
    assert!(
        stdout.contains("cache-ttl"),
        "Help should mention --cache-ttl flag"
    );
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
}

#[test]
fn test_zero_cache_ttl_is_rejected() {
    let output = run_cli(&["--cache-ttl", "0"]);
    assert!(!output.status.success(), "Expected zero TTL to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("cache-ttl"),
        "Should name the offending flag: {}",
        stderr
    );
}

#[test]
fn test_eof_ends_the_session_cleanly() {
    // stdin is closed immediately; the loop should exit without error
    let output = run_cli(&[]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Pokedex > "), "Should print the prompt");
}

#[test]
fn test_scripted_help_session() {
    let output = run_repl("help\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Welcome to the Pokedex!"));
    for name in ["map", "mapb", "explore", "catch", "inspect", "pokedex"] {
        assert!(stdout.contains(name), "Help should list {}", name);
    }
}

#[test]
fn test_scripted_unknown_command_session() {
    let output = run_repl("teleport\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Unknown command!"));
}

#[test]
fn test_scripted_empty_pokedex_session() {
    let output = run_repl("pokedex\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Your pokedex is empty!"));
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use pokedex::cli::{Cli, StartupConfig};
    use pokedex::commands::Command;
    use std::time::Duration;

    #[test]
    fn test_cli_default_ttl_is_five_minutes() {
        let cli = Cli::parse_from(["pokedex"]);
        let config = StartupConfig::from_cli(&cli);
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_cli_custom_ttl_round_trips() {
        let cli = Cli::parse_from(["pokedex", "--cache-ttl", "7"]);
        let config = StartupConfig::from_cli(&cli);
        assert_eq!(config.cache_ttl, Duration::from_secs(7));
    }

    #[test]
    fn test_command_table_matches_repl_vocabulary() {
        for name in ["help", "exit", "map", "mapb", "explore", "catch", "inspect", "pokedex"] {
            assert!(
                Command::from_str(name).is_some(),
                "{} should be a command",
                name
            );
        }
    }
}
