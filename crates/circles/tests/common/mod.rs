//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Path to the compiled `circles` binary
pub fn circles_binary() -> &'static str {
    env!("CARGO_BIN_EXE_circles")
}

/// Base command with colour and logging switched off for stable output
fn circles_command(args: &[&str]) -> Command {
    let mut command = Command::new(circles_binary());
    command
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("CIRCLES_UNICODE")
        .env_remove("RUST_LOG");
    command
}

/// Run the circles binary with the given arguments
pub fn run_circles(args: &[&str]) -> Output {
    circles_command(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute circles binary")
}

/// Run the circles binary, feeding `input` on stdin
pub fn run_circles_with_input(args: &[&str], input: &str) -> Output {
    let mut child = circles_command(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn circles binary");

    child
        .stdin
        .take()
        .expect("stdin was piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child
        .wait_with_output()
        .expect("Failed to wait for circles binary")
}

/// Stdout of a finished run as a string
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished run as a string
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Arguments describing the four-member network used across tests:
/// `0 -4- 1 -3- 2`, a direct `0 -10- 2`, and member 3 alone.
pub const SAMPLE_NETWORK: [&str; 8] = [
    "--members", "4", "--edge", "0,1,4", "--edge", "1,2,3", "--edge", "0,2,10",
];

/// `SAMPLE_NETWORK` followed by `extra`
pub fn sample_args<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    SAMPLE_NETWORK.iter().copied().chain(extra.iter().copied()).collect()
}
