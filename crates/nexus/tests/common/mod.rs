//! Common test utilities shared across integration tests.

use std::path::Path;
use std::process::{Command, Output};

/// Run the nexus binary in the specified directory with colors disabled
pub fn run_nexus_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nexus"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute nexus binary")
}

/// Run the binary and parse its stdout as JSON, asserting success
pub fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = run_nexus_in_dir(dir, args);
    assert!(
        output.status.success(),
        "nexus {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
