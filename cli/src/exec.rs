#![deny(missing_docs)]

//! # Command Execution
//!
//! The "external tool" capability: run generator X with arguments Y, return
//! the captured output or a failure. The surrounding orchestration stays
//! testable against a recording fake without spawning real subprocesses.

use crate::error::{CliError, CliResult};
use std::process::{Command, Output};

/// Interface for executing external generator commands.
///
/// Abstracted to allow mocking command execution in tests without requiring
/// the real generators to be installed.
pub trait CommandExecutor {
    /// Executes the command and returns the raw output.
    fn execute(&self, program: &str, args: &[&str]) -> CliResult<Output>;
}

/// Standard executor using `std::process::Command`.
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn execute(&self, program: &str, args: &[&str]) -> CliResult<Output> {
        let output = Command::new(program).args(args).output()?;
        Ok(output)
    }
}

/// Runs `program` with `args`, returning its combined stdout+stderr.
///
/// `name` identifies the operation or target in diagnostics. A command that
/// cannot be launched or exits non-zero fails with the captured output, the
/// same way the child's combined output would appear on a terminal.
pub fn run_captured(
    executor: &impl CommandExecutor,
    name: &str,
    program: &str,
    args: &[&str],
) -> CliResult<String> {
    let output = executor.execute(program, args)?;
    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    if !output.status.success() {
        return Err(CliError::Command {
            name: name.to_string(),
            output: combined,
        });
    }
    Ok(combined)
}


#[cfg(test)]
mod tests {
    use super::test_support::RecordingExecutor;
    use super::*;

    #[test]
    fn test_run_captured_success_returns_combined_output() {
        let executor = RecordingExecutor::new();
        let out = run_captured(&executor, "go list -m", "go", &["list", "-m"]).unwrap();
        assert_eq!(out.trim(), "example.com/demo");
    }

    #[test]
    fn test_run_captured_failure_carries_output() {
        let executor = RecordingExecutor::failing("gentool");
        let err = run_captured(&executor, "gentool", "gentool", &["-db", "mysql"]).unwrap_err();
        match err {
            CliError::Command { name, output } => {
                assert_eq!(name, "gentool");
                assert!(output.contains("mock failure"));
            }
            other => panic!("wrong error type: {other}"),
        }
    }

    #[test]
    fn test_shell_executor_runs_a_real_command() {
        let exec = ShellExecutor;
        let res = exec.execute("echo", &["test"]);
        match res {
            Ok(output) => assert!(output.status.success()),
            Err(_) => {
                // Acceptable on hosts without `echo` in PATH; the trait impl
                // still returned a proper CliResult.
            }
        }
    }
}
