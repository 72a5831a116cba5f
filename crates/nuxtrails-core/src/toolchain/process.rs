//! Production [`Toolchain`] implementation over child processes

use super::Toolchain;
use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use tokio::process::Command;

/// Runs tools as child processes with inherited stdio
///
/// Output streams straight to the user's terminal; this side only
/// observes the exit status. No timeout, no cancellation.
#[derive(Debug, Clone, Default)]
pub struct ProcessToolchain;

impl Toolchain for ProcessToolchain {
    async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        let command_line = format!("{} {}", program, args.join(" "));
        println!("{} {}", "Running:".dimmed(), command_line.yellow());

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .await
            .with_context(|| format!("failed to spawn '{}'", command_line))?;

        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::ToolchainFailed {
                command: command_line,
                status,
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_program_is_an_error() {
        let tc = ProcessToolchain;
        let result = tc
            .run("nuxtrails-definitely-not-a-binary", &[], Path::new("."))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_nonzero_exit_maps_to_toolchain_failed() {
        let tc = ProcessToolchain;
        let err = tc
            .run("sh", &["-c", "exit 3"], Path::new("."))
            .await
            .unwrap_err();
        let failure = err.downcast_ref::<ScaffoldError>();
        assert!(matches!(
            failure,
            Some(ScaffoldError::ToolchainFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_zero_exit_is_ok() {
        let tc = ProcessToolchain;
        assert!(tc.run("sh", &["-c", "exit 0"], Path::new(".")).await.is_ok());
    }
}
