//! Error types for the scaffolding pipeline
//!
//! Covers the precondition conflicts a user can recover from (directory
//! already present, bad field list) and external toolchain failures.
//! File-system errors stay as `anyhow` context on the operation that hit
//! them.

use std::process::ExitStatus;

/// Errors raised by the scaffolding workflows
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// Target project directory already exists
    #[error("folder '{0}' already exists")]
    ProjectExists(String),

    /// The same field name appears more than once in one invocation
    #[error("duplicate field name '{0}'")]
    DuplicateField(String),

    /// A field token has no name before the ':'
    #[error("field token '{0}' has an empty name")]
    EmptyFieldName(String),

    /// An invoked external tool exited with a non-zero status
    #[error("'{command}' failed with {status}")]
    ToolchainFailed {
        /// Full command line that was run
        command: String,
        status: ExitStatus,
    },

    /// Required runtimes are missing from PATH
    #[error("missing required runtime(s): {0}")]
    RuntimeMissing(String),
}
