#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate. Every error is terminal to the run: the
//! binaries print one diagnostic line to stderr and exit with status 1.

use derive_more::{Display, From};

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Errors bubbled up from the core renderer and file helpers.
    #[display("{_0}")]
    Core(goren_core::AppError),

    /// An external command failed; the captured combined output is echoed.
    #[from(ignore)]
    #[display("failed to exec cmd, name: {name}, output: {output}")]
    Command {
        /// The operation or target the command was running for.
        name: String,
        /// Captured combined stdout+stderr of the child process.
        output: String,
    },

    /// Configuration or service-discovery resolution failure.
    #[from(ignore)]
    #[display("config setup err: {_0}")]
    Config(String),

    /// General failure message.
    #[display("Operation failed: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// The `General(String)` variant contains a `String`, which does not
/// implement `std::error::Error`, so the derived `source()` would not
/// compile; an empty impl matches the core crate.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
