#![deny(missing_docs)]

//! # Goren CLI
//!
//! Command-line build glue for regenerating source code: the `goren`
//! OpenAPI scaffolder and the `goren-orm` schema scaffolder. Neither tool
//! contains generation logic of its own — both shell out to pre-built
//! external generators through the [`exec::CommandExecutor`] capability and
//! hand them computed paths, package names, and template-rendered
//! configuration files.

/// Explicit configuration record and consul resolution.
pub mod config;

/// Database endpoint parsing and readiness checks.
pub mod db;

/// CLI error types.
pub mod error;

/// External command execution capability.
pub mod exec;

/// ORM generation plan and the gentool-backed implementation.
pub mod generator;

/// OpenAPI scaffold orchestration.
pub mod openapi;

/// ORM scaffold orchestration.
pub mod orm;

pub use error::{CliError, CliResult};
