#![deny(missing_docs)]

//! # Goren Core
//!
//! Template rendering and filesystem helpers shared by the goren build tools.
//!
//! The core crate is purely mechanical: it loads a fixed bundle of named
//! templates, renders them against a parameters record, and performs
//! skip-if-exists writes. All orchestration (external generator invocation,
//! configuration resolution) lives in the CLI crate.

/// Shared error types.
pub mod error;

/// Skip-if-exists file writes and directory creation.
pub mod files;

/// Generation parameters record.
pub mod params;

/// Querier interface contract (time-range filter).
pub mod querier;

/// Bundled template loader and renderer.
pub mod templates;

pub use error::{AppError, AppResult};
pub use files::{ensure_dir, write_if_absent};
pub use params::Params;
pub use querier::{filter_with_time_doc, time_filter_where, FILTER_WITH_TIME_SQL};
pub use templates::{load_templates, render_templates, template_names};
