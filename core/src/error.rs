#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the core crate.

use derive_more::{Display, From};

/// The core error enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A bundled template failed to parse.
    ///
    /// Both template variants share the same field types, so `From` must be
    /// suppressed on each to keep conversions unambiguous.
    #[from(ignore)]
    #[display("parsing template '{name}': {source}")]
    TemplateParse {
        /// Name of the offending template file.
        name: String,
        /// Underlying template engine error.
        source: minijinja::Error,
    },

    /// A template failed to execute against the parameters record.
    #[from(ignore)]
    #[display("error generating {name}: {source}")]
    TemplateRender {
        /// Name of the template being rendered.
        name: String,
        /// Underlying template engine error.
        source: minijinja::Error,
    },

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
