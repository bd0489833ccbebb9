#![deny(missing_docs)]

//! # Generation Parameters
//!
//! The one structured entity of the generation run: substitution variables
//! handed by reference into every template render call. Constructed once
//! from command-line input, immutable afterwards, discarded on exit.

use serde::Serialize;

/// Substitution variables for the bundled templates.
#[derive(Debug, Clone, Serialize)]
pub struct Params {
    /// Canonical name of the enclosing Go module (`go list -m`).
    pub module_name: String,

    /// Optional tool version stamped into bootstrap files.
    pub version: Option<String>,

    /// Package name of the public API surface.
    pub package_name_api: String,

    /// Package name of the generated internals (always `<package>gen`).
    pub package_name_api_gen: String,
}

impl Params {
    /// Builds the record from a module name and the API package name.
    pub fn new(module_name: impl Into<String>, package: impl Into<String>) -> Self {
        let package_name_api = package.into();
        let package_name_api_gen = format!("{package_name_api}gen");
        Self {
            module_name: module_name.into(),
            version: None,
            package_name_api,
            package_name_api_gen,
        }
    }

    /// Attaches a version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}
