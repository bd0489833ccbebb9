#![deny(missing_docs)]

//! # Template Bundle
//!
//! Loads the fixed set of named templates embedded in the crate into a
//! single template namespace and renders any subset of them against a
//! parameters record. Purely in-memory; callers decide whether and where to
//! persist the output.

use crate::error::{AppError, AppResult};
use minijinja::Environment;
use serde::Serialize;

/// The bundled template set, keyed by name (directory prefix stripped).
const TEMPLATES: &[(&str, &str)] = &[
    ("config.tmpl", include_str!("../templates/config.tmpl")),
    (
        "config-schemas.tmpl",
        include_str!("../templates/config-schemas.tmpl"),
    ),
    (
        "config-parameters.tmpl",
        include_str!("../templates/config-parameters.tmpl"),
    ),
    (
        "config-responses.tmpl",
        include_str!("../templates/config-responses.tmpl"),
    ),
    ("main.tmpl", include_str!("../templates/main.tmpl")),
    ("goren.tmpl", include_str!("../templates/goren.tmpl")),
    ("querier.tmpl", include_str!("../templates/querier.tmpl")),
];

/// Names of every bundled template, in bundle order.
pub fn template_names() -> Vec<&'static str> {
    TEMPLATES.iter().map(|(name, _)| *name).collect()
}

/// Parses every bundled template into a single environment.
///
/// # Errors
///
/// Returns [`AppError::TemplateParse`] naming the offending file when a
/// template fails to parse.
pub fn load_templates() -> AppResult<Environment<'static>> {
    let mut env = Environment::new();
    for (name, source) in TEMPLATES {
        env.add_template(name, source)
            .map_err(|source| AppError::TemplateParse {
                name: (*name).to_string(),
                source,
            })?;
    }
    Ok(env)
}

/// Renders the requested templates against `params`, concatenating outputs
/// with a newline separator in request order.
///
/// # Errors
///
/// Returns [`AppError::TemplateRender`] identifying the template when it is
/// unknown or fails to execute.
pub fn render_templates<S: Serialize>(
    names: &[&str],
    env: &Environment<'_>,
    params: &S,
) -> AppResult<String> {
    let mut rendered = Vec::with_capacity(names.len());
    for name in names {
        let template = env
            .get_template(name)
            .map_err(|source| AppError::TemplateRender {
                name: (*name).to_string(),
                source,
            })?;
        let output = template
            .render(params)
            .map_err(|source| AppError::TemplateRender {
                name: (*name).to_string(),
                source,
            })?;
        rendered.push(output);
    }
    Ok(rendered.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Params;

    #[test]
    fn test_load_templates_parses_the_whole_bundle() {
        let env = load_templates().unwrap();
        for name in template_names() {
            assert!(env.get_template(name).is_ok(), "missing template {name}");
        }
    }

    #[test]
    fn test_rendering_the_fixed_set_never_fails_for_nonempty_packages() {
        // Template/parameter compatibility is a closed contract: every
        // bundled template renders against any record with a non-empty
        // package name.
        let env = load_templates().unwrap();
        for package in ["api", "member", "pay"] {
            let params = Params::new("example.com/demo", package).with_version("2.0.0");
            for name in template_names() {
                if name == "querier.tmpl" {
                    // The querier template renders against its own context.
                    continue;
                }
                let out = render_templates(&[name], &env, &params).unwrap();
                assert!(!out.is_empty(), "empty render for {name}");
            }
        }
    }

    #[test]
    fn test_render_joins_in_request_order() {
        let env = load_templates().unwrap();
        let params = Params::new("example.com/demo", "api");
        let out =
            render_templates(&["config-schemas.tmpl", "config-responses.tmpl"], &env, &params)
                .unwrap();
        let schemas = out.find("package: schemas").unwrap();
        let responses = out.find("package: responses").unwrap();
        assert!(schemas < responses);
    }

    #[test]
    fn test_unknown_template_error_names_it() {
        let env = load_templates().unwrap();
        let params = Params::new("example.com/demo", "api");
        let err = render_templates(&["nope.tmpl"], &env, &params).unwrap_err();
        assert!(err.to_string().contains("nope.tmpl"));
    }

    #[test]
    fn test_config_render_substitutes_the_record() {
        let env = load_templates().unwrap();
        let params = Params::new("example.com/demo", "api");
        let out = render_templates(&["config.tmpl"], &env, &params).unwrap();
        assert!(out.contains("package: apigen"));
        assert!(out.contains("example.com/demo/goren/api/gen/schemas"));
    }
}
