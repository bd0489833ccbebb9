#![deny(missing_docs)]

//! # OpenAPI Scaffold Orchestrator
//!
//! Ensures the external OpenAPI code generator and its configuration files
//! exist, then invokes the generator against the three fixed
//! external-reference specs and the caller-supplied OpenAPI document.
//!
//! One-time project bootstrapping (the `main.go` entry point and the
//! `goren.go` orchestrator file) is a distinct `init` operation rather than
//! part of steady-state generation.

use crate::error::CliResult;
use crate::exec::{run_captured, CommandExecutor};
use goren_core::{ensure_dir, load_templates, render_templates, write_if_absent, Params};
use std::path::{Path, PathBuf};

/// Remote external-reference specs consumed by the three fixed generator
/// passes. Fetched by the invoked generator, not by this tool.
const SCHEMAS_SPEC: &str = "https://doc.xk5.com/specs/externalref/schemas.yaml";
const PARAMETERS_SPEC: &str = "https://doc.xk5.com/specs/externalref/parameters.yaml";
const RESPONSES_SPEC: &str = "https://doc.xk5.com/specs/externalref/responses.yaml";

/// Module path of the generator binary installed before each run.
const OAPI_CODEGEN_MODULE: &str = "github.com/deepmap/oapi-codegen/v2/cmd/oapi-codegen@latest";

/// Sub-configuration artifacts: subdirectory, template, and config filename,
/// paired with the remote spec each one is generated against.
const SUB_CONFIGS: &[(&str, &str, &str, &str)] = &[
    (
        "schemas",
        "config-schemas.tmpl",
        "goren-config-schemas.yaml",
        SCHEMAS_SPEC,
    ),
    (
        "parameters",
        "config-parameters.tmpl",
        "goren-config-parameters.yaml",
        PARAMETERS_SPEC,
    ),
    (
        "responses",
        "config-responses.tmpl",
        "goren-config-responses.yaml",
        RESPONSES_SPEC,
    ),
];

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Package name for the public API surface.
    #[clap(long, default_value = "api")]
    pub package: String,

    /// Path or URL of the OpenAPI document to generate from.
    pub spec: String,
}

/// Arguments for the init command.
#[derive(clap::Args, Debug, Clone)]
pub struct InitArgs {
    /// Package name for the public API surface.
    #[clap(long, default_value = "api")]
    pub package: String,
}

/// Computes the generation output directory and file for a package name.
///
/// Package `api` resolves to `goren/api/gen` and `goren/api/gen/api.gen.go`
/// beneath `root`.
pub fn output_paths(root: &Path, package: &str) -> (PathBuf, PathBuf) {
    let dir = root.join("goren").join(package).join("gen");
    let file = dir.join(format!("{package}.gen.go"));
    (dir, file)
}

/// Determines the enclosing module's canonical name via `go list -m`.
fn module_name(executor: &impl CommandExecutor) -> CliResult<String> {
    let output = run_captured(executor, "go list -m", "go", &["list", "-m"])?;
    Ok(output.trim().to_string())
}

/// Executes the steady-state generation pass.
///
/// `root` is the project root the computed paths are resolved beneath; the
/// binary passes the current directory.
pub fn execute_generate(
    args: &GenerateArgs,
    root: &Path,
    executor: &impl CommandExecutor,
) -> CliResult<()> {
    let (gen_dir, output_file) = output_paths(root, &args.package);

    println!("Installing oapi-codegen...");
    run_captured(
        executor,
        "go install cmd/oapi-codegen",
        "go",
        &["install", OAPI_CODEGEN_MODULE],
    )?;

    let module = module_name(executor)?;

    if !output_file.exists() {
        ensure_dir(&gen_dir)?;
    }

    let params = Params::new(module, &args.package);
    let env = load_templates()?;

    // Write-if-absent the four configuration artifacts first, then invoke
    // the generator; regeneration never overwrites an edited config.
    let root_config = gen_dir.join("goren-config.yaml");
    write_if_absent(
        &root_config,
        &render_templates(&["config.tmpl"], &env, &params)?,
    )?;
    for &(subdir, template, filename, _spec_url) in SUB_CONFIGS {
        let config_path = gen_dir.join(subdir).join(filename);
        write_if_absent(
            &config_path,
            &render_templates(&[template], &env, &params)?,
        )?;
    }

    for &(subdir, _template, filename, spec_url) in SUB_CONFIGS {
        let config_path = gen_dir.join(subdir).join(filename);
        let config_str = config_path.to_string_lossy();
        println!("Generating {subdir} from {spec_url}...");
        run_captured(
            executor,
            spec_url,
            "oapi-codegen",
            &["-config", config_str.as_ref(), spec_url],
        )?;
    }

    let root_config_str = root_config.to_string_lossy();
    let output_str = output_file.to_string_lossy();
    println!("Generating {} from {}...", output_str, args.spec);
    run_captured(
        executor,
        &args.spec,
        "oapi-codegen",
        &[
            "-config",
            root_config_str.as_ref(),
            "-o",
            output_str.as_ref(),
            "-package",
            &params.package_name_api_gen,
            &args.spec,
        ],
    )?;

    Ok(())
}

/// Executes the one-time project bootstrap.
///
/// Writes the top-level orchestrator file one level above the generation
/// directory and the entry-point `main.go` at the project root, both
/// skip-if-exists.
pub fn execute_init(
    args: &InitArgs,
    root: &Path,
    executor: &impl CommandExecutor,
) -> CliResult<()> {
    let (gen_dir, _output_file) = output_paths(root, &args.package);
    let module = module_name(executor)?;
    let params =
        Params::new(module, &args.package).with_version(env!("CARGO_PKG_VERSION"));
    let env = load_templates()?;

    let package_dir = gen_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    write_if_absent(
        &package_dir.join("goren.go"),
        &render_templates(&["goren.tmpl"], &env, &params)?,
    )?;
    write_if_absent(
        &root.join("main.go"),
        &render_templates(&["main.tmpl"], &env, &params)?,
    )?;

    println!("Bootstrapped {} (existing files kept)", package_dir.display());
    Ok(())
}
