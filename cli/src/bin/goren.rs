#![deny(missing_docs)]

//! # goren
//!
//! OpenAPI scaffolder: bootstraps configuration files and module scaffolding
//! from text templates, then drives `oapi-codegen` against the fixed
//! external-reference specs and the user-supplied OpenAPI document.

use clap::{Parser, Subcommand};
use goren_cli::exec::ShellExecutor;
use goren_cli::openapi::{execute_generate, execute_init, GenerateArgs, InitArgs};
use std::path::Path;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI code-generation glue")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Regenerate API code from an OpenAPI document.
    Generate(GenerateArgs),
    /// One-time project bootstrap (main.go, goren.go). Never overwrites.
    Init(InitArgs),
}

fn main() {
    let cli = Cli::parse();
    let executor = ShellExecutor;
    let root = Path::new(".");

    let result = match &cli.command {
        Commands::Generate(args) => execute_generate(args, root, &executor),
        Commands::Init(args) => execute_init(args, root, &executor),
    };

    if let Err(err) = result {
        eprintln!("goren: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
