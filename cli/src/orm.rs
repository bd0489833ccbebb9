#![deny(missing_docs)]

//! # ORM Scaffold Orchestrator
//!
//! Resolves configuration through service discovery, checks the database
//! endpoint, then drives the external ORM generator: every table or a named
//! subset, basic CRUD plus the custom querier interface. Each step either
//! succeeds or the run terminates; there is no partial-failure recovery.

use crate::config::Config;
use crate::db::Database;
use crate::error::{CliError, CliResult};
use crate::exec::CommandExecutor;
use crate::generator::{GentoolGenerator, OrmGenerator};
use std::path::PathBuf;

/// Arguments for the ORM scaffolder.
#[derive(clap::Parser, Debug, Clone)]
#[clap(name = "goren-orm", about = "Generate ORM models and query code from a live schema")]
pub struct OrmArgs {
    /// Output path for the generated query package.
    #[clap(short = 'o', long = "out", default_value = "./internal/query")]
    pub out_path: PathBuf,

    /// Environment name.
    #[clap(long, default_value = "sdev0")]
    pub env: String,

    /// Application name.
    #[clap(long, default_value = "")]
    pub name: String,

    /// Consul host:port; `${profile}` expands to the environment name.
    #[clap(long, default_value = "i-consul-${profile}.xk5.com:8500")]
    pub consul: String,

    /// Table names, comma separated (e.g. tb_member,tb_character).
    /// Empty generates a model for every table.
    #[clap(long, default_value = "")]
    pub tables: String,
}

/// Applies the table selection to the generation plan: an empty list
/// requests full-schema enumeration, otherwise one model per table, left to
/// right.
pub fn apply_table_plan(tables: &str, generator: &mut impl OrmGenerator) -> CliResult<()> {
    if tables.is_empty() {
        generator.generate_all_tables()?;
    } else {
        for table in tables.split(',') {
            generator.generate_model(table.trim())?;
        }
    }
    Ok(())
}

/// Runs the full generation plan: table selection, basic CRUD, the querier
/// interface, then execution.
pub fn run_plan(tables: &str, generator: &mut impl OrmGenerator) -> CliResult<()> {
    apply_table_plan(tables, generator)?;
    generator.apply_basic();
    generator.apply_querier();
    generator.execute()
}

/// Executes the ORM scaffold end to end.
///
/// The application name is validated before any configuration setup is
/// attempted; an empty name terminates the run.
pub fn execute(args: &OrmArgs, executor: &impl CommandExecutor) -> CliResult<()> {
    if args.name.is_empty() {
        return Err(CliError::General("invalid name".into()));
    }

    let config = Config {
        env: args.env.clone(),
        name: args.name.clone(),
        consul: args.consul.clone(),
    };
    let resolved = config.setup()?;

    let database = Database::parse(&resolved.database_url)?;
    database.check_ready()?;

    let mut generator = GentoolGenerator::new(executor, args.out_path.clone(), database);
    run_plan(&args.tables, &mut generator)
}
