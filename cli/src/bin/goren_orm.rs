#![deny(missing_docs)]

//! # goren-orm
//!
//! ORM scaffolder: resolves the database endpoint through service-discovery
//! configuration, then drives the external ORM generator against the live
//! schema (every table, or a named subset).

use clap::Parser;
use goren_cli::exec::ShellExecutor;
use goren_cli::orm::{execute, OrmArgs};

fn main() {
    let args = OrmArgs::parse();
    let executor = ShellExecutor;

    if let Err(err) = execute(&args, &executor) {
        eprintln!("goren-orm: {err}");
        std::process::exit(1);
    }
}
