//! FHIR tabular binder CLI.

use clap::Parser;
use fhir_cli::logging::init_logging;

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{load_registry, run_bind, run_describe, run_relations, run_resources};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let registry = match load_registry(cli.definitions.as_deref()) {
        Ok(registry) => registry,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let outcome = match cli.command {
        Command::Resources => run_resources(&registry),
        Command::Describe(args) => run_describe(&registry, &args),
        Command::Bind(args) => run_bind(&registry, &args),
        Command::Relations(args) => run_relations(&registry, &args),
    };
    let exit_code = match outcome {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
