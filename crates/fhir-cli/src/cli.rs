//! CLI argument definitions for the FHIR tabular binder.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use fhir_cli::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "fhir-tab",
    version,
    about = "FHIR tabular binder - bind flat extracts to typed FHIR records",
    long_about = "Bind column-oriented extracts (CSV) to typed FHIR records.\n\n\
                  Validates coded fields against FHIR R4 value sets, flattens\n\
                  records back to tabular output, and reports the relationship\n\
                  declarations usable for graph reconstruction."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Load a generated definitions document instead of the embedded R4 subset.
    #[arg(long = "definitions", value_name = "PATH", global = true)]
    pub definitions: Option<PathBuf>,
}

impl Cli {
    /// Resolve the logging configuration implied by the global flags.
    ///
    /// An explicit `-v`/`-q` takes precedence over `RUST_LOG`; without one
    /// the environment may override the default level. ANSI follows the
    /// color choice, except that auto mode disables it when logs go to a
    /// file or stderr is not a terminal.
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            use_env_filter: !self.verbosity.is_present(),
            format: match self.log_format {
                LogFormatArg::Pretty => LogFormat::Pretty,
                LogFormatArg::Compact => LogFormat::Compact,
                LogFormatArg::Json => LogFormat::Json,
            },
            with_ansi: match self.color.color {
                ColorChoice::Always => true,
                ColorChoice::Never => false,
                ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
            },
            log_file: self.log_file.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List the resource types declared by the registry.
    Resources,

    /// Show one type's field declarations and relationship table.
    Describe(DescribeArgs),

    /// Bind a CSV extract to a typed record and validate coded fields.
    Bind(BindArgs),

    /// Show the relationship declarations eligible against a set of loaded types.
    Relations(RelationsArgs),
}

#[derive(Parser)]
pub struct DescribeArgs {
    /// Resource type name (e.g. Patient).
    #[arg(value_name = "RESOURCE")]
    pub resource: String,
}

#[derive(Parser)]
pub struct BindArgs {
    /// Path to the CSV extract.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Resource type to bind against.
    #[arg(long = "resource", value_name = "RESOURCE")]
    pub resource: String,

    /// Write the flattened record back out as CSV (round-trip check).
    #[arg(long = "flatten-out", value_name = "PATH")]
    pub flatten_out: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RelationsArgs {
    /// Resource type whose relationships to resolve.
    #[arg(value_name = "RESOURCE")]
    pub resource: String,

    /// Types present in the working universe (repeat or comma-separate).
    #[arg(long = "available", value_name = "TYPE", value_delimiter = ',')]
    pub available: Vec<String>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
