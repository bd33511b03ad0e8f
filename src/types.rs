use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Terragrunt completion spec CLI
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Delegate (terraform) spec to merge, as a .json or .toml file
    #[arg(long, global = true, value_name = "FILE")]
    pub delegate: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the completion spec
    Spec {
        #[arg(long, value_enum, default_value_t = SpecFormat::Json)]
        format: SpecFormat,
        /// Emit JSON on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Check the completion spec for structural defects
    Validate {
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// List the options and subcommands visible after a subcommand path
    Scope {
        /// Command words, e.g. `run-all --terragrunt-debug plan`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SpecFormat {
    Json,
    Toml,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    Text,
    Json,
    Table,
}
