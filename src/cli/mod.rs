//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use scicalc::config::CliOverrides;

use args::Cli;

impl From<&Cli> for CliOverrides {
    fn from(cli: &Cli) -> Self {
        CliOverrides {
            format: cli.format,
            precision: cli.precision,
            no_color: cli.no_color,
        }
    }
}
