//! Clap argument types.

use clap::{ArgAction, Parser};

use scicalc::models::Operation;
use scicalc::output::OutputFormat;

/// Interactive command-line scientific calculator.
///
/// Without a subcommand, shows the operation menu and prompts for input.
#[derive(Parser, Debug)]
#[command(name = "scicalc", version = scicalc::constants::VERSION)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Print results with this many decimal places (0-65535).
    #[arg(long, global = true, value_parser = clap::value_parser!(u16))]
    pub precision: Option<u16>,

    /// Disable colored output.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Increase log verbosity on stderr (-v debug, -vv trace).
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Evaluate one operation without prompting.
    Eval(EvalArgs),

    /// List the available operations.
    List,

    /// Print version information.
    Version,
}

/// Arguments for the `eval` subcommand.
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Operation name (e.g. `divide`, `square-root`) or menu number (1-9).
    pub operation: Operation,

    /// One operand for unary operations, two for binary ones.
    #[arg(num_args = 1..=2, required = true, allow_negative_numbers = true)]
    pub operands: Vec<String>,
}
