//! scicalc — interactive scientific calculator.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use scicalc::config::{CliOverrides, Config};
use scicalc::constants;
use scicalc::env::Env;
use scicalc::logging;
use scicalc::session::{self, Session, SessionError};

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command, EvalArgs};

fn main() {
    if let Err(err) = run() {
        match err.downcast_ref::<SessionError>() {
            // Input mistakes get the plain message, like a domain error would.
            Some(input) if input.is_user_input() => println!("{input}"),
            _ => eprintln!("Error: {err:#}"),
        }
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&Env::real(), &CliOverrides::from(&cli));
    if !config.color {
        colored::control::set_override(false);
    }
    logging::init(&config, cli.verbose);

    match cli.command {
        None => run_interactive(&config),
        Some(Command::Eval(args)) => run_eval(args, &config),
        Some(Command::List) => run_list(),
        Some(Command::Version) => run_version(),
    }
}

/// Prompt for an operation and its operands, then print the result.
fn run_interactive(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config);
    let evaluation = session.run()?;
    tracing::debug!(domain_error = evaluation.is_domain_error(), "session finished");
    Ok(())
}

/// Evaluate one operation from command-line arguments.
fn run_eval(args: EvalArgs, config: &Config) -> Result<()> {
    let values = args
        .operands
        .iter()
        .map(|raw| session::parse_operand(raw))
        .collect::<Result<Vec<f64>, SessionError>>()?;

    let evaluation = session::evaluate_values(args.operation, &values)?;
    let rendered = config.format.render(&evaluation, config.precision);

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write result")?;
    stdout.flush().context("failed to write result")?;
    Ok(())
}

/// Print the operation menu.
fn run_list() -> Result<()> {
    let mut stdout = io::stdout().lock();
    session::write_menu(&mut stdout).context("failed to write menu")?;
    Ok(())
}

/// Print version information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    Ok(())
}
