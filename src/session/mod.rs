//! Interactive prompt/dispatch/print shell.
//!
//! A [`Session`] prints the operation menu, reads a selector and the right
//! number of operands, evaluates once, and writes the rendered result.
//! Input problems are caught here, before any operation runs. Reader and
//! writer are generic so tests can drive a session from memory.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, trace};

use crate::config::Config;
use crate::constants::{
    MENU_HEADER, MSG_INVALID_SELECTOR, MSG_NON_NUMERIC, PROMPT_CHOICE, PROMPT_FIRST,
    PROMPT_SECOND, PROMPT_SINGLE,
};
use crate::models::{Arity, CalcError, Evaluation, Operands, Operation};
use crate::output::OutputFormat;

/// Errors that stop a session before or during evaluation.
///
/// Domain errors are not here: they are part of a successful [`Evaluation`].
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("{}", MSG_INVALID_SELECTOR)]
    InvalidSelector(String),

    #[error("{}", MSG_NON_NUMERIC)]
    NonNumeric(String),

    #[error("Invalid input. Unexpected end of input.")]
    UnexpectedEof,

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Calc(#[from] CalcError),
}

impl SessionError {
    /// `true` for errors caused by what the user typed.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            SessionError::InvalidSelector(_)
                | SessionError::NonNumeric(_)
                | SessionError::UnexpectedEof
                | SessionError::Calc(CalcError::Arity { .. })
        )
    }
}

/// Write the numbered operation menu.
pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{MENU_HEADER}")?;
    for op in Operation::all() {
        writeln!(out, "{}. {}", op.selector(), op.label())?;
    }
    Ok(())
}

/// Parse one operand. Surrounding whitespace is ignored.
pub fn parse_operand(raw: &str) -> Result<f64, SessionError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| SessionError::NonNumeric(trimmed.to_string()))
}

/// Evaluate an operation against already-parsed operand values.
///
/// Fails with [`CalcError::Arity`] when the count does not fit the operation.
pub fn evaluate_values(operation: Operation, values: &[f64]) -> Result<Evaluation, SessionError> {
    let operands = Operands::from_slice(values)
        .ok_or_else(|| CalcError::arity(operation, values.len()))?;
    Ok(operation.evaluate(operands)?)
}

/// A single interactive evaluation over a reader and a writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    format: OutputFormat,
    precision: Option<u16>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            input,
            output,
            format: config.format,
            precision: config.precision,
        }
    }

    /// Run the full menu → selector → operands → result sequence.
    ///
    /// Returns the evaluation that was printed. Input errors are returned
    /// without evaluating anything.
    pub fn run(&mut self) -> Result<Evaluation, SessionError> {
        write_menu(&mut self.output)?;
        let operation = self.read_operation()?;
        let operands = self.read_operands(operation)?;
        let evaluation = operation.evaluate(operands)?;
        let rendered = self.format.render(&evaluation, self.precision);
        self.output.write_all(rendered.as_bytes())?;
        self.output.flush()?;
        Ok(evaluation)
    }

    /// Prompt for and resolve the menu selector.
    pub fn read_operation(&mut self) -> Result<Operation, SessionError> {
        let raw = self.prompt(PROMPT_CHOICE)?;
        let operation = Operation::from_selector(&raw)
            .ok_or_else(|| SessionError::InvalidSelector(raw.trim().to_string()))?;
        debug!(selector = raw.trim(), %operation, "operation selected");
        Ok(operation)
    }

    /// Prompt for one or two operands, depending on the operation's arity.
    pub fn read_operands(&mut self, operation: Operation) -> Result<Operands, SessionError> {
        let operands = match operation.arity() {
            Arity::Binary => {
                let x = parse_operand(&self.prompt(PROMPT_FIRST)?)?;
                let y = parse_operand(&self.prompt(PROMPT_SECOND)?)?;
                Operands::Binary(x, y)
            }
            Arity::Unary => Operands::Unary(parse_operand(&self.prompt(PROMPT_SINGLE)?)?),
        };
        debug!(?operands, "operands read");
        Ok(operands)
    }

    /// Consume the session and return the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::UnexpectedEof);
        }
        trace!(prompt = text.trim_end(), line = line.trim_end(), "read line");
        Ok(line)
    }
}
