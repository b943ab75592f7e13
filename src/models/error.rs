//! Error types for operation dispatch.

use thiserror::Error;

use super::operation::{Arity, Operation};

/// An input outside an operation's mathematical domain.
///
/// Domain errors are an ordinary evaluation outcome: they are rendered to
/// the user in place of a number and never abort the program.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainError {
    #[error("Division by zero.")]
    DivisionByZero,

    #[error("Cannot compute square root of negative number.")]
    NegativeSquareRoot,

    #[error("Logarithm undefined for non-positive values.")]
    NonPositiveLogarithm,
}

/// Errors from [`Operation::apply`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{operation} takes {expected} operand(s), got {got}")]
    Arity {
        operation: Operation,
        expected: usize,
        got: usize,
    },
}

impl CalcError {
    pub(crate) fn arity(operation: Operation, got: usize) -> Self {
        let expected = match operation.arity() {
            Arity::Unary => 1,
            Arity::Binary => 2,
        };
        CalcError::Arity {
            operation,
            expected,
            got,
        }
    }
}
