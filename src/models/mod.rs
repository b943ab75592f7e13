//! Shared types used across all modules.
//!
//! This module defines the operation catalogue, operand shapes, the
//! evaluation record, and the error types. Other modules import from
//! here rather than reaching into each other's internals.

pub mod error;
pub mod evaluation;
pub mod operation;

pub use error::{CalcError, DomainError};
pub use evaluation::{Evaluation, Outcome};
pub use operation::{Arity, Operands, Operation};
