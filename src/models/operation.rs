//! The operation catalogue and selector mapping.

use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use super::error::CalcError;
use super::evaluation::Evaluation;
use crate::ops;

/// Number of operands an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Unary,
    Binary,
}

/// Operands for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    Unary(f64),
    Binary(f64, f64),
}

impl Operands {
    /// Build operands from a slice, if it holds one or two values.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        match *values {
            [x] => Some(Operands::Unary(x)),
            [x, y] => Some(Operands::Binary(x, y)),
            _ => None,
        }
    }

    pub fn count(self) -> usize {
        match self {
            Operands::Unary(_) => 1,
            Operands::Binary(..) => 2,
        }
    }

    pub fn to_vec(self) -> Vec<f64> {
        match self {
            Operands::Unary(x) => vec![x],
            Operands::Binary(x, y) => vec![x, y],
        }
    }
}

/// One of the nine calculator operations, in menu order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
    Sine,
    Cosine,
    Logarithm,
}

impl Operation {
    /// All operations in menu order.
    pub fn all() -> impl Iterator<Item = Operation> {
        Operation::iter()
    }

    /// Canonical snake_case name, e.g. `square_root`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Menu label, e.g. `Square Root`.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
            Operation::Power => "Power",
            Operation::SquareRoot => "Square Root",
            Operation::Sine => "Sine",
            Operation::Cosine => "Cosine",
            Operation::Logarithm => "Logarithm",
        }
    }

    /// Menu number, 1 through 9.
    pub fn selector(self) -> u8 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
            Operation::Divide => 4,
            Operation::Power => 5,
            Operation::SquareRoot => 6,
            Operation::Sine => 7,
            Operation::Cosine => 8,
            Operation::Logarithm => 9,
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power => Arity::Binary,
            Operation::SquareRoot | Operation::Sine | Operation::Cosine | Operation::Logarithm => {
                Arity::Unary
            }
        }
    }

    /// Resolve a menu selector (`"1"`..`"9"`). Surrounding whitespace is ignored,
    /// but the digit must be written exactly: `"01"` and `"+1"` are not selectors.
    pub fn from_selector(input: &str) -> Option<Self> {
        let wanted = input.trim();
        Operation::all().find(|op| op.selector().to_string() == wanted)
    }

    /// Compute the result for the given operands.
    ///
    /// Returns [`CalcError::Arity`] if the operand count does not match the
    /// operation, and [`CalcError::Domain`] for inputs outside its domain.
    pub fn apply(self, operands: Operands) -> Result<f64, CalcError> {
        let value = match (self, operands) {
            (Operation::Add, Operands::Binary(x, y)) => ops::add(x, y),
            (Operation::Subtract, Operands::Binary(x, y)) => ops::subtract(x, y),
            (Operation::Multiply, Operands::Binary(x, y)) => ops::multiply(x, y),
            (Operation::Divide, Operands::Binary(x, y)) => ops::divide(x, y)?,
            (Operation::Power, Operands::Binary(x, y)) => ops::power(x, y),
            (Operation::SquareRoot, Operands::Unary(x)) => ops::square_root(x)?,
            (Operation::Sine, Operands::Unary(x)) => ops::sine(x),
            (Operation::Cosine, Operands::Unary(x)) => ops::cosine(x),
            (Operation::Logarithm, Operands::Unary(x)) => ops::logarithm(x)?,
            (op, operands) => return Err(CalcError::arity(op, operands.count())),
        };
        Ok(value)
    }

    /// Apply the operation and package the outcome as an [`Evaluation`].
    ///
    /// Domain errors become the evaluation's outcome; only an arity
    /// mismatch is returned as an error.
    pub fn evaluate(self, operands: Operands) -> Result<Evaluation, CalcError> {
        tracing::debug!(operation = self.name(), ?operands, "evaluating");
        let outcome = match self.apply(operands) {
            Ok(value) => Ok(value),
            Err(CalcError::Domain(e)) => Err(e),
            Err(e) => return Err(e),
        };
        Ok(Evaluation {
            operation: self,
            operands,
            outcome,
        })
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    /// Accepts a canonical name (case-insensitive, `-` or `_`) or a menu selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(op) = Operation::from_selector(s) {
            return Ok(op);
        }
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Operation::all()
            .find(|op| op.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<_> = Operation::all().map(Operation::name).collect();
                format!(
                    "unknown operation: '{s}'. Supported: {} (or 1-9)",
                    names.join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DomainError;

    #[test]
    fn menu_order_matches_selectors() {
        let selectors: Vec<u8> = Operation::all().map(Operation::selector).collect();
        assert_eq!(selectors, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn binary_and_unary_split() {
        for op in Operation::all() {
            let expected = if op.selector() <= 5 {
                Arity::Binary
            } else {
                Arity::Unary
            };
            assert_eq!(op.arity(), expected, "{op}");
        }
    }

    #[test]
    fn names_are_snake_case() {
        assert_eq!(Operation::SquareRoot.name(), "square_root");
        assert_eq!(Operation::Logarithm.to_string(), "logarithm");
        assert_eq!(Operation::SquareRoot.label(), "Square Root");
    }

    #[test]
    fn from_selector_accepts_menu_numbers() {
        assert_eq!(Operation::from_selector("1"), Some(Operation::Add));
        assert_eq!(Operation::from_selector(" 6\n"), Some(Operation::SquareRoot));
        assert_eq!(Operation::from_selector("9"), Some(Operation::Logarithm));
    }

    #[test]
    fn from_selector_rejects_everything_else() {
        for input in ["0", "10", "", "add", "-1", "1.0", "x", "01", "+1", "007", "+9"] {
            assert_eq!(Operation::from_selector(input), None, "{input:?}");
        }
    }

    #[test]
    fn from_str_accepts_names_and_selectors() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("Square-Root".parse::<Operation>(), Ok(Operation::SquareRoot));
        assert_eq!("square_root".parse::<Operation>(), Ok(Operation::SquareRoot));
        assert_eq!("8".parse::<Operation>(), Ok(Operation::Cosine));
        let err = "modulo".parse::<Operation>().unwrap_err();
        assert!(err.contains("unknown operation"));
        assert!(err.contains("logarithm"));
    }

    #[test]
    fn apply_dispatches() {
        assert_eq!(Operation::Add.apply(Operands::Binary(2.0, 3.0)), Ok(5.0));
        assert_eq!(Operation::Power.apply(Operands::Binary(2.0, -1.0)), Ok(0.5));
        assert_eq!(Operation::Sine.apply(Operands::Unary(0.0)), Ok(0.0));
        assert_eq!(Operation::Cosine.apply(Operands::Unary(0.0)), Ok(1.0));
        assert_eq!(Operation::Logarithm.apply(Operands::Unary(1.0)), Ok(0.0));
    }

    #[test]
    fn apply_reports_domain_errors() {
        assert_eq!(
            Operation::Divide.apply(Operands::Binary(10.0, 0.0)),
            Err(CalcError::Domain(DomainError::DivisionByZero))
        );
        assert_eq!(
            Operation::SquareRoot.apply(Operands::Unary(-4.0)),
            Err(CalcError::Domain(DomainError::NegativeSquareRoot))
        );
    }

    #[test]
    fn apply_rejects_wrong_arity() {
        let err = Operation::Add.apply(Operands::Unary(1.0)).unwrap_err();
        assert!(matches!(err, CalcError::Arity { expected: 2, got: 1, .. }));
        let err = Operation::Sine.apply(Operands::Binary(1.0, 2.0)).unwrap_err();
        assert!(matches!(err, CalcError::Arity { expected: 1, got: 2, .. }));
    }

    #[test]
    fn evaluate_keeps_domain_error_as_outcome() {
        let eval = Operation::Divide
            .evaluate(Operands::Binary(0.0, 0.0))
            .unwrap();
        assert_eq!(eval.operation, Operation::Divide);
        assert_eq!(eval.outcome, Err(DomainError::DivisionByZero));
    }

    #[test]
    fn operands_from_slice() {
        assert_eq!(Operands::from_slice(&[1.0]), Some(Operands::Unary(1.0)));
        assert_eq!(Operands::from_slice(&[1.0, 2.0]), Some(Operands::Binary(1.0, 2.0)));
        assert_eq!(Operands::from_slice(&[]), None);
        assert_eq!(Operands::from_slice(&[1.0, 2.0, 3.0]), None);
        assert_eq!(Operands::Binary(4.0, 5.0).to_vec(), vec![4.0, 5.0]);
        assert_eq!(Operands::Unary(4.0).count(), 1);
    }

    #[test]
    fn evaluate_propagates_arity_errors() {
        assert!(Operation::Logarithm.evaluate(Operands::Binary(1.0, 2.0)).is_err());
    }
}
