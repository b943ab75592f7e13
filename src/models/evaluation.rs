//! The record of a single evaluation.

use serde::{Serialize, Serializer};

use super::error::DomainError;
use super::operation::{Operands, Operation};

/// Either the numeric result or the domain error that replaced it.
pub type Outcome = Result<f64, DomainError>;

/// An operation, the operands it was given, and what came out.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub operation: Operation,
    pub operands: Operands,
    pub outcome: Outcome,
}

impl Evaluation {
    pub fn is_domain_error(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Flat wire shape: `{"operation", "operands", "result", "error"}`.
#[derive(Serialize)]
struct EvaluationRecord {
    operation: Operation,
    operands: Vec<f64>,
    result: Option<f64>,
    error: Option<String>,
}

impl Serialize for Evaluation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (result, error) = match &self.outcome {
            Ok(value) => (Some(*value), None),
            Err(e) => (None, Some(e.to_string())),
        };
        EvaluationRecord {
            operation: self.operation,
            operands: self.operands.to_vec(),
            result,
            error,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_success() {
        let eval = Evaluation {
            operation: Operation::Add,
            operands: Operands::Binary(2.0, 3.0),
            outcome: Ok(5.0),
        };
        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(json["operation"], "add");
        assert_eq!(json["operands"], serde_json::json!([2.0, 3.0]));
        assert_eq!(json["result"], 5.0);
        assert!(json["error"].is_null());
        assert!(!eval.is_domain_error());
    }

    #[test]
    fn serializes_domain_error() {
        let eval = Evaluation {
            operation: Operation::SquareRoot,
            operands: Operands::Unary(-4.0),
            outcome: Err(DomainError::NegativeSquareRoot),
        };
        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(json["operation"], "square_root");
        assert!(json["result"].is_null());
        assert_eq!(
            json["error"],
            "Cannot compute square root of negative number."
        );
        assert!(eval.is_domain_error());
    }

    #[test]
    fn non_finite_result_serializes_as_null() {
        let eval = Evaluation {
            operation: Operation::Power,
            operands: Operands::Binary(-8.0, 0.5),
            outcome: Ok(f64::NAN),
        };
        let json = serde_json::to_value(&eval).unwrap();
        assert!(json["result"].is_null());
        assert!(json["error"].is_null());
    }
}
