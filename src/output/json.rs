//! JSON output renderer.
//!
//! Outputs `{"operation": ..., "operands": [...], "result": ..., "error": ...}`.

use crate::models::Evaluation;
use crate::output::{OutputRenderer, round_value};

/// JSON output renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    /// Decimals kept in `result`, or `None` to emit the full value.
    pub precision: Option<u16>,
}

impl OutputRenderer for JsonRenderer {
    fn render(&self, evaluation: &Evaluation) -> String {
        let mut evaluation = evaluation.clone();
        if let (Some(p), Ok(value)) = (self.precision, evaluation.outcome) {
            evaluation.outcome = Ok(round_value(value, p));
        }
        let mut out =
            serde_json::to_string_pretty(&evaluation).unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DomainError, Operands, Operation};

    #[test]
    fn render_json() {
        let evaluation = Evaluation {
            operation: Operation::Power,
            operands: Operands::Binary(2.0, 10.0),
            outcome: Ok(1024.0),
        };

        let output = JsonRenderer::default().render(&evaluation);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["operation"], "power");
        assert_eq!(parsed["operands"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["result"], 1024.0);
        assert!(parsed["error"].is_null());
    }

    #[test]
    fn render_json_domain_error() {
        let evaluation = Evaluation {
            operation: Operation::Logarithm,
            operands: Operands::Unary(0.0),
            outcome: Err(DomainError::NonPositiveLogarithm),
        };
        let output = JsonRenderer { precision: Some(2) }.render(&evaluation);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed["result"].is_null());
        assert_eq!(parsed["error"], "Logarithm undefined for non-positive values.");
    }

    #[test]
    fn render_json_rounds_result_only() {
        let evaluation = Evaluation {
            operation: Operation::Divide,
            operands: Operands::Binary(2.0, 3.0),
            outcome: Ok(2.0 / 3.0),
        };
        let output = JsonRenderer { precision: Some(3) }.render(&evaluation);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["result"], 0.667);
        assert_eq!(parsed["operands"], serde_json::json!([2.0, 3.0]));
    }
}
