//! Terminal renderer: `Result: <value>` or `Result: Error! <message>`.

use colored::Colorize;

use crate::models::Evaluation;
use crate::output::{OutputRenderer, format_value};

/// Terminal output renderer with colored text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalRenderer {
    /// Fixed number of decimals, or `None` for the shortest representation.
    pub precision: Option<u16>,
}

impl OutputRenderer for TerminalRenderer {
    fn render(&self, evaluation: &Evaluation) -> String {
        match &evaluation.outcome {
            Ok(value) => format!(
                "{} {}\n",
                "Result:".bold(),
                format_value(*value, self.precision).green()
            ),
            Err(e) => format!(
                "{} {} {}\n",
                "Result:".bold(),
                "Error!".red().bold(),
                e.to_string().red()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DomainError, Operands, Operation};

    fn eval(operation: Operation, operands: Operands, outcome: Result<f64, DomainError>) -> Evaluation {
        Evaluation {
            operation,
            operands,
            outcome,
        }
    }

    #[test]
    fn render_result() {
        let renderer = TerminalRenderer::default();
        let output = renderer.render(&eval(Operation::Add, Operands::Binary(2.0, 3.0), Ok(5.0)));
        // Check content is present (may be wrapped in ANSI color codes)
        assert!(output.contains("Result:"));
        assert!(output.contains("5.0"));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn render_domain_error() {
        let renderer = TerminalRenderer::default();
        let output = renderer.render(&eval(
            Operation::Divide,
            Operands::Binary(10.0, 0.0),
            Err(DomainError::DivisionByZero),
        ));
        assert!(output.contains("Result:"));
        assert!(output.contains("Error!"));
        assert!(output.contains("Division by zero."));
        assert!(output.find("Result:") < output.find("Error!"));
    }

    #[test]
    fn render_with_precision() {
        let renderer = TerminalRenderer { precision: Some(3) };
        let output = renderer.render(&eval(
            Operation::Divide,
            Operands::Binary(2.0, 3.0),
            Ok(2.0 / 3.0),
        ));
        assert!(output.contains("0.667"));
    }
}
