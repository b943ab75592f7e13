//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use clap::ValueEnum;

use crate::models::Evaluation;

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render an evaluation using the renderer for this format.
    pub fn render(&self, evaluation: &Evaluation, precision: Option<u16>) -> String {
        match self {
            OutputFormat::Terminal => terminal::TerminalRenderer { precision }.render(evaluation),
            OutputFormat::Json => json::JsonRenderer { precision }.render(evaluation),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: '{other}'. Supported: terminal, json")),
        }
    }
}

/// Trait for rendering an evaluation to an output format.
pub trait OutputRenderer {
    /// Render the evaluation to a string, including the trailing newline.
    fn render(&self, evaluation: &Evaluation) -> String;
}

/// Format a numeric result for display.
///
/// With `precision`, prints that many decimals. Otherwise integral values
/// keep one decimal (`5.0`) and everything else uses the shortest
/// representation that round-trips.
pub fn format_value(value: f64, precision: Option<u16>) -> String {
    if let Some(p) = precision {
        let p = usize::from(p);
        return format!("{value:.p$}");
    }
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Round `value` to `precision` decimals, exactly as [`format_value`] prints it.
pub fn round_value(value: f64, precision: u16) -> f64 {
    format_value(value, Some(precision))
        .parse()
        .unwrap_or(value)
}
