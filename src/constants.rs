//! App-wide constants.
//!
//! Centralises the tool name, prompts, user-facing messages, and
//! environment variable names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "scicalc";

/// Crate version, taken from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ── Interactive prompts ─────────────────────────────────────────────

pub const MENU_HEADER: &str = "Select operation:";
pub const PROMPT_CHOICE: &str = "Enter choice (1/2/3/4/5/6/7/8/9): ";
pub const PROMPT_FIRST: &str = "Enter first number: ";
pub const PROMPT_SECOND: &str = "Enter second number: ";
pub const PROMPT_SINGLE: &str = "Enter number: ";

// ── User-facing input error messages ────────────────────────────────

pub const MSG_INVALID_SELECTOR: &str = "Invalid input. Please choose a valid operation.";
pub const MSG_NON_NUMERIC: &str = "Invalid input. Please enter numeric values.";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_FORMAT: &str = "SCICALC_FORMAT";
pub const ENV_PRECISION: &str = "SCICALC_PRECISION";
pub const ENV_LOG: &str = "SCICALC_LOG";
pub const ENV_NO_COLOR: &str = "NO_COLOR";
