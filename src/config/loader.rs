//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. Built-in defaults

use crate::env::Env;
use crate::output::OutputFormat;

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How evaluation results are printed.
    pub format: OutputFormat,
    /// Fixed number of decimals for printed results.
    pub precision: Option<u16>,
    /// Whether terminal output is colorized.
    pub color: bool,
    /// Explicit `tracing` filter directive, overriding verbosity flags.
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            precision: None,
            color: true,
            log_filter: None,
        }
    }
}

/// Values supplied on the command line. `None`/`false` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub format: Option<OutputFormat>,
    pub precision: Option<u16>,
    pub no_color: bool,
}

impl Config {
    /// Load configuration from defaults and the environment, then apply CLI flags.
    pub fn load(env: &Env, cli: &CliOverrides) -> Self {
        let mut config = Config::default();
        config.apply_env_vars(env);
        config.apply_cli(cli);
        config
    }

    /// Apply environment variable overrides. Invalid values are ignored with a warning.
    fn apply_env_vars(&mut self, env: &Env) {
        match env.format() {
            Ok(Some(format)) => self.format = format,
            Ok(None) => {}
            Err(e) => eprintln!("Warning: {e}"),
        }
        match env.precision() {
            Ok(Some(p)) => self.precision = Some(p),
            Ok(None) => {}
            Err(e) => eprintln!("Warning: {e}"),
        }
        if env.no_color() {
            self.color = false;
        }
        if let Some(filter) = env.log_filter() {
            self.log_filter = Some(filter.to_string());
        }
    }

    fn apply_cli(&mut self, cli: &CliOverrides) {
        if let Some(format) = cli.format {
            self.format = format;
        }
        if cli.precision.is_some() {
            self.precision = cli.precision;
        }
        if cli.no_color {
            self.color = false;
        }
    }
}
