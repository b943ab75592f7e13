//! Calculator settings read from the process environment.
//!
//! [`Env`] captures the `SCICALC_*` and `NO_COLOR` variables once and hands
//! them out as typed values, so [`Config`](crate::config::Config) never
//! parses raw strings itself. Tests build one from a plain list of pairs.

use thiserror::Error;

use crate::constants::{ENV_FORMAT, ENV_LOG, ENV_NO_COLOR, ENV_PRECISION};
use crate::output::OutputFormat;

/// A variable that is set but does not hold a usable value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("ignoring invalid {name} value: {value}")]
pub struct InvalidVar {
    pub name: &'static str,
    pub value: String,
}

/// Snapshot of the environment variables the calculator understands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    format: Option<String>,
    precision: Option<String>,
    log: Option<String>,
    no_color: bool,
}

impl Env {
    /// Read the real process environment.
    pub fn real() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any lookup function, e.g. a fixed list in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            format: lookup(ENV_FORMAT),
            precision: lookup(ENV_PRECISION),
            log: lookup(ENV_LOG),
            no_color: lookup(ENV_NO_COLOR).is_some(),
        }
    }

    /// Build from key-value pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let pairs: Vec<_> = pairs.into_iter().collect();
        Self::from_lookup(|name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        })
    }

    /// `SCICALC_FORMAT`: `terminal` or `json`.
    pub fn format(&self) -> Result<Option<OutputFormat>, InvalidVar> {
        self.format
            .as_deref()
            .map(|raw| raw.parse().map_err(|_| invalid(ENV_FORMAT, raw)))
            .transpose()
    }

    /// `SCICALC_PRECISION`: decimals, 0 through 65535.
    pub fn precision(&self) -> Result<Option<u16>, InvalidVar> {
        self.precision
            .as_deref()
            .map(|raw| raw.trim().parse().map_err(|_| invalid(ENV_PRECISION, raw)))
            .transpose()
    }

    /// `SCICALC_LOG`: a `tracing` filter directive. Blank counts as unset.
    pub fn log_filter(&self) -> Option<&str> {
        self.log.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// `NO_COLOR`: any value, even empty, turns colour off.
    pub fn no_color(&self) -> bool {
        self.no_color
    }
}

fn invalid(name: &'static str, raw: &str) -> InvalidVar {
    InvalidVar {
        name,
        value: raw.to_string(),
    }
}
