//! Configuration loading and layering.
//!
//! Handles environment variable resolution and CLI flag merging with
//! proper priority ordering. There are no configuration files.

pub mod loader;

pub use loader::{CliOverrides, Config};
