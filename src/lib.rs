//! scicalc — interactive scientific calculator (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod logging;
pub mod models;
pub mod ops;
pub mod output;
pub mod session;
