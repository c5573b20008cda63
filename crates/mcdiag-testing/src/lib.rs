//! Testing infrastructure for mcdiag integration tests.
//!
//! - `TestWorld`: isolated data directory plus a configured `mcdiag` command
//! - `assertions`: checks over the JSON output of `--format json`
//! - `fixtures`: sample launcher logs shared with the engine tests

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
