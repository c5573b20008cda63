// NOTE: mcdiag Architecture Rationale
//
// Why a pure engine crate?
// - Rules only look at text; fetching logs belongs to whoever has the network
// - The same evaluation runs in this CLI, in bots, or in tests, with no setup
// - Trade-off: callers must decode the log themselves before calling in
//
// Why TOML for custom rules?
// - Scopes (one per community/server) are edited by hand as often as by command
// - An array of { label, trigger } tables keeps insertion order, which is display order

mod args;
mod commands;
pub mod config;
pub mod error;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, CustomCommand};
pub use commands::run;
