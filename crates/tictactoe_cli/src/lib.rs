//! Terminal host for the tic-tac-toe engine.
//!
//! Supplies what the engine leaves to its host: turn order, input mapping,
//! configuration and persistence of the state string.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod host;
mod save;

pub use cli::{Cli, Command};
pub use config::{ConfigError, HostConfig};
pub use host::{Host, next_player, render};
pub use save::{SaveError, SaveFile};
