//! Command-line interface for the tic-tac-toe host.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with saved state", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a hot-seat game, resuming the saved board
    Play {
        /// Start from this state string instead of the save file
        #[arg(long)]
        state: Option<String>,

        /// Ignore the save file and start an empty board
        #[arg(long, conflicts_with = "state")]
        fresh: bool,
    },

    /// Print the board and status for a state string
    Show {
        /// 9-character state string, e.g. 120010002
        state: String,
    },

    /// Validate a state string
    Check {
        /// 9-character state string
        state: String,
    },
}
