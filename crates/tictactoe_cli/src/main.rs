//! Tic-tac-toe - terminal host
//!
//! Plays hot-seat games and inspects state strings.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe_cli::{Cli, Command, Host, HostConfig, render};
use tictactoe_engine::{StateString, TicTacToe};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = HostConfig::load_or_default(&cli.config)?;
    init_tracing(&config);

    match cli.command {
        Command::Play { state, fresh } => run_play(&config, state, fresh),
        Command::Show { state } => run_show(&config, &state),
        Command::Check { state } => run_check(&state),
    }
}

fn init_tracing(config: &HostConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Play an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &HostConfig, state: Option<String>, fresh: bool) -> Result<()> {
    let game = TicTacToe::with_layout(config.layout(), config.style());
    let mut host = Host::new(game, Some(config.save_path().clone()));

    if let Some(state) = state {
        host.resume(&state)?;
    } else if !fresh && host.resume_from_save() {
        info!(save_path = %config.save_path().display(), "Continuing saved game");
    }

    let stdin = std::io::stdin();
    let phase = host.run(stdin.lock(), std::io::stdout())?;
    info!(%phase, "Session ended");
    Ok(())
}

/// Print a decoded board
#[instrument(skip(config))]
fn run_show(config: &HostConfig, state: &str) -> Result<()> {
    let mut game = TicTacToe::with_layout(config.layout(), config.style());
    game.set_state_string(state)?;
    println!("{}", render(&game));
    Ok(())
}

/// Validate a state string
#[instrument]
fn run_check(state: &str) -> Result<()> {
    let state: StateString = state.parse()?;
    println!("{} is a valid state string", state);
    Ok(())
}
