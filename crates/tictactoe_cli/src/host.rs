//! Terminal host: drives a session from line-based input.

use crate::save::SaveFile;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tictactoe_engine::{
    Board, GamePhase, Holder, Player, PlayerRegistry, Position, StateString, StateStringError,
    TicTacToe, TurnOrder,
};
use tracing::{debug, info, instrument, warn};

/// Player to move on a board reached by alternating play from X.
pub fn next_player(board: &Board) -> Player {
    let (x, o) = board
        .cells()
        .iter()
        .filter_map(Holder::owner)
        .fold((0usize, 0usize), |(x, o), player| match player {
            Player::X => (x + 1, o),
            Player::O => (x, o + 1),
        });
    if x > o { Player::O } else { Player::X }
}

/// Board plus a status line.
pub fn render(game: &TicTacToe) -> String {
    format!("{}\n\n{}", game.board().display(), game.phase())
}

/// A game session bound to terminal I/O and an optional save file.
#[derive(Debug)]
pub struct Host {
    game: TicTacToe,
    turns: TurnOrder,
    save_path: Option<PathBuf>,
}

impl Host {
    /// Sets up a fresh board.
    #[instrument(skip(game))]
    pub fn new(mut game: TicTacToe, save_path: Option<PathBuf>) -> Self {
        let mut turns = TurnOrder::new();
        game.set_up_board(&mut turns);
        Self {
            game,
            turns,
            save_path,
        }
    }

    /// Loads a state into the live board and works out whose turn it is.
    #[instrument(skip(self))]
    pub fn resume(&mut self, state: &str) -> Result<(), StateStringError> {
        self.game.set_state_string(state)?;
        self.turns = TurnOrder::starting_with(next_player(self.game.board()));
        info!(state, to_move = %self.turns.current_player(), "Resumed game");
        Ok(())
    }

    /// Restores the board from the save file, if one is configured and readable.
    ///
    /// A corrupt save is reported and the empty board is kept.
    #[instrument(skip(self))]
    pub fn resume_from_save(&mut self) -> bool {
        let Some(path) = self.save_path.clone() else {
            return false;
        };
        match SaveFile::load(&path) {
            Ok(Some(save)) => match self.resume(save.state.as_str()) {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "Ignoring invalid saved state");
                    false
                }
            },
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable save file");
                false
            }
        }
    }

    /// Returns the session.
    pub fn game(&self) -> &TicTacToe {
        &self.game
    }

    /// Player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.turns.current_player()
    }

    /// Runs the read-place-print loop until the game ends, input ends or
    /// the player types `quit`.
    ///
    /// The save file is written after every placement. On exit it keeps an
    /// unfinished board, or resets to the initial state once the game is
    /// decided. The session is torn down before returning; a later call sets
    /// the board up again and resumes from the save file.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> anyhow::Result<GamePhase> {
        if matches!(self.game.phase(), GamePhase::Setup | GamePhase::Stopped) {
            self.turns = TurnOrder::new();
            self.game.set_up_board(&mut self.turns);
            self.resume_from_save();
        }

        let mut lines = input.lines();

        while !self.game.phase().is_terminal() {
            writeln!(output, "{}\n", self.game.board().display())?;
            write!(output, "{} to move (0-8, row,col or name; quit to stop): ", self.to_move())?;
            output.flush()?;

            let Some(line) = lines.next().transpose()? else {
                debug!("Input closed");
                break;
            };
            let line = line.trim();
            if matches!(line, "q" | "quit" | "exit") {
                break;
            }

            let cell = Position::parse(line);
            if cell.is_none() {
                writeln!(output, "No such cell: {:?}", line)?;
            }
            match self.game.try_place(cell, self.to_move()) {
                Ok(_) => {
                    self.persist();
                    if !self.game.phase().is_terminal() {
                        self.turns.advance_turn();
                        if self.game.update_ai(&mut self.turns).is_some() {
                            self.persist();
                        }
                    }
                }
                Err(e) if cell.is_some() => writeln!(output, "{}", e)?,
                Err(_) => {}
            }
        }

        let phase = self.game.phase();
        writeln!(output, "{}", render(&self.game))?;
        if phase.is_terminal() {
            self.store(StateString::initial());
        } else {
            self.persist();
        }
        self.game.teardown();
        Ok(phase)
    }

    fn persist(&self) {
        self.store(self.game.snapshot());
    }

    fn store(&self, state: StateString) {
        let Some(path) = &self.save_path else {
            return;
        };
        if let Err(e) = SaveFile::new(state).store(path) {
            warn!(error = %e, "Failed to save game");
        }
    }

    /// Path of the save file, if any.
    pub fn save_path(&self) -> Option<&Path> {
        self.save_path.as_deref()
    }
}
