use anyhow::{anyhow, Result};

use crate::board::{Board, Player};
use crate::error::GameError;
use crate::COLS;

/// A single recorded placement
///
/// The row is always derived by gravity when the move is applied, never
/// chosen by the caller.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// Where a game stands after the last applied move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        match self {
            Outcome::InProgress => false,
            _ => true,
        }
    }
}

/// One active game: the board, the move history and the cached outcome
///
/// The outcome is recomputed from the move just applied rather than
/// stored independently of it, so it can never disagree with the board.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Replays a game from a string of 1-indexed column digits, players
    /// alternating from Red
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut game = Self::new();
        let mut player = Player::Red;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=COLS) => {
                    game.apply_move(column - 1, player)
                        .map_err(|err| anyhow!("invalid move in column {}: {}", column, err))?;
                    player = player.other();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Validates and applies a move for `player`, records it and
    /// recomputes the outcome
    pub fn apply_move(&mut self, column: usize, player: Player) -> Result<Move, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }

        let row = self.board.place(column, player)?;
        let applied = Move {
            row,
            column,
            player,
        };
        self.history.push(applied);

        self.outcome = if self.board.check_win(row, column) {
            Outcome::Win(player)
        } else if self.board.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        };

        Ok(applied)
    }

    /// Pops the last move and restores its cell to empty
    ///
    /// Undo is permitted after a win or draw: the outcome can only have
    /// been produced by the move being popped, so the game is always
    /// live again afterwards.
    pub fn undo(&mut self) -> Result<Move, GameError> {
        let last = self.history.pop().ok_or(GameError::EmptyHistory)?;
        self.board.unplace(last.column);
        self.outcome = Outcome::InProgress;
        Ok(last)
    }

    /// Discards the board and history for a fresh game
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.outcome = Outcome::InProgress;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
