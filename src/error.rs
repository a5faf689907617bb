use thiserror::Error;

/// Expected, locally recoverable failures of the rules engine.
///
/// All of these are conditions the caller is meant to branch on; none
/// indicate a fault inside the engine itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,

    #[error("no moves to undo")]
    EmptyHistory,
}
