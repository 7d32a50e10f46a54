use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid difficulty")]
    InvalidDifficulty,
    #[error("Invalid coordinates")]
    InvalidCoordinate,
    #[error("Cell was already revealed")]
    AlreadyRevealed,
    #[error("Game already ended, no new moves are accepted")]
    GameOver,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Board state is inconsistent")]
    InvalidBoardState,
}

pub type Result<T> = core::result::Result<T, GameError>;
