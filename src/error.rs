use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("at least one digit required")]
    NoDigits,

    #[error("malformed game header: {0:?}")]
    GameHeader(String),

    #[error("malformed cube entry: {0:?}")]
    CubeEntry(String),

    #[error("invalid cube count {text:?}: {source}")]
    CubeCount {
        text: String,
        source: std::num::ParseIntError,
    },

    #[error("unknown cube color: {0:?}")]
    UnknownColor(String),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
