//! Error types for seeding and running a world.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("seed map has no rows")]
    EmptyMap,

    #[error("seed row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized character {character:?} at row {row}, column {column}")]
    UnknownCharacter {
        character: char,
        row: usize,
        column: usize,
    },

    #[error("actor requested unknown direction: {0}")]
    UnknownDirection(String),

    #[error("unknown map preset: {0}")]
    UnknownMap(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
