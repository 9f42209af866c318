use std::num::ParseIntError;

use packed_struct::PackingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Format(String),
    #[error("invalid number {text:?}: {source}")]
    Number {
        text: String,
        source: ParseIntError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to pack header: {0}")]
    Packing(#[from] PackingError),
}

impl Error {
    pub fn format(message: impl Into<String>) -> Self {
        Error::Format(message.into())
    }

    /// True for malformed input, as opposed to a failing file system.
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_) | Error::Number { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
