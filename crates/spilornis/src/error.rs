use thiserror::Error;

use std::io;
use std::string::FromUtf16Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid UTF-16 in list element: {0}")]
    Utf16(#[from] FromUtf16Error),

    /// Malformed list text handed to split.
    #[error("{message}")]
    Syntax { message: String },

    /// A fallible buffer reservation was refused by the allocator.
    #[error("out of memory for {what} ({size})")]
    OutOfMemory { what: &'static str, size: usize },

    #[error("input of {length} code units exceeds the limit of {limit}")]
    TooLong { length: usize, limit: usize },

    /// A consistency check inside the codec failed.
    #[error("{0}")]
    Internal(String),
}

impl Error {
    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        Error::Syntax {
            message: message.into(),
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax { .. })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
