use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Options {
    /// Guard a leading `#` on the first joined element so the list cannot be
    /// read back as a comment.
    pub quote_hash: bool,
    /// Largest input, in code units, split or join will accept (None = unlimited)
    pub max_length: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            quote_hash: true,
            max_length: None,
        }
    }
}

impl Options {
    pub(crate) fn check_length(&self, length: usize) -> Result<()> {
        match self.max_length {
            Some(limit) if length > limit => Err(Error::TooLong { length, limit }),
            _ => Ok(()),
        }
    }
}
