//! Error type shared by the library.
//!
//! The distance oracle itself never fails; errors come from input validation
//! and from candidate-set bookkeeping.

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Empty node set, non-positive radius, non-finite pose, duplicate ids.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Removal of an index that is not (or no longer) in the candidate set.
    #[error("candidate {0} is not in the set")]
    NotFound(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
