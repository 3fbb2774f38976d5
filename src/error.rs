//! Errors for the text-facing modules.
//!
//! The counting core never fails; only turning puzzle text into ranges or
//! rotations can.

use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("range `{token}` is missing a `-` separator")]
    MissingSeparator { token: String },

    #[error("invalid bound `{text}` in range `{token}`: {source}")]
    InvalidBound {
        token: String,
        text: String,
        source: ParseIntError,
    },

    #[error("rotation `{line}` must start with `L` or `R`")]
    UnknownDirection { line: String },

    #[error("invalid distance in rotation `{line}`: {source}")]
    InvalidSteps { line: String, source: ParseIntError },
}
