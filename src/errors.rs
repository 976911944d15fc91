//! Errors used throughout the engine crate.
//!
//! The pure search core has no recoverable failure paths; errors exist only
//! at the public boundary, where malformed inputs (raw move ids, search
//! depths, board notation) must fail fast instead of silently producing a
//! wrong move.

use std::error::Error;
use std::fmt;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A raw move id outside `[0, 1225)` was passed across the boundary.
    MoveIdOutOfRange(u16),

    /// A search depth outside the supported range was requested.
    DepthOutOfRange(u8),

    /// Board notation contained a character other than `b`, `g`, or `.`.
    InvalidNotationChar(char),

    /// Board notation did not have seven ranks of seven cells.
    InvalidNotationForm(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::MoveIdOutOfRange(id) => {
                write!(f, "move id {id} is outside [0, 1225)")
            }
            EngineError::DepthOutOfRange(depth) => {
                write!(f, "search depth {depth} is outside the supported range")
            }
            EngineError::InvalidNotationChar(ch) => {
                write!(f, "invalid board notation character '{ch}'")
            }
            EngineError::InvalidNotationForm(text) => {
                write!(f, "malformed board notation '{text}'")
            }
        }
    }
}

impl Error for EngineError {}
