//! Command grammar shared by every control-plane operation.
//!
//! Commands arrive as pre-tokenized string arguments. This module owns the
//! pieces every handler needs: the logical traversal [`Direction`], the
//! argument-count contract, and the [`CommandError`] taxonomy surfaced to the
//! controlling client. Spatial directions are part of the layout vocabulary
//! and live in [`crate::domain::layout`].

use std::str::FromStr;

use thiserror::Error;

/// Logical traversal direction over the registry's cyclic output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next" => Ok(Direction::Next),
            "previous" => Ok(Direction::Previous),
            _ => Err(()),
        }
    }
}

/// Errors reported back to the controlling client.
///
/// Argument-count violations are checked before anything else, so a command
/// with the wrong arity never parses or resolves anything. No-op outcomes
/// (sentinel focus, failed spatial lookup, same-output relocation) are *not*
/// errors; those commands succeed silently.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("not enough arguments")]
    NotEnoughArguments,

    #[error("too many arguments")]
    TooManyArguments,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The token matched no logical direction, no spatial direction, and no
    /// output name.
    #[error("invalid output indicator: {0}")]
    InvalidOutputIndicator(String),

    /// A numeric argument is outside its domain (e.g. a zero-sized custom
    /// mode, or a mode change on an output with no working mode to fall back
    /// to).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// An argument that should have been an integer did not parse as one.
    #[error("malformed integer argument: {0}")]
    MalformedInteger(#[from] std::num::ParseIntError),
}

/// Enforces a command's exact argument count.
///
/// Every command takes a fixed number of arguments; too few and too many are
/// distinct errors so the client can tell truncation from trailing garbage.
pub fn ensure_arg_count(given: usize, expected: usize) -> Result<(), CommandError> {
    if given < expected {
        Err(CommandError::NotEnoughArguments)
    } else if given > expected {
        Err(CommandError::TooManyArguments)
    } else {
        Ok(())
    }
}
