// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Error types.
use thiserror::Error;

use showdown_eval::{EvalError, ParseCardError};

/// Result alias for hand evaluation and settlement.
pub type Result<T> = std::result::Result<T, Error>;

/// Hand evaluation and settlement errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed cards, wrong card count, duplicate cards or a negative pot.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A broken invariant, this is a bug and not a caller error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Checks if this error was caused by the caller input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        match e {
            EvalError::InvalidInput(msg) => Error::InvalidInput(msg),
            EvalError::Internal(msg) => Error::Internal(msg),
        }
    }
}

impl From<ParseCardError> for Error {
    fn from(e: ParseCardError) -> Self {
        Error::InvalidInput(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        let e = Error::from(EvalError::InvalidInput("duplicate card Ah".into()));
        assert!(e.is_client_error());
        assert_eq!(e.to_string(), "invalid input: duplicate card Ah");

        let e = Error::from(EvalError::Internal("no hand".into()));
        assert!(!e.is_client_error());

        let e = Error::from(ParseCardError::InvalidSuit('x'));
        assert_eq!(e, Error::InvalidInput("invalid card suit 'x'".into()));
    }
}
