//! Error types for token-stream decoding.
//!
//! Every failure a decode can produce is one of three kinds:
//!
//! - **End of stream**: a decoder needed a token and the stream had none left
//! - **Parse error**: a token was present but not convertible to the target scalar
//! - **Invalid length**: a sequence declared a negative element count
//!
//! Each variant carries the zero-based position of the token at which the
//! failure was detected, counted from the start of the stream.
//!
//! ## Examples
//!
//! ```rust
//! use slashload::{load, Error, IntDecoder};
//!
//! let err = load("abc", &IntDecoder).unwrap_err();
//! assert!(matches!(err, Error::ParseError { position: 0, .. }));
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while decoding a token stream.
///
/// Failures propagate immediately to the caller; there is no recovery,
/// default substitution, or partial construction anywhere in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The stream was exhausted before a required token could be read.
    #[error("end of stream at token {position}: another token was required")]
    EndOfStream { position: usize },

    /// A token was present but could not be parsed as the target scalar type.
    #[error("parse error at token {position}: {token:?} is not a valid {expected}")]
    ParseError {
        position: usize,
        token: String,
        expected: &'static str,
    },

    /// A sequence declared a negative element count.
    #[error("invalid length at token {position}: sequence count {length} is negative")]
    InvalidLength { position: usize, length: i64 },
}

impl Error {
    /// Creates an end-of-stream error at the given token position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slashload::Error;
    ///
    /// let err = Error::end_of_stream(3);
    /// assert!(err.to_string().contains("token 3"));
    /// ```
    pub fn end_of_stream(position: usize) -> Self {
        Error::EndOfStream { position }
    }

    /// Creates a parse error for a token that failed scalar conversion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slashload::Error;
    ///
    /// let err = Error::parse(0, "abc", "integer");
    /// assert!(err.to_string().contains("not a valid integer"));
    /// ```
    pub fn parse(position: usize, token: &str, expected: &'static str) -> Self {
        Error::ParseError {
            position,
            token: token.to_string(),
            expected,
        }
    }

    /// Creates an invalid-length error for a negative sequence count.
    pub fn invalid_length(position: usize, length: i64) -> Self {
        Error::InvalidLength { position, length }
    }

    /// Returns the token position at which this error was detected.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Error::EndOfStream { position }
            | Error::ParseError { position, .. }
            | Error::InvalidLength { position, .. } => *position,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
