//! Single-pass token streams.
//!
//! A [`TokenStream`] is an ordered, finite sequence of string tokens with a
//! cursor marking the next unread position. It is created once per top-level
//! decode by splitting the input on a delimiter, and shared by `&mut`
//! reference with every nested decode so that token position advances
//! monotonically across the whole call tree.
//!
//! The interface is deliberately narrow: [`TokenStream::next_token`] is the
//! only way to observe tokens. There is no peek, rewind, or random access,
//! so a decoder can consume exactly the tokens its value requires and
//! nothing else.
//!
//! ## Examples
//!
//! ```rust
//! use slashload::TokenStream;
//!
//! let mut stream = TokenStream::new("3/apple/banana");
//! assert_eq!(stream.next_token().unwrap(), "3");
//! assert_eq!(stream.next_token().unwrap(), "apple");
//! assert_eq!(stream.position(), 2);
//! assert_eq!(stream.remaining(), 1);
//! ```

use crate::error::{Error, Result};

/// An ordered, single-pass, cursor-advancing accessor over tokens.
///
/// Tokens borrow from the input string; the stream owns no text. The cursor
/// never moves backward, and once the stream is exhausted every further read
/// fails with [`Error::EndOfStream`].
#[derive(Debug)]
pub struct TokenStream<'a> {
    tokens: Vec<&'a str>,
    cursor: usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream by splitting `input` on `/`.
    ///
    /// Empty input yields a stream of zero tokens, which is valid but
    /// immediately exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slashload::TokenStream;
    ///
    /// let stream = TokenStream::new("a/b/c");
    /// assert_eq!(stream.remaining(), 3);
    ///
    /// let empty = TokenStream::new("");
    /// assert_eq!(empty.remaining(), 0);
    /// ```
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_delimiter(input, '/')
    }

    /// Creates a stream by splitting `input` on an arbitrary delimiter.
    #[must_use]
    pub fn with_delimiter(input: &'a str, delimiter: char) -> Self {
        let tokens = if input.is_empty() {
            Vec::new()
        } else {
            input.split(delimiter).collect()
        };
        TokenStream { tokens, cursor: 0 }
    }

    /// Returns the next token and advances the cursor by one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndOfStream`] when no tokens remain.
    pub fn next_token(&mut self) -> Result<&'a str> {
        match self.tokens.get(self.cursor) {
            Some(&token) => {
                self.cursor += 1;
                Ok(token)
            }
            None => Err(Error::end_of_stream(self.cursor)),
        }
    }

    /// Returns the number of tokens consumed so far.
    ///
    /// This is also the zero-based position of the next unread token, which
    /// is what error variants report.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns the number of unread tokens.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }

    /// Returns `true` once every token has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.tokens.len()
    }
}
