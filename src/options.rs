//! Configuration options for loading and dumping token streams.
//!
//! This module provides types to customize how an input string is split into
//! tokens:
//!
//! - [`LoadOptions`]: Main configuration struct
//! - [`Delimiter`]: Choice of token delimiter (slash, comma, or pipe)
//!
//! ## Examples
//!
//! ```rust
//! use slashload::{load_with_options, Delimiter, IntDecoder, LoadOptions, SeqDecoder};
//!
//! let options = LoadOptions::new().with_delimiter(Delimiter::Comma);
//! let numbers = load_with_options("3,1,2,3", &SeqDecoder::new(IntDecoder), &options).unwrap();
//! assert_eq!(numbers, vec![1, 2, 3]);
//! ```

/// Delimiter choice for token streams.
///
/// The wire format separates tokens with a single character. Slash is the
/// default; comma and pipe are available for inputs where slashes occur in
/// token content.
///
/// # Examples
///
/// ```rust
/// use slashload::Delimiter;
///
/// assert_eq!(Delimiter::Slash.as_char(), '/');
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Slash,
    Comma,
    Pipe,
}

impl Delimiter {
    /// Returns the character this delimiter splits on.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Slash => '/',
            Delimiter::Comma => ',',
            Delimiter::Pipe => '|',
        }
    }
}

/// Configuration options for loading and dumping.
///
/// # Examples
///
/// ```rust
/// use slashload::{Delimiter, LoadOptions};
///
/// // Default slash-delimited format
/// let options = LoadOptions::new();
/// assert_eq!(options.delimiter, Delimiter::Slash);
///
/// // Comma-delimited
/// let options = LoadOptions::new().with_delimiter(Delimiter::Comma);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: Delimiter,
}

impl LoadOptions {
    /// Creates default options (slash-delimited).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slashload::LoadOptions;
    ///
    /// let options = LoadOptions::new();
    /// assert_eq!(options.delimiter.as_char(), '/');
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delimiter tokens are split on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slashload::{Delimiter, LoadOptions};
    ///
    /// let options = LoadOptions::new().with_delimiter(Delimiter::Pipe);
    /// assert_eq!(options.delimiter.as_char(), '|');
    /// ```
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }
}
