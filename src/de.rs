//! Decoding capabilities.
//!
//! This module provides the [`Decoder`] trait, the contract a type's decode
//! capability implements, together with the reusable building blocks every
//! composite decoder is assembled from:
//!
//! - [`IntDecoder`]: one token, parsed as a base-10 signed integer
//! - [`TextDecoder`]: one token, taken literally
//! - [`SeqDecoder`]: a length-prefixed sequence of any element capability
//! - Tuples of capabilities, for positional field groups
//!
//! ## Capabilities are values
//!
//! A capability is a plain value, not a singleton: `SeqDecoder::new(TextDecoder)`
//! and `SeqDecoder::new(SeqDecoder::new(IntDecoder))` are both ordinary
//! expressions, so arbitrarily deep nesting falls out of construction alone.
//! Composite decoders for record types delegate to the capabilities of their
//! fields in declared order:
//!
//! ```rust
//! use slashload::{load, Decoder, IntDecoder, Result, TextDecoder, TokenStream};
//!
//! #[derive(Debug, PartialEq)]
//! struct Employee {
//!     name: String,
//!     age: i64,
//! }
//!
//! struct EmployeeDecoder;
//!
//! impl Decoder for EmployeeDecoder {
//!     type Value = Employee;
//!
//!     fn decode(&self, stream: &mut TokenStream<'_>) -> Result<Employee> {
//!         Ok(Employee {
//!             name: TextDecoder.decode(stream)?,
//!             age: IntDecoder.decode(stream)?,
//!         })
//!     }
//! }
//!
//! let employee = load("tama/5", &EmployeeDecoder).unwrap();
//! assert_eq!(employee, Employee { name: "tama".to_string(), age: 5 });
//! ```
//!
//! ## Exact consumption
//!
//! The stream offers no peek and no rewind, so every decoder consumes exactly
//! the tokens its value requires: a scalar takes one token, a sequence takes
//! one count token plus the sum of its elements, and a composite takes the
//! sum of its fields in order.

use crate::error::{Error, Result};
use crate::stream::TokenStream;

/// A decoding capability: given a token stream, produce one value of
/// [`Self::Value`](Decoder::Value), consuming exactly the tokens that value
/// requires.
///
/// The only side effect permitted is advancing the stream cursor. Decoders
/// carry no mutable state, so a capability value can be shared freely,
/// including across threads, and used for any number of decodes.
///
/// The trait is object-safe; `&dyn Decoder<Value = T>` composes like any
/// other capability.
pub trait Decoder {
    /// The type this capability produces.
    type Value;

    /// Decodes one value from the stream.
    ///
    /// # Errors
    ///
    /// Propagates the first failure encountered: [`Error::EndOfStream`] if
    /// the stream runs short, [`Error::ParseError`] for an unconvertible
    /// scalar token, or [`Error::InvalidLength`] for a negative sequence
    /// count. On failure the stream is left partially advanced and should
    /// be discarded.
    fn decode(&self, stream: &mut TokenStream<'_>) -> Result<Self::Value>;
}

impl<D: Decoder + ?Sized> Decoder for &D {
    type Value = D::Value;

    fn decode(&self, stream: &mut TokenStream<'_>) -> Result<Self::Value> {
        (**self).decode(stream)
    }
}

impl<D: Decoder + ?Sized> Decoder for Box<D> {
    type Value = D::Value;

    fn decode(&self, stream: &mut TokenStream<'_>) -> Result<Self::Value> {
        (**self).decode(stream)
    }
}

/// Capability for base-10 signed integers. Consumes exactly one token.
///
/// # Examples
///
/// ```rust
/// use slashload::{load, IntDecoder};
///
/// assert_eq!(load("33", &IntDecoder).unwrap(), 33);
/// assert_eq!(load("-7", &IntDecoder).unwrap(), -7);
/// assert!(load("abc", &IntDecoder).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IntDecoder;

impl Decoder for IntDecoder {
    type Value = i64;

    fn decode(&self, stream: &mut TokenStream<'_>) -> Result<i64> {
        let position = stream.position();
        let token = stream.next_token()?;
        token
            .parse()
            .map_err(|_| Error::parse(position, token, "integer"))
    }
}

/// Capability for text. Consumes exactly one token; the token's literal
/// content is the value.
///
/// Tokens containing the active delimiter cannot be represented: the format
/// performs no escaping, so such text is split apart before any decoder sees
/// it.
///
/// # Examples
///
/// ```rust
/// use slashload::{load, TextDecoder};
///
/// assert_eq!(load("abc", &TextDecoder).unwrap(), "abc");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDecoder;

impl Decoder for TextDecoder {
    type Value = String;

    fn decode(&self, stream: &mut TokenStream<'_>) -> Result<String> {
        Ok(stream.next_token()?.to_string())
    }
}

/// Capability for length-prefixed sequences, parameterized by the capability
/// of its element type.
///
/// Decoding reads one integer count `n`, then exactly `n` elements in order.
/// This is length-prefixed framing, not delimiter-terminated: there is no end
/// marker, and tokens past the `n`th element are left unread for whoever owns
/// the stream next.
///
/// # Examples
///
/// ```rust
/// use slashload::{load, SeqDecoder, TextDecoder};
///
/// let fruit = load("3/apple/banana/cherry", &SeqDecoder::new(TextDecoder)).unwrap();
/// assert_eq!(fruit, vec!["apple", "banana", "cherry"]);
/// ```
///
/// Nesting is plain construction:
///
/// ```rust
/// use slashload::{load, IntDecoder, SeqDecoder};
///
/// let rows = load("2/2/1/2/1/9", &SeqDecoder::new(SeqDecoder::new(IntDecoder))).unwrap();
/// assert_eq!(rows, vec![vec![1, 2], vec![9]]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SeqDecoder<D> {
    element: D,
}

impl<D> SeqDecoder<D> {
    /// Creates a sequence capability around an element capability.
    pub fn new(element: D) -> Self {
        SeqDecoder { element }
    }
}

impl<D: Decoder> Decoder for SeqDecoder<D> {
    type Value = Vec<D::Value>;

    fn decode(&self, stream: &mut TokenStream<'_>) -> Result<Vec<D::Value>> {
        let count_position = stream.position();
        let count = IntDecoder.decode(stream)?;
        if count < 0 {
            return Err(Error::invalid_length(count_position, count));
        }
        let count = count as usize;

        // Every element consumes at least one token, so remaining() bounds
        // any count the stream can actually satisfy.
        let mut items = Vec::with_capacity(count.min(stream.remaining()));
        for _ in 0..count {
            items.push(self.element.decode(stream)?);
        }
        Ok(items)
    }
}

impl<A: Decoder, B: Decoder> Decoder for (A, B) {
    type Value = (A::Value, B::Value);

    fn decode(&self, stream: &mut TokenStream<'_>) -> Result<Self::Value> {
        let a = self.0.decode(stream)?;
        let b = self.1.decode(stream)?;
        Ok((a, b))
    }
}

impl<A: Decoder, B: Decoder, C: Decoder> Decoder for (A, B, C) {
    type Value = (A::Value, B::Value, C::Value);

    fn decode(&self, stream: &mut TokenStream<'_>) -> Result<Self::Value> {
        let a = self.0.decode(stream)?;
        let b = self.1.decode(stream)?;
        let c = self.2.decode(stream)?;
        Ok((a, b, c))
    }
}
