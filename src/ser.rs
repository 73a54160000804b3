//! Encoding capabilities.
//!
//! This module is the mirror of [`crate::de`]: an [`Encoder`] turns a value
//! back into the token sequence its decoder consumes. Encoding exists so that
//! values can be written in the same length-prefixed framing they are read
//! from, which is also what the round-trip tests lean on.
//!
//! Encoding is infallible: every i64 and every string has a token spelling.
//! The one caveat is inherited from the format itself: text containing the
//! active delimiter is written verbatim and will split into several tokens
//! when read back. The format has no escaping.
//!
//! ## Examples
//!
//! ```rust
//! use slashload::{dump, load, SeqEncoder, SeqDecoder, TextEncoder, TextDecoder};
//!
//! let fruit = vec!["apple".to_string(), "banana".to_string()];
//! let encoded = dump(&fruit, &SeqEncoder::new(TextEncoder));
//! assert_eq!(encoded, "2/apple/banana");
//!
//! let back = load(&encoded, &SeqDecoder::new(TextDecoder)).unwrap();
//! assert_eq!(back, fruit);
//! ```

/// An encoding capability: append the token spelling of one value of
/// [`Self::Value`](Encoder::Value) to a token buffer.
///
/// Encoders are stateless values, exactly like their [`crate::Decoder`]
/// counterparts, and compose the same way: a sequence encoder holds its
/// element encoder, and a composite encoder writes its fields in declared
/// order.
pub trait Encoder {
    /// The type this capability encodes.
    type Value;

    /// Appends the tokens for `value` to `tokens`.
    fn encode(&self, value: &Self::Value, tokens: &mut Vec<String>);
}

impl<E: Encoder + ?Sized> Encoder for &E {
    type Value = E::Value;

    fn encode(&self, value: &Self::Value, tokens: &mut Vec<String>) {
        (**self).encode(value, tokens);
    }
}

impl<E: Encoder + ?Sized> Encoder for Box<E> {
    type Value = E::Value;

    fn encode(&self, value: &Self::Value, tokens: &mut Vec<String>) {
        (**self).encode(value, tokens);
    }
}

/// Capability for base-10 signed integers. Writes exactly one token.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntEncoder;

impl Encoder for IntEncoder {
    type Value = i64;

    fn encode(&self, value: &i64, tokens: &mut Vec<String>) {
        tokens.push(value.to_string());
    }
}

/// Capability for text. Writes exactly one token, verbatim.
///
/// Text containing the active delimiter does not round-trip; see the module
/// docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEncoder;

impl Encoder for TextEncoder {
    type Value = String;

    fn encode(&self, value: &String, tokens: &mut Vec<String>) {
        tokens.push(value.clone());
    }
}

/// Capability for length-prefixed sequences, parameterized by the capability
/// of its element type.
///
/// Writes the element count as one integer token, then each element in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeqEncoder<E> {
    element: E,
}

impl<E> SeqEncoder<E> {
    /// Creates a sequence capability around an element capability.
    pub fn new(element: E) -> Self {
        SeqEncoder { element }
    }
}

impl<E: Encoder> Encoder for SeqEncoder<E> {
    type Value = Vec<E::Value>;

    fn encode(&self, value: &Vec<E::Value>, tokens: &mut Vec<String>) {
        IntEncoder.encode(&(value.len() as i64), tokens);
        for item in value {
            self.element.encode(item, tokens);
        }
    }
}

impl<A: Encoder, B: Encoder> Encoder for (A, B) {
    type Value = (A::Value, B::Value);

    fn encode(&self, value: &Self::Value, tokens: &mut Vec<String>) {
        self.0.encode(&value.0, tokens);
        self.1.encode(&value.1, tokens);
    }
}

impl<A: Encoder, B: Encoder, C: Encoder> Encoder for (A, B, C) {
    type Value = (A::Value, B::Value, C::Value);

    fn encode(&self, value: &Self::Value, tokens: &mut Vec<String>) {
        self.0.encode(&value.0, tokens);
        self.1.encode(&value.1, tokens);
        self.2.encode(&value.2, tokens);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_encoder_writes_one_token() {
        let mut tokens = Vec::new();
        IntEncoder.encode(&-42, &mut tokens);

        assert_eq!(tokens, vec!["-42"]);
    }

    #[test]
    fn seq_encoder_writes_count_then_elements() {
        let mut tokens = Vec::new();
        SeqEncoder::new(IntEncoder).encode(&vec![10, 20], &mut tokens);

        assert_eq!(tokens, vec!["2", "10", "20"]);
    }

    #[test]
    fn empty_sequence_is_just_a_zero() {
        let mut tokens = Vec::new();
        SeqEncoder::new(TextEncoder).encode(&Vec::new(), &mut tokens);

        assert_eq!(tokens, vec!["0"]);
    }

    #[test]
    fn tuple_encodes_fields_in_order() {
        let mut tokens = Vec::new();
        (TextEncoder, IntEncoder).encode(&("tama".to_string(), 5), &mut tokens);

        assert_eq!(tokens, vec!["tama", "5"]);
    }
}
