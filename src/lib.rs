//! # slashload
//!
//! Typed decoding of slash-delimited token streams.
//!
//! ## What is this?
//!
//! `slashload` reconstructs typed values (integers, text, sequences, and
//! nested records) from a single delimited string like
//! `"CatWorld/3/tama/5/mike/6/kuro/7"`, without any schema description.
//! Each type owns the knowledge of how many tokens it consumes and how to
//! interpret them, expressed as a small capability value implementing
//! [`Decoder`].
//!
//! ## Key ideas
//!
//! - **Single-pass token stream**: the input is split once, and a cursor
//!   advances monotonically through the whole decode. No peek, no rewind.
//! - **Capabilities compose by construction**: `SeqDecoder::new(TextDecoder)`
//!   is "sequence of text"; a record capability delegates to its field
//!   capabilities in declared order. Nesting to any depth is just nesting of
//!   values.
//! - **Length-prefixed sequences**: a sequence is one count token followed by
//!   exactly that many element encodings. No end marker.
//! - **Total-order decoding**: records are positional. No field names, no
//!   optional fields, no reordering.
//!
//! ## Quick start
//!
//! ```rust
//! use slashload::{load, IntDecoder, SeqDecoder, TextDecoder};
//!
//! let n = load("33", &IntDecoder).unwrap();
//! assert_eq!(n, 33);
//!
//! let fruit = load("3/apple/banana/cherry", &SeqDecoder::new(TextDecoder)).unwrap();
//! assert_eq!(fruit, vec!["apple", "banana", "cherry"]);
//! ```
//!
//! ### Records
//!
//! A record type supplies its own capability, composed from the capabilities
//! of its fields:
//!
//! ```rust
//! use slashload::{load, Decoder, IntDecoder, Result, SeqDecoder, TextDecoder, TokenStream};
//!
//! #[derive(Debug, PartialEq)]
//! struct Employee { name: String, age: i64 }
//!
//! #[derive(Debug, PartialEq)]
//! struct Company { name: String, employees: Vec<Employee> }
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
//! struct CompanyDecoder;
//!
//! impl Decoder for CompanyDecoder {
//!     type Value = Company;
//!
//!     fn decode(&self, stream: &mut TokenStream<'_>) -> Result<Company> {
//!         Ok(Company {
//!             name: TextDecoder.decode(stream)?,
//!             employees: SeqDecoder::new(EmployeeDecoder).decode(stream)?,
//!         })
//!     }
//! }
//!
//! let company = load("CatWorld/3/tama/5/mike/6/kuro/7", &CompanyDecoder).unwrap();
//! assert_eq!(company.name, "CatWorld");
//! assert_eq!(company.employees.len(), 3);
//! ```
//!
//! ## Failure model
//!
//! A decode either returns a fully constructed value or fails with one of
//! three [`Error`] kinds: [`Error::EndOfStream`], [`Error::ParseError`], or
//! [`Error::InvalidLength`]. Failure is terminal for that stream; there is
//! no retry and no partial result.
//!
//! ## Limitations
//!
//! Tokens are separated by a single delimiter character (default `/`) with
//! no escaping, so token content cannot contain the active delimiter. Inputs
//! are materialized up front; there is no streaming from unbounded sources.

pub mod de;
pub mod error;
pub mod options;
pub mod ser;
pub mod stream;

pub use de::{Decoder, IntDecoder, SeqDecoder, TextDecoder};
pub use error::{Error, Result};
pub use options::{Delimiter, LoadOptions};
pub use ser::{Encoder, IntEncoder, SeqEncoder, TextEncoder};
pub use stream::TokenStream;

/// Decodes one value from a slash-delimited string.
///
/// Splits `input` on `/`, then delegates to `decoder` against the fresh
/// stream. Tokens beyond what the decoder consumes are ignored; use
/// [`load_from`] with your own [`TokenStream`] if you need to keep reading
/// after the first value.
///
/// # Examples
///
/// ```rust
/// use slashload::{load, IntDecoder, SeqDecoder};
///
/// assert_eq!(load("33", &IntDecoder).unwrap(), 33);
///
/// let nested = load("2/1/7/0", &SeqDecoder::new(SeqDecoder::new(IntDecoder))).unwrap();
/// assert_eq!(nested, vec![vec![7], vec![]]);
/// ```
///
/// # Errors
///
/// Returns whatever failure the decoder surfaces; see [`Error`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load<D>(input: &str, decoder: &D) -> Result<D::Value>
where
    D: Decoder,
{
    load_with_options(input, decoder, &LoadOptions::default())
}

/// Decodes one value from a delimited string with custom options.
///
/// # Examples
///
/// ```rust
/// use slashload::{load_with_options, Delimiter, IntDecoder, LoadOptions, SeqDecoder};
///
/// let options = LoadOptions::new().with_delimiter(Delimiter::Pipe);
/// let numbers = load_with_options("2|5|10", &SeqDecoder::new(IntDecoder), &options).unwrap();
/// assert_eq!(numbers, vec![5, 10]);
/// ```
///
/// # Errors
///
/// Returns whatever failure the decoder surfaces; see [`Error`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load_with_options<D>(input: &str, decoder: &D, options: &LoadOptions) -> Result<D::Value>
where
    D: Decoder,
{
    let mut stream = TokenStream::with_delimiter(input, options.delimiter.as_char());
    decoder.decode(&mut stream)
}

/// Decodes one value from an already-open stream.
///
/// This is the nested-decode entry point: a parent capability passes its
/// stream down so parent and children share one monotonic cursor. It is
/// equivalent to calling `decoder.decode(stream)` directly.
///
/// # Examples
///
/// ```rust
/// use slashload::{load_from, IntDecoder, TextDecoder, TokenStream};
///
/// let mut stream = TokenStream::new("tama/5");
/// let name = load_from(&mut stream, &TextDecoder).unwrap();
/// let age = load_from(&mut stream, &IntDecoder).unwrap();
/// assert_eq!((name.as_str(), age), ("tama", 5));
/// ```
///
/// # Errors
///
/// Returns whatever failure the decoder surfaces; see [`Error`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load_from<D>(stream: &mut TokenStream<'_>, decoder: &D) -> Result<D::Value>
where
    D: Decoder,
{
    decoder.decode(stream)
}

/// Encodes one value to a slash-delimited string.
///
/// # Examples
///
/// ```rust
/// use slashload::{dump, IntEncoder, SeqEncoder};
///
/// let encoded = dump(&vec![1, 2, 3], &SeqEncoder::new(IntEncoder));
/// assert_eq!(encoded, "3/1/2/3");
/// ```
#[must_use]
pub fn dump<E>(value: &E::Value, encoder: &E) -> String
where
    E: Encoder,
{
    dump_with_options(value, encoder, &LoadOptions::default())
}

/// Encodes one value to a delimited string with custom options.
///
/// # Examples
///
/// ```rust
/// use slashload::{dump_with_options, Delimiter, IntEncoder, LoadOptions, SeqEncoder};
///
/// let options = LoadOptions::new().with_delimiter(Delimiter::Comma);
/// let encoded = dump_with_options(&vec![1, 2], &SeqEncoder::new(IntEncoder), &options);
/// assert_eq!(encoded, "2,1,2");
/// ```
#[must_use]
pub fn dump_with_options<E>(value: &E::Value, encoder: &E, options: &LoadOptions) -> String
where
    E: Encoder,
{
    let mut tokens = Vec::new();
    encoder.encode(value, &mut tokens);
    tokens.join(&options.delimiter.as_char().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Employee {
        name: String,
        age: i64,
    }

    #[derive(Debug, PartialEq)]
    struct Company {
        name: String,
        employees: Vec<Employee>,
    }

    struct EmployeeDecoder;

    impl Decoder for EmployeeDecoder {
        type Value = Employee;

        fn decode(&self, stream: &mut TokenStream<'_>) -> Result<Employee> {
            Ok(Employee {
                name: TextDecoder.decode(stream)?,
                age: IntDecoder.decode(stream)?,
            })
        }
    }

    struct CompanyDecoder;

    impl Decoder for CompanyDecoder {
        type Value = Company;

        fn decode(&self, stream: &mut TokenStream<'_>) -> Result<Company> {
            Ok(Company {
                name: TextDecoder.decode(stream)?,
                employees: SeqDecoder::new(EmployeeDecoder).decode(stream)?,
            })
        }
    }

    #[test]
    fn load_integer() {
        assert_eq!(load("33", &IntDecoder).unwrap(), 33);
    }

    #[test]
    fn load_text() {
        assert_eq!(load("abc", &TextDecoder).unwrap(), "abc");
    }

    #[test]
    fn load_sequence_of_text() {
        let fruit = load("3/apple/banana/cherry", &SeqDecoder::new(TextDecoder)).unwrap();
        assert_eq!(fruit, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn load_company() {
        let company = load("CatWorld/3/tama/5/mike/6/kuro/7", &CompanyDecoder).unwrap();

        assert_eq!(
            company,
            Company {
                name: "CatWorld".to_string(),
                employees: vec![
                    Employee {
                        name: "tama".to_string(),
                        age: 5
                    },
                    Employee {
                        name: "mike".to_string(),
                        age: 6
                    },
                    Employee {
                        name: "kuro".to_string(),
                        age: 7
                    },
                ],
            }
        );
    }

    #[test]
    fn dump_then_load_sequence() {
        let numbers = vec![4, 8, 15, 16, 23, 42];
        let encoded = dump(&numbers, &SeqEncoder::new(IntEncoder));
        let back = load(&encoded, &SeqDecoder::new(IntDecoder)).unwrap();

        assert_eq!(back, numbers);
    }

    #[test]
    fn custom_delimiter_round_trip() {
        let options = LoadOptions::new().with_delimiter(Delimiter::Comma);
        let words = vec!["a/b".to_string(), "c".to_string()];

        // slash is plain content under a comma delimiter
        let encoded = dump_with_options(&words, &SeqEncoder::new(TextEncoder), &options);
        assert_eq!(encoded, "2,a/b,c");

        let back = load_with_options(&encoded, &SeqDecoder::new(TextDecoder), &options).unwrap();
        assert_eq!(back, words);
    }
}
