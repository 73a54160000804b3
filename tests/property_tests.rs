//! Property-based tests - pragmatic approach testing core roundtrip and
//! framing guarantees across generated inputs.

use proptest::prelude::*;
use slashload::{
    dump, load, load_from, Decoder, Encoder, IntDecoder, IntEncoder, SeqDecoder, SeqEncoder,
    TextDecoder, TextEncoder, TokenStream,
};

fn roundtrip<D, E>(value: &E::Value, decoder: &D, encoder: &E) -> bool
where
    D: Decoder,
    E: Encoder<Value = D::Value>,
    D::Value: PartialEq + std::fmt::Debug,
{
    let encoded = dump(value, encoder);
    match load(&encoded, decoder) {
        Ok(back) => back == *value,
        Err(e) => {
            eprintln!("Load failed: {}", e);
            eprintln!("Encoded was: {}", encoded);
            false
        }
    }
}

// Token text must not contain the delimiter; the format has no escaping.
fn token_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{1,12}"
}

proptest! {
    // Scalars
    #[test]
    fn prop_int(n in any::<i64>()) {
        prop_assert!(roundtrip(&n, &IntDecoder, &IntEncoder));
    }

    #[test]
    fn prop_text(s in token_text()) {
        prop_assert!(roundtrip(&s, &TextDecoder, &TextEncoder));
    }

    // Sequences
    #[test]
    fn prop_vec_int(v in prop::collection::vec(any::<i64>(), 0..20)) {
        prop_assert!(roundtrip(&v, &SeqDecoder::new(IntDecoder), &SeqEncoder::new(IntEncoder)));
    }

    #[test]
    fn prop_vec_text(v in prop::collection::vec(token_text(), 0..20)) {
        prop_assert!(roundtrip(&v, &SeqDecoder::new(TextDecoder), &SeqEncoder::new(TextEncoder)));
    }

    #[test]
    fn prop_nested_vec(v in prop::collection::vec(prop::collection::vec(any::<i64>(), 0..5), 0..5)) {
        prop_assert!(roundtrip(
            &v,
            &SeqDecoder::new(SeqDecoder::new(IntDecoder)),
            &SeqEncoder::new(SeqEncoder::new(IntEncoder)),
        ));
    }

    // Positional records via the tuple building blocks
    #[test]
    fn prop_vec_of_records(v in prop::collection::vec((token_text(), any::<i64>()), 0..10)) {
        prop_assert!(roundtrip(
            &v,
            &SeqDecoder::new((TextDecoder, IntDecoder)),
            &SeqEncoder::new((TextEncoder, IntEncoder)),
        ));
    }

    // A sequence consumes its count token plus its elements, nothing more:
    // whatever is appended after the encoding stays unread.
    #[test]
    fn prop_length_prefix_bounds_consumption(
        v in prop::collection::vec(token_text(), 0..10),
        extra in prop::collection::vec(token_text(), 1..5),
    ) {
        let encoded = format!("{}/{}", dump(&v, &SeqEncoder::new(TextEncoder)), extra.join("/"));
        let mut stream = TokenStream::new(&encoded);

        let back = load_from(&mut stream, &SeqDecoder::new(TextDecoder)).unwrap();
        prop_assert_eq!(back, v);
        prop_assert_eq!(stream.remaining(), extra.len());
    }
}
