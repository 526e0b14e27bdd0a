//! Property-based tests for the tag field codec.
//!
//! Any list of tags that are non-empty, comma-free and already trimmed must
//! survive encode then decode unchanged. Decoding arbitrary text must only
//! ever yield trimmed, non-empty tags.

use linkvault_panels::services::tag_codec::{decode, encode};
use proptest::prelude::*;

/// A tag the form can carry: no commas, no surrounding whitespace.
fn arb_tag() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]([a-zA-Z0-9_ -]{0,10}[a-zA-Z0-9_-])?"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_encode_decode_roundtrip(tags in prop::collection::vec(arb_tag(), 0..8)) {
        let decoded = decode(&encode(&tags));
        prop_assert_eq!(decoded, tags);
    }

    #[test]
    fn prop_decoded_tags_are_trimmed_and_non_empty(text in ".{0,64}") {
        for tag in decode(&text) {
            prop_assert!(!tag.is_empty());
            prop_assert_eq!(tag.trim(), tag.as_str());
            prop_assert!(!tag.contains(','));
        }
    }

    #[test]
    fn prop_decode_is_idempotent_through_encode(text in "[a-z ,]{0,40}") {
        let once = decode(&text);
        let twice = decode(&encode(&once));
        prop_assert_eq!(once, twice);
    }
}
