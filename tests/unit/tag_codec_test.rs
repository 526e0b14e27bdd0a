//! Unit tests for the tag field codec.
//!
//! The edit form shows tags as one comma-separated line; these tests pin how
//! that line is split back into a tag list and how a list is rendered.

use linkvault_panels::services::tag_codec::{decode, encode};
use rstest::rstest;

#[rstest]
#[case("", &[])]
#[case("   ", &[])]
#[case(",,,", &[])]
#[case("rust", &["rust"])]
#[case("rust,web", &["rust", "web"])]
#[case("  rust ,  web  ", &["rust", "web"])]
#[case("a, , b,", &["a", "b"])]
#[case("x, x", &["x", "x"])]
#[case("two words, tag", &["two words", "tag"])]
fn test_decode(#[case] text: &str, #[case] expected: &[&str]) {
    assert_eq!(decode(text), expected);
}

#[rstest]
#[case(&[], "")]
#[case(&["rust"], "rust")]
#[case(&["x", "y"], "x, y")]
#[case(&["b", "a", "b"], "b, a, b")]
fn test_encode(#[case] tags: &[&str], #[case] expected: &str) {
    assert_eq!(encode(tags), expected);
}

/// Editing the rendered line and decoding it again yields the edited list.
#[test]
fn test_edited_line_decodes_to_new_list() {
    let line = encode(&["x", "y"]);
    assert_eq!(line, "x, y");

    let edited = line.replace('y', "z");
    assert_eq!(decode(&edited), vec!["x", "z"]);
}

/// Owned tag lists encode the same as borrowed ones.
#[test]
fn test_encode_owned_strings() {
    let tags = vec!["lang".to_string(), "systems".to_string()];
    assert_eq!(encode(&tags), "lang, systems");
}
