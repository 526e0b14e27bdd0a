//! Conversion between the free-text tag field and an ordered tag list.

const SEPARATOR: char = ',';
const JOINER: &str = ", ";

/// Splits a comma-separated tag field into trimmed, non-empty tags.
///
/// Order is preserved and duplicates are kept.
pub fn decode(text: &str) -> Vec<String> {
    text.split(SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins tags into the editable text form.
pub fn encode<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(JOINER)
}
