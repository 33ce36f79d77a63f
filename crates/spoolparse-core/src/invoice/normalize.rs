/// Collapse every whitespace run into a single space and trim both ends.
///
/// Repairs line breaks and column padding left behind by PDF text extraction
/// without reordering or altering any token.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
