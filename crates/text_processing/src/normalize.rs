//! Input normalization

/// Lowercase and trim a raw message.
///
/// Matching downstream is substring based, so no tokenization happens here.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
