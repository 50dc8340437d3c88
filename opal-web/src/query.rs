//! Query-string helpers.

/// Escapes the characters the backend's query parser treats specially.
///
/// Substitutions are applied sequentially over the whole string, in this
/// fixed order: `&` → `%26`, then `+` → `%2B`, then `=` → `%3D`.
pub fn replace_special_characters(input: &str) -> String {
    input
        .replace('&', "%26")
        .replace('+', "%2B")
        .replace('=', "%3D")
}
