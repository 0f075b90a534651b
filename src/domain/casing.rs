//! Casing transforms applied to derived role values.
//!
//! Role values arrive as underscore-separated lowercase words (`my_service`).
//! Each transform is total: empty input yields empty output and no input
//! shape is rejected.

/// Uppercase every letter, preserving word separators.
///
/// `my_service` becomes `MY_SERVICE`. Used for constant-style names.
pub fn upper(value: &str) -> String {
    value.to_uppercase()
}

/// Split on `_` and title-case every word, concatenated with no delimiter.
///
/// `my_service` becomes `MyService`. A value without underscores yields a
/// single title-cased word.
pub fn upper_camel(value: &str) -> String {
    value.split('_').map(title_word).collect()
}

/// Split on `_`, keep the first word exactly as written and title-case the
/// rest, concatenated with no delimiter.
///
/// `my_service_name` becomes `myServiceName`. A single-word value is
/// returned unchanged, without case normalization.
pub fn lower_camel(value: &str) -> String {
    let mut words = value.split('_');
    // split always yields at least one item, even for the empty string
    let first = words.next().unwrap_or("");
    let rest: String = words.map(title_word).collect();
    format!("{}{}", first, rest)
}

/// First character uppercased, remainder lowercased.
fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}
