//! Display-name canonicalisation of free text typed by users.
//!
//! Titles and person names follow different rules: a title only has its
//! first word capitalised, a person name has every word capitalised.
//! Identifiers passed between pages are never canonicalised.

/// Upper-case the first character of `word` and lower-case the rest.
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Canonicalise a movie title: capitalise the first word only.
///
/// Words are split on whitespace and re-joined with single spaces; words
/// after the first keep their case as typed.
///
/// ```
/// use reelgraph::canonical::canonicalize_title;
///
/// assert_eq!(canonicalize_title(" the matrix"), "The matrix");
/// ```
pub fn canonicalize_title(raw: &str) -> String {
    let mut words = raw.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };
    std::iter::once(capitalize_word(first))
        .chain(words.map(str::to_owned))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonicalise a person name: capitalise every word.
///
/// ```
/// use reelgraph::canonical::canonicalize_person_name;
///
/// assert_eq!(canonicalize_person_name("john wick"), "John Wick");
/// ```
pub fn canonicalize_person_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}
