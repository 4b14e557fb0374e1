//! Display labels derived from entity identifiers.

/// Derive the display label of `identifier`.
///
/// Takes the text after the last `/` and replaces every `_` with a space.
/// An identifier without a `/` is used whole. One ending in `/` has no
/// last segment and is used verbatim. Applying the function to its own
/// output is a no-op.
///
/// # Examples
///
/// ```
/// use reelgraph_query::normalize::label::label_from_identifier;
///
/// assert_eq!(
///     label_from_identifier("http://dbpedia.org/resource/The_Matrix"),
///     "The Matrix"
/// );
/// ```
pub fn label_from_identifier(identifier: &str) -> String {
    let tail = identifier.rsplit('/').next().unwrap_or(identifier);
    if tail.is_empty() {
        return identifier.to_owned();
    }
    tail.replace('_', " ")
}
