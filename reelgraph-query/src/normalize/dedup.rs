//! Label deduplication of bound identifiers.
//!
//! Identifiers are labelled and collected into a [`ResultSet`] in the
//! order they were bound. When two identifiers share a label the first one
//! is kept and later ones are dropped.

use crate::types::{EntityRef, ResultSet};

use super::label::label_from_identifier;

/// Label and deduplicate `identifiers`, preserving first-seen order.
pub fn deduplicate<I, S>(identifiers: I) -> ResultSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut set = ResultSet::new();
    let mut dropped = 0usize;

    for identifier in identifiers {
        let identifier = identifier.into();
        let label = label_from_identifier(&identifier);
        if !set.insert(EntityRef { label, identifier }) {
            dropped += 1;
        }
    }

    if dropped > 0 {
        tracing::debug!(kept = set.len(), dropped, "dropped duplicate labels");
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_labels_pass_through() {
        let set = deduplicate([
            "http://dbpedia.org/resource/Alien",
            "http://dbpedia.org/resource/Aliens",
        ]);
        assert_eq!(set.labels(), vec!["Alien", "Aliens"]);
    }

    #[test]
    fn first_identifier_wins_for_shared_label() {
        let set = deduplicate([
            "http://dbpedia.org/resource/Heat",
            "http://de.dbpedia.org/resource/Heat",
        ]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.identifiers(), vec!["http://dbpedia.org/resource/Heat"]);
    }

    #[test]
    fn repeated_identifier_collapses() {
        let set = deduplicate([
            "http://dbpedia.org/resource/Keanu_Reeves",
            "http://dbpedia.org/resource/Keanu_Reeves",
            "http://dbpedia.org/resource/Keanu_Reeves",
        ]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn n_bindings_k_labels_gives_k_pairs_in_first_seen_order() {
        let set = deduplicate([
            "http://x/B",
            "http://x/A",
            "http://y/B",
            "http://x/C",
            "http://y/A",
        ]);
        let (labels, identifiers) = set.into_parallel();
        assert_eq!(labels, vec!["B", "A", "C"]);
        assert_eq!(identifiers, vec!["http://x/B", "http://x/A", "http://x/C"]);
    }

    #[test]
    fn underscore_and_space_forms_share_a_label() {
        let set = deduplicate(["http://x/The_Matrix", "http://y/The Matrix"]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.identifiers(), vec!["http://x/The_Matrix"]);
    }

    #[test]
    fn empty_input_returns_empty() {
        let set = deduplicate(Vec::<String>::new());
        assert!(set.is_empty());
    }
}
