//! Core types for graph lookups and their normalised results.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::builder::Term;

/// The lookups reelgraph can run against the knowledge graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryKind {
    /// Films whose English label contains the free-text title.
    MovieByTitle,
    /// Directors or actors whose English label contains the free-text name.
    PeopleByName,
    /// Films directed by the person identifier.
    DirectedBy,
    /// Films starring the person identifier.
    StarredBy,
    /// Directors of the movie identifier.
    DirectorsOf,
    /// Actors in the movie identifier.
    ActorsOf,
    /// English abstract of the entity identifier.
    AbstractOf,
    /// English biography of the person identifier.
    BioOf,
}

impl QueryKind {
    /// Returns the human-readable name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MovieByTitle => "MovieByTitle",
            Self::PeopleByName => "PeopleByName",
            Self::DirectedBy => "DirectedBy",
            Self::StarredBy => "StarredBy",
            Self::DirectorsOf => "DirectorsOf",
            Self::ActorsOf => "ActorsOf",
            Self::AbstractOf => "AbstractOf",
            Self::BioOf => "BioOf",
        }
    }

    /// Whether the parameter is free text matched against labels, rather
    /// than an entity identifier.
    pub fn is_free_text(&self) -> bool {
        matches!(self, Self::MovieByTitle | Self::PeopleByName)
    }

    /// Whether only the first bound value of the result is consumed.
    pub fn is_single_value(&self) -> bool {
        matches!(self, Self::AbstractOf | Self::BioOf)
    }

    /// The SPARQL variable selected by queries of this kind.
    pub fn result_variable(&self) -> &'static str {
        match self {
            Self::MovieByTitle | Self::DirectedBy | Self::StarredBy => "movie",
            Self::PeopleByName => "person",
            Self::DirectorsOf => "director",
            Self::ActorsOf => "actor",
            Self::AbstractOf | Self::BioOf => "abstract",
        }
    }

    /// Returns all kinds.
    pub fn all() -> &'static [QueryKind] {
        &[
            Self::MovieByTitle,
            Self::PeopleByName,
            Self::DirectedBy,
            Self::StarredBy,
            Self::DirectorsOf,
            Self::ActorsOf,
            Self::AbstractOf,
            Self::BioOf,
        ]
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lookup request: a kind plus its free-text or identifier parameter.
///
/// Constructed per request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    kind: QueryKind,
    parameter: String,
}

impl SearchQuery {
    /// Create a query of `kind` for `parameter`.
    pub fn new(kind: QueryKind, parameter: impl Into<String>) -> Self {
        Self {
            kind,
            parameter: parameter.into(),
        }
    }

    /// The lookup kind.
    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    /// The raw parameter, exactly as supplied.
    pub fn parameter(&self) -> &str {
        &self.parameter
    }
}

/// A graph entity as shown to users: a display label and its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    /// Display name derived from the identifier.
    pub label: String,
    /// Opaque unique reference, usually a resource IRI.
    pub identifier: String,
}

impl EntityRef {
    /// Whether the identifier is an absolute IRI that can be looked up.
    ///
    /// Endpoints sometimes bind plain literals (e.g. a director's name as
    /// text) where a resource is expected; those are not linkable.
    pub fn is_iri(&self) -> bool {
        Term::iri(&self.identifier).is_ok()
    }
}

/// Entities in first-seen order, unique by label.
///
/// Inserting an entity whose label is already present is a no-op: the
/// first identifier seen for a label is the one kept.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultSet {
    entities: Vec<EntityRef>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl ResultSet {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entity` unless its label has been seen. Returns `true` if
    /// the entity was kept.
    pub fn insert(&mut self, entity: EntityRef) -> bool {
        if self.seen.contains(&entity.label) {
            return false;
        }
        self.seen.insert(entity.label.clone());
        self.entities.push(entity);
        true
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the set holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate entities in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, EntityRef> {
        self.entities.iter()
    }

    /// Labels in first-seen order.
    pub fn labels(&self) -> Vec<&str> {
        self.entities.iter().map(|e| e.label.as_str()).collect()
    }

    /// Identifiers, parallel to [`ResultSet::labels`].
    pub fn identifiers(&self) -> Vec<&str> {
        self.entities.iter().map(|e| e.identifier.as_str()).collect()
    }

    /// Split into parallel `(labels, identifiers)` sequences.
    pub fn into_parallel(self) -> (Vec<String>, Vec<String>) {
        self.entities
            .into_iter()
            .map(|e| (e.label, e.identifier))
            .unzip()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a EntityRef;
    type IntoIter = std::slice::Iter<'a, EntityRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
