//! Movie and people lookups against a graph endpoint.
//!
//! [`MovieCatalog`] runs the full pipeline for one [`SearchQuery`]:
//!
//! 1. Build the SPARQL text for the query kind
//! 2. Send it to the endpoint
//! 3. Normalise the reply into a [`ResultSet`] (list kinds) or a single
//!    optional value (abstract and biography kinds)
//!
//! Each lookup is one independent remote round-trip. Nothing is cached.

use crate::builder::build_query;
use crate::config::EndpointConfig;
use crate::endpoint::GraphEndpoint;
use crate::endpoints::SparqlEndpoint;
use crate::error::QueryError;
use crate::normalize::{normalize_list, normalize_single};
use crate::types::{QueryKind, ResultSet, SearchQuery};

/// Entry point for every lookup the web front end performs.
///
/// The endpoint is injected once and shared by all lookups.
#[derive(Debug, Clone)]
pub struct MovieCatalog<E = SparqlEndpoint> {
    endpoint: E,
}

impl MovieCatalog<SparqlEndpoint> {
    /// Build a catalog backed by the SPARQL endpoint in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Config`] if the config is invalid.
    pub fn from_config(config: &EndpointConfig) -> Result<Self, QueryError> {
        Ok(Self::new(SparqlEndpoint::new(config)?))
    }
}

impl<E: GraphEndpoint> MovieCatalog<E> {
    /// Build a catalog over `endpoint`.
    pub fn new(endpoint: E) -> Self {
        Self { endpoint }
    }

    /// The underlying endpoint.
    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    /// Run a list-kind query and return its labelled entities.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidParameter`] for a single-value kind or a
    /// parameter that cannot be bound, and propagates endpoint failures.
    pub async fn lookup_list(&self, query: &SearchQuery) -> Result<ResultSet, QueryError> {
        if query.kind().is_single_value() {
            return Err(QueryError::InvalidParameter(format!(
                "{} returns a single value, not a list",
                query.kind()
            )));
        }
        let body = self.run(query).await?;
        let results = normalize_list(&body);
        tracing::debug!(kind = %query.kind(), count = results.len(), "list lookup finished");
        Ok(results)
    }

    /// Run a single-value query and return its first bound value.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidParameter`] for a list kind or an
    /// invalid identifier, and propagates endpoint failures.
    pub async fn lookup_single(&self, query: &SearchQuery) -> Result<Option<String>, QueryError> {
        if !query.kind().is_single_value() {
            return Err(QueryError::InvalidParameter(format!(
                "{} returns a list, not a single value",
                query.kind()
            )));
        }
        let body = self.run(query).await?;
        let value = normalize_single(&body);
        tracing::debug!(kind = %query.kind(), found = value.is_some(), "single lookup finished");
        Ok(value)
    }

    /// Films whose English label contains `title`.
    pub async fn search_movies(&self, title: &str) -> Result<ResultSet, QueryError> {
        self.lookup_list(&SearchQuery::new(QueryKind::MovieByTitle, title))
            .await
    }

    /// Directors and actors whose English label contains `name`.
    pub async fn search_people(&self, name: &str) -> Result<ResultSet, QueryError> {
        self.lookup_list(&SearchQuery::new(QueryKind::PeopleByName, name))
            .await
    }

    /// Directors of the movie identified by `movie`.
    pub async fn directors_of(&self, movie: &str) -> Result<ResultSet, QueryError> {
        self.lookup_list(&SearchQuery::new(QueryKind::DirectorsOf, movie))
            .await
    }

    /// Actors starring in the movie identified by `movie`.
    pub async fn actors_of(&self, movie: &str) -> Result<ResultSet, QueryError> {
        self.lookup_list(&SearchQuery::new(QueryKind::ActorsOf, movie))
            .await
    }

    /// Films directed by the person identified by `person`.
    pub async fn directed_by(&self, person: &str) -> Result<ResultSet, QueryError> {
        self.lookup_list(&SearchQuery::new(QueryKind::DirectedBy, person))
            .await
    }

    /// Films starring the person identified by `person`.
    pub async fn starred_by(&self, person: &str) -> Result<ResultSet, QueryError> {
        self.lookup_list(&SearchQuery::new(QueryKind::StarredBy, person))
            .await
    }

    /// English abstract of the entity identified by `entity`.
    pub async fn abstract_of(&self, entity: &str) -> Result<Option<String>, QueryError> {
        self.lookup_single(&SearchQuery::new(QueryKind::AbstractOf, entity))
            .await
    }

    /// English biography of the person identified by `person`.
    pub async fn bio_of(&self, person: &str) -> Result<Option<String>, QueryError> {
        self.lookup_single(&SearchQuery::new(QueryKind::BioOf, person))
            .await
    }

    async fn run(&self, query: &SearchQuery) -> Result<String, QueryError> {
        let sparql = build_query(query)?;
        tracing::debug!(
            kind = %query.kind(),
            endpoint = %self.endpoint.describe(),
            "sending graph query"
        );
        self.endpoint.select(&sparql).await
    }
}
