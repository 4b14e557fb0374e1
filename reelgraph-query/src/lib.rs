//! # reelgraph-query
//!
//! Movie and people lookups against a public knowledge graph.
//!
//! This crate turns a lookup request (a title fragment, a person name, or
//! an entity identifier plus a [`QueryKind`]) into a SPARQL query, sends it
//! to a remote endpoint, and reduces the Turtle reply to labelled entities.
//!
//! ## Design
//!
//! - Fixed graph patterns per query kind, with user input bound through
//!   `VALUES` and escaped or validated on the way in
//! - One HTTP client per endpoint, injected into the catalog at startup
//! - Labels derived from identifiers, deduplicated in first-seen order
//! - Unreadable or empty replies are empty results, never errors
//!
//! ## Non-goals
//!
//! - No caching, ranking, pagination, or retries

pub mod builder;
pub mod catalog;
pub mod config;
pub mod endpoint;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod normalize;
pub mod types;

pub use builder::build_query;
pub use catalog::MovieCatalog;
pub use config::EndpointConfig;
pub use endpoint::GraphEndpoint;
pub use endpoints::SparqlEndpoint;
pub use error::{QueryError, Result};
pub use normalize::label::label_from_identifier;
pub use types::{EntityRef, QueryKind, ResultSet, SearchQuery};

/// Search films by title against the default public endpoint.
///
/// Convenience wrapper that builds a one-off [`MovieCatalog`] from
/// [`EndpointConfig::default()`]. Long-running callers should build the
/// catalog once and reuse it.
///
/// # Errors
///
/// Same as [`MovieCatalog::search_movies`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> reelgraph_query::Result<()> {
/// let movies = reelgraph_query::search_movies_default("Matrix").await?;
/// for movie in &movies {
///     println!("{}: {}", movie.label, movie.identifier);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_movies_default(title: &str) -> Result<ResultSet> {
    MovieCatalog::from_config(&EndpointConfig::default())?
        .search_movies(title)
        .await
}
