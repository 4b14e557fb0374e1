//! Trait definition for graph endpoints that answer SPARQL SELECT queries.
//!
//! The catalog talks to the knowledge graph only through
//! [`GraphEndpoint`], so the remote HTTP endpoint can be swapped for an
//! in-process double in tests.

use crate::error::QueryError;

/// A remote (or fake) store that evaluates SPARQL SELECT queries.
///
/// Implementors return the raw Turtle serialisation of the result set;
/// interpreting it is left to [`crate::normalize`].
///
/// All implementations must be `Send + Sync` so one endpoint can be shared
/// by concurrent requests.
pub trait GraphEndpoint: Send + Sync {
    /// Evaluate `sparql` and return the raw result body.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::RemoteQueryFailed`] if the request fails or the
    /// endpoint answers with an error status, and [`QueryError::Timeout`]
    /// if it does not answer in time.
    fn select(
        &self,
        sparql: &str,
    ) -> impl std::future::Future<Output = Result<String, QueryError>> + Send;

    /// Short description of the endpoint for logs.
    fn describe(&self) -> &str;
}
