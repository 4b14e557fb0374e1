//! Graph endpoint implementations.
//!
//! Each module provides a struct implementing
//! [`crate::endpoint::GraphEndpoint`].

pub mod sparql;

pub use sparql::SparqlEndpoint;
