//! Extraction of bound values from a Turtle-serialised SPARQL result set.
//!
//! Endpoints answer a SELECT in the `rs:` result-set vocabulary: every
//! solution holds a binding node whose `rs:value` is the bound term.

use rio_api::model::{Literal, Term};
use rio_api::parser::TriplesParser;
use rio_turtle::{TurtleError, TurtleParser};

/// Predicate carrying the bound value of each binding.
pub const RESULT_VALUE: &str = "http://www.w3.org/2005/sparql-results#value";

/// Values of every `rs:value` triple, in document order.
///
/// IRIs yield their IRI text and literals their lexical form; blank nodes
/// are skipped. A body that is not valid Turtle yields no values at all:
/// the failure is logged and treated as an empty result.
pub fn bound_values(body: &str) -> Vec<String> {
    match parse_bound_values(body) {
        Ok(values) => values,
        Err(err) => {
            tracing::warn!(error = %err, "unparseable result set, treating as empty");
            Vec::new()
        }
    }
}

fn parse_bound_values(body: &str) -> Result<Vec<String>, TurtleError> {
    let mut values = Vec::new();
    let mut parser = TurtleParser::new(body.as_bytes(), None);

    parser.parse_all(&mut |triple| {
        if triple.predicate.iri != RESULT_VALUE {
            return Ok(()) as Result<(), TurtleError>;
        }
        match triple.object {
            Term::NamedNode(node) => values.push(node.iri.to_owned()),
            Term::Literal(Literal::Simple { value })
            | Term::Literal(Literal::LanguageTaggedString { value, .. })
            | Term::Literal(Literal::Typed { value, .. }) => values.push(value.to_owned()),
            _ => {}
        }
        Ok(())
    })?;

    Ok(values)
}
