//! SPARQL query construction for each [`QueryKind`].
//!
//! Queries are built from fixed graph patterns. The user-supplied parameter
//! is bound to a variable through a `VALUES` clause and rendered through a
//! [`Term`], never spliced into the pattern text.

pub mod term;

pub use term::Term;

use crate::error::QueryError;
use crate::types::{QueryKind, SearchQuery};

/// Prefix declarations shared by every query.
const PREFIXES: &str = "\
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX dbo: <http://dbpedia.org/ontology/>
PREFIX dbp: <http://dbpedia.org/property/>
PREFIX foaf: <http://xmlns.com/foaf/0.1/>
";

/// Maximum number of rows requested for a title search.
pub const MOVIE_SEARCH_LIMIT: usize = 30;

/// A SELECT query over one result variable.
#[derive(Debug, Clone)]
struct SelectQuery {
    variable: &'static str,
    bindings: Vec<(&'static str, Term)>,
    patterns: Vec<&'static str>,
    filters: Vec<&'static str>,
    limit: Option<usize>,
}

impl SelectQuery {
    fn new(variable: &'static str) -> Self {
        Self {
            variable,
            bindings: Vec::new(),
            patterns: Vec::new(),
            filters: Vec::new(),
            limit: None,
        }
    }

    fn bind(mut self, variable: &'static str, term: Term) -> Self {
        self.bindings.push((variable, term));
        self
    }

    fn pattern(mut self, line: &'static str) -> Self {
        self.patterns.push(line);
        self
    }

    fn filter(mut self, expr: &'static str) -> Self {
        self.filters.push(expr);
        self
    }

    fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn render(&self) -> String {
        let mut out = String::from(PREFIXES);
        out.push('\n');
        out.push_str(&format!("SELECT ?{}\nWHERE {{\n", self.variable));
        for (variable, term) in &self.bindings {
            out.push_str(&format!("    VALUES ?{variable} {{ {term} }}\n"));
        }
        for line in &self.patterns {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
        for expr in &self.filters {
            out.push_str(&format!("    FILTER {expr}\n"));
        }
        out.push('}');
        if let Some(limit) = self.limit {
            out.push_str(&format!("\nLIMIT {limit}"));
        }
        out.push('\n');
        out
    }
}

/// Build the SPARQL text for `query`.
///
/// Free-text kinds bind the trimmed, regex-escaped text to `?pattern` and
/// match it case-insensitively against English labels. Identifier kinds
/// bind the validated IRI to the subject or object of the relation.
///
/// # Errors
///
/// Returns [`QueryError::InvalidParameter`] if free text is blank or an
/// identifier is not a valid IRI.
///
/// # Examples
///
/// ```
/// use reelgraph_query::{build_query, QueryKind, SearchQuery};
///
/// let sparql = build_query(&SearchQuery::new(QueryKind::MovieByTitle, "Matrix"))?;
/// assert!(sparql.contains("VALUES ?pattern { \"Matrix\" }"));
/// assert!(sparql.contains("dbo:runtime ?runtime"));
/// # Ok::<(), reelgraph_query::QueryError>(())
/// ```
pub fn build_query(query: &SearchQuery) -> Result<String, QueryError> {
    let kind = query.kind();
    let param = query.parameter();
    let select = SelectQuery::new(kind.result_variable());

    let select = match kind {
        QueryKind::MovieByTitle => select
            .bind("pattern", Term::substring_pattern(param)?)
            .pattern("?movie foaf:name|dbp:name|rdfs:label ?title ;")
            .pattern("    dbo:runtime ?runtime ;")
            .pattern("    dbo:cinematography ?cinematographer .")
            .filter("regex(?title, ?pattern, \"i\")")
            .filter("(lang(?title) = 'en')")
            .limit(MOVIE_SEARCH_LIMIT),
        QueryKind::PeopleByName => select
            .bind("pattern", Term::substring_pattern(param)?)
            .pattern("?person foaf:name|dbp:name|rdfs:label ?name .")
            .pattern("?film dbo:starring|dbp:starring|dbo:director|dbp:director ?person .")
            .filter("regex(?name, ?pattern, \"i\")")
            .filter("(lang(?name) = 'en')"),
        QueryKind::DirectorsOf => select
            .bind("film", Term::iri(param)?)
            .pattern("?film dbo:director|dbp:director ?director ."),
        QueryKind::ActorsOf => select
            .bind("film", Term::iri(param)?)
            .pattern("?film dbo:starring|dbp:starring ?actor ."),
        QueryKind::AbstractOf | QueryKind::BioOf => select
            .bind("entity", Term::iri(param)?)
            .pattern("?entity dbo:abstract ?abstract .")
            .filter("(lang(?abstract) = 'en')")
            .limit(1),
        QueryKind::DirectedBy => select
            .bind("person", Term::iri(param)?)
            .pattern("?movie dbo:director|dbp:director ?person ;")
            .pattern("    dbo:runtime ?runtime ;")
            .pattern("    dbo:cinematography ?cinematographer ."),
        QueryKind::StarredBy => select
            .bind("person", Term::iri(param)?)
            .pattern("?movie dbo:starring|dbp:starring ?person ;")
            .pattern("    dbo:runtime ?runtime ;")
            .pattern("    dbo:cinematography ?cinematographer ."),
    };

    let sparql = select.render();
    tracing::trace!(%kind, query = %sparql, "built SPARQL query");
    Ok(sparql)
}
