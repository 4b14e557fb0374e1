//! The four page flows: movie search, movie detail, people search and
//! person detail.
//!
//! Each flow takes the raw request input, canonicalises free text (never
//! identifiers), runs the catalog lookups and returns a serialisable page
//! model. Rendering lives in [`crate::web::render`].

use reelgraph_query::{GraphEndpoint, MovieCatalog, ResultSet, label_from_identifier};
use serde::Serialize;
use tracing::debug;

use crate::canonical::{canonicalize_person_name, canonicalize_title};
use crate::error::{AppError, Result};

/// Results of a movie title search.
#[derive(Debug, Clone, Serialize)]
pub struct MovieSearchPage {
    /// Canonicalised title that was searched for.
    pub title: String,
    pub movies: ResultSet,
}

/// Directors, actors and abstract of one movie.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetailPage {
    /// Label derived from the movie identifier.
    pub movie_title: String,
    pub identifier: String,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub directors: ResultSet,
    pub actors: ResultSet,
}

/// Results of a person name search.
#[derive(Debug, Clone, Serialize)]
pub struct PeopleSearchPage {
    /// Canonicalised name that was searched for.
    pub person_name: String,
    pub people: ResultSet,
}

/// Biography and filmography of one person.
#[derive(Debug, Clone, Serialize)]
pub struct PersonDetailPage {
    /// Label derived from the person identifier.
    pub person_name: String,
    pub identifier: String,
    pub bio: Option<String>,
    pub directed: ResultSet,
    pub starred: ResultSet,
}

/// Search movies whose title contains `raw_title`.
///
/// # Errors
///
/// [`AppError::BadRequest`] for blank input, otherwise any lookup error.
pub async fn movie_search<E: GraphEndpoint>(
    catalog: &MovieCatalog<E>,
    raw_title: &str,
) -> Result<MovieSearchPage> {
    let title = canonicalize_title(raw_title);
    if title.is_empty() {
        return Err(AppError::BadRequest("Please enter a movie title.".into()));
    }
    let movies = catalog.search_movies(&title).await?;
    debug!(title = %title, count = movies.len(), "movie search");
    Ok(MovieSearchPage { title, movies })
}

/// Load the detail page for the movie identified by `identifier`.
///
/// The three lookups run concurrently; the first failure fails the page.
///
/// # Errors
///
/// [`AppError::BadRequest`] for a missing identifier, otherwise any lookup
/// error.
pub async fn movie_detail<E: GraphEndpoint>(
    catalog: &MovieCatalog<E>,
    identifier: &str,
) -> Result<MovieDetailPage> {
    let identifier = require_identifier(identifier, "movie")?;
    let (directors, actors, abstract_text) = tokio::try_join!(
        catalog.directors_of(identifier),
        catalog.actors_of(identifier),
        catalog.abstract_of(identifier),
    )?;
    debug!(
        movie = identifier,
        directors = directors.len(),
        actors = actors.len(),
        has_abstract = abstract_text.is_some(),
        "movie detail"
    );
    Ok(MovieDetailPage {
        movie_title: label_from_identifier(identifier),
        identifier: identifier.to_owned(),
        abstract_text,
        directors,
        actors,
    })
}

/// Search people whose name contains `raw_name`.
///
/// # Errors
///
/// [`AppError::BadRequest`] for blank input, otherwise any lookup error.
pub async fn people_search<E: GraphEndpoint>(
    catalog: &MovieCatalog<E>,
    raw_name: &str,
) -> Result<PeopleSearchPage> {
    let person_name = canonicalize_person_name(raw_name);
    if person_name.is_empty() {
        return Err(AppError::BadRequest("Please enter a person's name.".into()));
    }
    let people = catalog.search_people(&person_name).await?;
    debug!(person = %person_name, count = people.len(), "people search");
    Ok(PeopleSearchPage {
        person_name,
        people,
    })
}

/// Load the detail page for the person identified by `identifier`.
///
/// # Errors
///
/// [`AppError::BadRequest`] for a missing identifier, otherwise any lookup
/// error.
pub async fn person_detail<E: GraphEndpoint>(
    catalog: &MovieCatalog<E>,
    identifier: &str,
) -> Result<PersonDetailPage> {
    let identifier = require_identifier(identifier, "person")?;
    let (bio, directed, starred) = tokio::try_join!(
        catalog.bio_of(identifier),
        catalog.directed_by(identifier),
        catalog.starred_by(identifier),
    )?;
    debug!(
        person = identifier,
        directed = directed.len(),
        starred = starred.len(),
        has_bio = bio.is_some(),
        "person detail"
    );
    Ok(PersonDetailPage {
        person_name: label_from_identifier(identifier),
        identifier: identifier.to_owned(),
        bio,
        directed,
        starred,
    })
}

fn require_identifier<'a>(identifier: &'a str, what: &str) -> Result<&'a str> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(AppError::BadRequest(format!("No {what} was selected.")));
    }
    Ok(identifier)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use reelgraph_query::QueryError;
    use std::sync::Mutex;

    const RESULT_HEADER: &str = "@prefix res: <http://www.w3.org/2005/sparql-results#> .\n";

    fn list_body(identifiers: &[&str]) -> String {
        let mut body = RESULT_HEADER.to_owned();
        for id in identifiers {
            body.push_str(&format!(
                "_:_ res:solution [ res:binding [ res:variable \"x\" ; res:value <{id}> ] ] .\n"
            ));
        }
        body
    }

    fn literal_body(text: &str) -> String {
        format!(
            "{RESULT_HEADER}_:_ res:solution [ res:binding [ res:variable \"abstract\" ; res:value \"{text}\"@en ] ] .\n"
        )
    }

    /// Answers by matching a marker in the query text; records every query.
    struct ScriptedEndpoint {
        replies: Vec<(&'static str, std::result::Result<String, QueryError>)>,
        seen: Mutex<Vec<String>>,
    }

    impl ScriptedEndpoint {
        fn new(replies: Vec<(&'static str, std::result::Result<String, QueryError>)>) -> Self {
            Self {
                replies,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn queries(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl GraphEndpoint for ScriptedEndpoint {
        async fn select(&self, sparql: &str) -> std::result::Result<String, QueryError> {
            self.seen.lock().unwrap().push(sparql.to_owned());
            for (marker, reply) in &self.replies {
                if sparql.contains(marker) {
                    return match reply {
                        Ok(body) => Ok(body.clone()),
                        Err(QueryError::Timeout(m)) => Err(QueryError::Timeout(m.clone())),
                        Err(e) => Err(QueryError::RemoteQueryFailed(e.to_string())),
                    };
                }
            }
            Ok(RESULT_HEADER.to_owned())
        }

        fn describe(&self) -> &str {
            "scripted"
        }
    }

    const MATRIX: &str = "http://dbpedia.org/resource/The_Matrix";
    const KEANU: &str = "http://dbpedia.org/resource/Keanu_Reeves";

    #[tokio::test]
    async fn movie_search_canonicalises_title() {
        let catalog = MovieCatalog::new(ScriptedEndpoint::new(vec![(
            "?pattern",
            Ok(list_body(&[MATRIX, "http://dbpedia.org/resource/The_Matrix_Reloaded"])),
        )]));

        let page = movie_search(&catalog, " the matrix").await.unwrap();
        assert_eq!(page.title, "The matrix");
        assert_eq!(page.movies.labels(), vec!["The Matrix", "The Matrix Reloaded"]);
        assert!(catalog.endpoint().queries()[0].contains("\"The matrix\""));
    }

    #[tokio::test]
    async fn blank_search_is_bad_request_without_query() {
        let catalog = MovieCatalog::new(ScriptedEndpoint::new(vec![]));
        let err = movie_search(&catalog, "   ").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        let err = people_search(&catalog, "").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(catalog.endpoint().queries().is_empty());
    }

    #[tokio::test]
    async fn people_search_capitalises_every_word() {
        let catalog = MovieCatalog::new(ScriptedEndpoint::new(vec![(
            "?pattern",
            Ok(list_body(&[KEANU])),
        )]));
        let page = people_search(&catalog, "keanu reeves").await.unwrap();
        assert_eq!(page.person_name, "Keanu Reeves");
        assert_eq!(page.people.labels(), vec!["Keanu Reeves"]);
    }

    #[tokio::test]
    async fn movie_detail_combines_three_lookups() {
        let catalog = MovieCatalog::new(ScriptedEndpoint::new(vec![
            (
                "SELECT ?director",
                Ok(list_body(&["http://dbpedia.org/resource/Lana_Wachowski"])),
            ),
            ("SELECT ?actor", Ok(list_body(&[KEANU]))),
            ("SELECT ?abstract", Ok(literal_body("A 1999 film."))),
        ]));

        let page = movie_detail(&catalog, MATRIX).await.unwrap();
        assert_eq!(page.movie_title, "The Matrix");
        assert_eq!(page.directors.labels(), vec!["Lana Wachowski"]);
        assert_eq!(page.actors.labels(), vec!["Keanu Reeves"]);
        assert_eq!(page.abstract_text.as_deref(), Some("A 1999 film."));
        assert_eq!(catalog.endpoint().queries().len(), 3);
    }

    #[tokio::test]
    async fn person_detail_combines_three_lookups() {
        let catalog = MovieCatalog::new(ScriptedEndpoint::new(vec![
            ("SELECT ?abstract", Ok(literal_body("Canadian actor."))),
            ("dbo:starring|dbp:starring ?person", Ok(list_body(&[MATRIX]))),
        ]));

        let page = person_detail(&catalog, KEANU).await.unwrap();
        assert_eq!(page.person_name, "Keanu Reeves");
        assert_eq!(page.bio.as_deref(), Some("Canadian actor."));
        assert_eq!(page.starred.labels(), vec!["The Matrix"]);
        assert!(page.directed.is_empty());
    }

    #[tokio::test]
    async fn one_failing_lookup_fails_the_whole_page() {
        let catalog = MovieCatalog::new(ScriptedEndpoint::new(vec![
            ("SELECT ?director", Ok(list_body(&[KEANU]))),
            ("SELECT ?actor", Err(QueryError::Timeout("10s".into()))),
        ]));

        let err = movie_detail(&catalog, MATRIX).await.unwrap_err();
        assert!(matches!(err, AppError::Query(QueryError::Timeout(_))));
    }

    #[tokio::test]
    async fn missing_identifier_is_bad_request() {
        let catalog = MovieCatalog::new(ScriptedEndpoint::new(vec![]));
        let err = person_detail(&catalog, " ").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn malformed_identifier_is_invalid_parameter() {
        let catalog = MovieCatalog::new(ScriptedEndpoint::new(vec![]));
        let err = movie_detail(&catalog, "not an iri").await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Query(QueryError::InvalidParameter(_))
        ));
        assert!(catalog.endpoint().queries().is_empty());
    }

    #[test]
    fn detail_page_serialises_abstract_field() {
        let page = MovieDetailPage {
            movie_title: "The Matrix".into(),
            identifier: MATRIX.into(),
            abstract_text: None,
            directors: ResultSet::new(),
            actors: ResultSet::new(),
        };
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("abstract").is_some());
        assert_eq!(json["movie_title"], "The Matrix");
    }
}
