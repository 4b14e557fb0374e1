//! Server-side HTML rendering for the page models.
//!
//! Every dynamic string goes through [`html_escape`]; identifiers placed in
//! links are additionally URL-encoded.

use reelgraph_query::ResultSet;

use crate::pages::{MovieDetailPage, MovieSearchPage, PeopleSearchPage, PersonDetailPage};

const STYLE: &str = r#"body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
h1 a { color: inherit; text-decoration: none; }
form { margin: 1rem 0; }
input[type=text] { width: 20rem; padding: 0.3rem; }
.count { color: #666; }
.empty { color: #888; font-style: italic; }
.error { border-left: 4px solid #c33; padding-left: 1rem; }"#;

/// Escape text for use in HTML element content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Link target for an entity detail page, e.g. `/movie?uri=...`.
pub fn detail_href(route: &str, identifier: &str) -> String {
    format!("{route}?uri={}", urlencoding::encode(identifier))
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - reelgraph</title>
<style>{STYLE}</style>
</head>
<body>
<h1><a href="/">reelgraph</a></h1>
{body}
</body>
</html>
"#,
        title = html_escape(title),
    )
}

fn search_forms() -> &'static str {
    r#"<form method="post" action="/movies">
    <label for="title">Movie title</label>
    <input type="text" id="title" name="title" placeholder="e.g. the matrix" />
    <button type="submit">Search movies</button>
</form>
<form method="post" action="/people">
    <label for="person">Person</label>
    <input type="text" id="person" name="person" placeholder="e.g. keanu reeves" />
    <button type="submit">Search people</button>
</form>"#
}

/// Render a labelled entity list, or the empty-state message.
fn entity_list(heading: &str, entities: &ResultSet, route: &str, empty: &str) -> String {
    let mut html = format!(
        r#"<h2>{} <span class="count">({})</span></h2>"#,
        html_escape(heading),
        entities.len()
    );
    if entities.is_empty() {
        html.push_str(&format!(r#"<p class="empty">{}</p>"#, html_escape(empty)));
        return html;
    }
    html.push_str("<ul>");
    for entity in entities {
        // Literal values have no detail page.
        if entity.is_iri() {
            html.push_str(&format!(
                r#"<li><a href="{}">{}</a></li>"#,
                html_escape(&detail_href(route, &entity.identifier)),
                html_escape(&entity.label)
            ));
        } else {
            html.push_str(&format!("<li>{}</li>", html_escape(&entity.label)));
        }
    }
    html.push_str("</ul>");
    html
}

fn text_section(heading: &str, text: Option<&str>, empty: &str) -> String {
    match text {
        Some(text) => format!(
            "<h2>{}</h2><p>{}</p>",
            html_escape(heading),
            html_escape(text)
        ),
        None => format!(
            r#"<h2>{}</h2><p class="empty">{}</p>"#,
            html_escape(heading),
            html_escape(empty)
        ),
    }
}

/// Home page with the movie and people search forms.
pub fn home() -> String {
    layout("Search", search_forms())
}

pub fn movie_search(page: &MovieSearchPage) -> String {
    let body = format!(
        "{}\n{}",
        search_forms(),
        entity_list(
            &format!("Movies matching \u{201c}{}\u{201d}", page.title),
            &page.movies,
            "/movie",
            "No movies found.",
        )
    );
    layout(&page.title, &body)
}

pub fn movie_detail(page: &MovieDetailPage) -> String {
    let body = [
        format!("<h2>{}</h2>", html_escape(&page.movie_title)),
        text_section("Abstract", page.abstract_text.as_deref(), "No abstract available."),
        entity_list("Directors", &page.directors, "/person", "No directors listed."),
        entity_list("Actors", &page.actors, "/person", "No actors listed."),
    ]
    .join("\n");
    layout(&page.movie_title, &body)
}

pub fn people_search(page: &PeopleSearchPage) -> String {
    let body = format!(
        "{}\n{}",
        search_forms(),
        entity_list(
            &format!("People matching \u{201c}{}\u{201d}", page.person_name),
            &page.people,
            "/person",
            "No people found.",
        )
    );
    layout(&page.person_name, &body)
}

pub fn person_detail(page: &PersonDetailPage) -> String {
    let body = [
        format!("<h2>{}</h2>", html_escape(&page.person_name)),
        text_section("Biography", page.bio.as_deref(), "No biography available."),
        entity_list("Directed", &page.directed, "/movie", "No directed movies listed."),
        entity_list("Starred in", &page.starred, "/movie", "No starring roles listed."),
    ]
    .join("\n");
    layout(&page.person_name, &body)
}

/// Error page showing the HTTP status and a user-facing message.
pub fn error_page(status: u16, reason: &str, message: &str) -> String {
    let body = format!(
        r#"<div class="error"><h2>{status} {}</h2><p>{}</p></div>
<p><a href="/">Back to search</a></p>"#,
        html_escape(reason),
        html_escape(message)
    );
    layout(reason, &body)
}
