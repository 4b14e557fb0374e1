//! Route handlers for the HTML pages and the JSON API.

use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Query, State};
use axum::response::{Html, IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::AppState;
use super::render;
use crate::error::AppError;
use crate::pages;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Movie search input, from the form body or the query string.
#[derive(Debug, Default, Deserialize)]
pub struct TitleInput {
    #[serde(default)]
    pub title: String,
}

/// People search input, from the form body or the query string.
#[derive(Debug, Default, Deserialize)]
pub struct PersonInput {
    #[serde(default)]
    pub person: String,
}

/// Detail page input: the entity identifier.
#[derive(Debug, Default, Deserialize)]
pub struct UriInput {
    #[serde(default)]
    pub uri: String,
}

// ---------------------------------------------------------------------------
// Error responses
// ---------------------------------------------------------------------------

/// JSON error body: `{"error": {"message", "type"}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        log_failure(&self);
        let html = render::error_page(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Error"),
            &self.user_message(),
        );
        (status, Html(html)).into_response()
    }
}

/// [`AppError`] rendered as a JSON error body.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        log_failure(&self.0);
        let body = ErrorResponse {
            error: ErrorBody {
                message: self.0.user_message(),
                error_type: self.0.error_type().to_owned(),
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Unreadable search form bodies get the same error page as other bad input.
fn form_error(rejection: FormRejection) -> AppError {
    AppError::BadRequest(format!(
        "The search form could not be read: {}",
        rejection.body_text()
    ))
}

fn log_failure(err: &AppError) {
    if err.status().is_server_error() {
        warn!(status = err.status().as_u16(), "request failed: {err}");
    } else {
        tracing::debug!(status = err.status().as_u16(), "rejected request: {err}");
    }
}

// ---------------------------------------------------------------------------
// HTML pages
// ---------------------------------------------------------------------------

pub async fn home() -> Html<String> {
    Html(render::home())
}

pub async fn movie_search(
    State(state): State<AppState>,
    form: Result<Form<TitleInput>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(input) = form.map_err(form_error)?;
    let page = pages::movie_search(&state.catalog, &input.title).await?;
    Ok(Html(render::movie_search(&page)))
}

pub async fn movie_detail(
    State(state): State<AppState>,
    Query(input): Query<UriInput>,
) -> Result<Html<String>, AppError> {
    let page = pages::movie_detail(&state.catalog, &input.uri).await?;
    Ok(Html(render::movie_detail(&page)))
}

pub async fn people_search(
    State(state): State<AppState>,
    form: Result<Form<PersonInput>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(input) = form.map_err(form_error)?;
    let page = pages::people_search(&state.catalog, &input.person).await?;
    Ok(Html(render::people_search(&page)))
}

pub async fn person_detail(
    State(state): State<AppState>,
    Query(input): Query<UriInput>,
) -> Result<Html<String>, AppError> {
    let page = pages::person_detail(&state.catalog, &input.uri).await?;
    Ok(Html(render::person_detail(&page)))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

// ---------------------------------------------------------------------------
// JSON API
// ---------------------------------------------------------------------------

pub async fn api_movie_search(
    State(state): State<AppState>,
    Query(input): Query<TitleInput>,
) -> Result<Json<pages::MovieSearchPage>, ApiError> {
    Ok(Json(pages::movie_search(&state.catalog, &input.title).await?))
}

pub async fn api_movie_detail(
    State(state): State<AppState>,
    Query(input): Query<UriInput>,
) -> Result<Json<pages::MovieDetailPage>, ApiError> {
    Ok(Json(pages::movie_detail(&state.catalog, &input.uri).await?))
}

pub async fn api_people_search(
    State(state): State<AppState>,
    Query(input): Query<PersonInput>,
) -> Result<Json<pages::PeopleSearchPage>, ApiError> {
    Ok(Json(pages::people_search(&state.catalog, &input.person).await?))
}

pub async fn api_person_detail(
    State(state): State<AppState>,
    Query(input): Query<UriInput>,
) -> Result<Json<pages::PersonDetailPage>, ApiError> {
    Ok(Json(pages::person_detail(&state.catalog, &input.uri).await?))
}
