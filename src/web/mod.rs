//! HTTP front end.
//!
//! ## Routes
//!
//! - `GET /` home page with the search forms
//! - `POST /movies`, `POST /people` search result pages
//! - `GET /movie?uri=`, `GET /person?uri=` detail pages
//! - `GET /api/...` the same pages as JSON
//! - `GET /health` liveness probe

pub mod handlers;
pub mod render;

use axum::Router;
use axum::routing::{get, post};
use reelgraph_query::MovieCatalog;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

/// State shared by every handler. The catalog holds the one HTTP client.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<MovieCatalog>,
}

/// Build the application router over `catalog`.
pub fn router(catalog: Arc<MovieCatalog>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/movies", post(handlers::movie_search))
        .route("/movie", get(handlers::movie_detail))
        .route("/people", post(handlers::people_search))
        .route("/person", get(handlers::person_detail))
        .route("/health", get(handlers::health))
        .route("/api/movies", get(handlers::api_movie_search))
        .route("/api/movie", get(handlers::api_movie_detail))
        .route("/api/people", get(handlers::api_people_search))
        .route("/api/person", get(handlers::api_person_detail))
        .with_state(AppState { catalog })
}

// ---------------------------------------------------------------------------
// WebServer
// ---------------------------------------------------------------------------

/// A running web server. Aborted on drop.
pub struct WebServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl WebServer {
    /// Bind to the configured address and serve in a background task.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound.
    pub async fn start(catalog: Arc<MovieCatalog>, config: &ServerConfig) -> Result<Self> {
        let app = router(catalog);

        let bind_addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&bind_addr).await?;
        let addr = listener.local_addr()?;

        info!("web server listening on http://{addr}/");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("web server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for WebServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
