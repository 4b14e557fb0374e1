//! reelgraph: browse movies, directors and actors from a public knowledge graph.
//!
//! The web front end accepts a movie title or a person name, looks them up
//! through [`reelgraph_query`], and renders the results as linked pages.
//!
//! # Architecture
//!
//! - **Pages**: the four request flows, from raw input to a page model
//! - **Web**: axum routes rendering page models as HTML or JSON
//! - **Config**: TOML settings for the listener and the remote endpoint

pub mod canonical;
pub mod config;
pub mod error;
pub mod pages;
pub mod web;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use web::WebServer;
