//! Web server binary for reelgraph.

use reelgraph::{AppConfig, WebServer};
use reelgraph_query::MovieCatalog;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("reelgraph=info,reelgraph_query=info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;
    info!(
        endpoint = %config.endpoint.url,
        timeout_seconds = config.endpoint.timeout_seconds,
        "starting reelgraph"
    );

    let catalog = Arc::new(MovieCatalog::from_config(&config.endpoint)?);
    let server = WebServer::start(catalog, &config.server).await?;
    info!("open http://{}/ in a browser", server.addr());

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    server.shutdown();
    Ok(())
}
