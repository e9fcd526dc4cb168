//! BizTime server binary
//!
//! Reads configuration (see [`biztime::config`]), initializes logging, opens
//! the store and serves until SIGTERM or Ctrl+C.

use anyhow::Result;
use biztime::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("biztime=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::load()?;
    let addr = config.server.bind_addr();
    let builder = ServerBuilder::new().with_environment(config.environment);

    let builder = match config.database.url.as_deref() {
        Some(url) => with_database(builder, url, config.database.max_connections).await?,
        None => {
            tracing::warn!("No database configured, using the in-memory store");
            builder.with_store(InMemoryStore::new())
        }
    };

    builder.serve(&addr).await
}

#[cfg(feature = "postgres")]
async fn with_database(
    builder: ServerBuilder,
    url: &str,
    max_connections: u32,
) -> Result<ServerBuilder> {
    let store = PostgresStore::connect(url, max_connections).await?;
    store.ensure_schema().await?;
    tracing::info!("Connected to PostgreSQL");
    Ok(builder.with_store(store))
}

#[cfg(not(feature = "postgres"))]
async fn with_database(
    _builder: ServerBuilder,
    _url: &str,
    _max_connections: u32,
) -> Result<ServerBuilder> {
    anyhow::bail!("A database URL is configured but biztime was built without the `postgres` feature")
}
