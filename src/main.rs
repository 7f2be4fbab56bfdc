use anyhow::Context;
use tracing_subscriber::EnvFilter;

use folio_api::{
    api::{create_router, AppState},
    catalog::{CatalogStore, JsonFileSource},
    config::Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("folio_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let source = JsonFileSource::new(&config.catalog_path, &config.popular_path);
    let store = CatalogStore::load(&source)
        .await
        .context("Failed to load catalog artifacts")?;

    let app = create_router(AppState::from_config(store, &config));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
