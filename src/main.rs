use anyhow::Context;
use dropmatch::{
    api, config::Config, JsonFileCatalog, JsonFileSaleSource, Orchestrator, ProductCatalog,
};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    let config = Config::from_env().context("configuration error")?;

    let catalog: Arc<dyn ProductCatalog> =
        Arc::new(JsonFileCatalog::new(config.products_path.clone()));

    // Fail fast on an unreadable or inconsistent catalog.
    let products = catalog
        .load_products()
        .await
        .with_context(|| format!("failed to load {}", config.products_path.display()))?;
    tracing::info!(count = products.len(), "Catalog loaded");

    let orchestrator = config.sales_path.as_ref().map(|path| {
        Arc::new(Orchestrator::new(
            catalog.clone(),
            Arc::new(JsonFileSaleSource::new(path.clone())),
        ))
    });

    let app = api::create_router(api::AppState::new(catalog, orchestrator));

    let addr = SocketAddr::new(config.bind_addr, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
