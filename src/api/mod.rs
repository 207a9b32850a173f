pub mod attribute;
pub mod health;
pub mod products;

use crate::datasource::ProductCatalog;
use crate::orchestration::Orchestrator;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn ProductCatalog>,
    /// Present only when a sale source is configured.
    pub orchestrator: Option<Arc<Orchestrator>>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn ProductCatalog>, orchestrator: Option<Arc<Orchestrator>>) -> Self {
        Self {
            catalog,
            orchestrator,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/products", get(products::get_products))
        .route("/v1/attribute", post(attribute::post_attribute))
        .route("/v1/attribute/batch", post(attribute::post_attribute_batch))
        .route("/v1/runs", post(attribute::post_run))
        .layer(cors)
        .with_state(state)
}
