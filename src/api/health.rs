use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::AppState;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Ready once the catalog can be loaded.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    match state.catalog.load_products().await {
        Ok(products) => (
            StatusCode::OK,
            Json(serde_json::json!({"status": "ready", "products": products.len()})),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Catalog not loadable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({"status": "unavailable", "error": e.to_string()})),
            )
        }
    }
}
