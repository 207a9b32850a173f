use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::AppState;
use crate::datasource::ensure_unique_item_ids;
use crate::domain::{Sale, SaleAttribution, TrackedProduct};
use crate::error::AppError;
use crate::orchestration::{attribute_sale, attribute_sales, AttributionRun};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeRequest {
    pub sale: Sale,
    /// Overrides the configured catalog for this request.
    #[serde(default)]
    pub products: Option<Vec<TrackedProduct>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeBatchRequest {
    pub sales: Vec<Sale>,
    #[serde(default)]
    pub products: Option<Vec<TrackedProduct>>,
}

pub async fn post_attribute(
    State(state): State<AppState>,
    Json(body): Json<AttributeRequest>,
) -> Result<Json<SaleAttribution>, AppError> {
    let products = products_or_catalog(&state, body.products).await?;
    Ok(Json(attribute_sale(&body.sale, &products)))
}

pub async fn post_attribute_batch(
    State(state): State<AppState>,
    Json(body): Json<AttributeBatchRequest>,
) -> Result<Json<AttributionRun>, AppError> {
    let products = products_or_catalog(&state, body.products).await?;
    Ok(Json(attribute_sales(&body.sales, &products)))
}

pub async fn post_run(State(state): State<AppState>) -> Result<Json<AttributionRun>, AppError> {
    let orchestrator = state
        .orchestrator
        .as_ref()
        .ok_or_else(|| AppError::NotFound("no sale source configured".into()))?;
    let run = orchestrator.run().await?;
    Ok(Json(run))
}

async fn products_or_catalog(
    state: &AppState,
    supplied: Option<Vec<TrackedProduct>>,
) -> Result<Vec<TrackedProduct>, AppError> {
    match supplied {
        Some(products) => {
            ensure_unique_item_ids(&products).map_err(|e| AppError::BadRequest(e.to_string()))?;
            Ok(products)
        }
        None => Ok(state.catalog.load_products().await?),
    }
}
