use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::AppState;
use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsResponse {
    pub count: usize,
    pub item_ids: Vec<String>,
}

pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<ProductsResponse>, AppError> {
    let products = state.catalog.load_products().await?;
    let item_ids: Vec<String> = products
        .iter()
        .map(|p| p.ebay_item_id.as_str().to_string())
        .collect();

    Ok(Json(ProductsResponse {
        count: item_ids.len(),
        item_ids,
    }))
}
