use axum::http::StatusCode;
use dropmatch::api::{self, AppState};
use dropmatch::datasource::{MockCatalog, MockSaleSource};
use dropmatch::domain::{ItemId, Sale, TrackedProduct, VariantMap, VariantMapping};
use dropmatch::Orchestrator;
use std::sync::Arc;
use tower::util::ServiceExt;

fn catalog() -> MockCatalog {
    MockCatalog::new().with_products(vec![
        TrackedProduct {
            ebay_item_id: ItemId::new("111"),
            custom_label: Some("B0ABC12345".to_string()),
            ebay_title: Some("Blue Widget Large Size".to_string()),
            source_url: Some("https://supplier.example/widget".to_string()),
            variant_map: Some(VariantMap::Array(vec![VariantMapping {
                ebay_specifics: Some([("Color".to_string(), "Red".to_string())].into()),
                source_variant_id: Some("v1".to_string()),
                ..Default::default()
            }])),
            ..Default::default()
        },
        TrackedProduct {
            sku: Some("MUG-CER".to_string()),
            title: Some("Handmade Ceramic Coffee Mug".to_string()),
            ..TrackedProduct::new("222")
        },
    ])
}

fn app_with(orchestrator: Option<Arc<Orchestrator>>) -> axum::Router {
    api::create_router(AppState::new(Arc::new(catalog()), orchestrator))
}

async fn request(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = axum::http::Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(axum::body::Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(axum::body::Body::empty()).unwrap(),
    };

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

#[tokio::test]
async fn health_and_ready() {
    let (status, body) = request(app_with(None), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = request(app_with(None), "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"], 2);
}

#[tokio::test]
async fn list_products() {
    let (status, body) = request(app_with(None), "GET", "/v1/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["itemIds"], serde_json::json!(["111", "222"]));
}

#[tokio::test]
async fn attribute_against_catalog() {
    let body = serde_json::json!({"sale": {"itemId": "111", "variant": "Color: Red"}});
    let (status, json) = request(app_with(None), "POST", "/v1/attribute", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outcome"], "resolved");
    assert_eq!(json["itemId"], "111");
    assert_eq!(json["tier"]["kind"], "itemId");
    assert_eq!(json["resolution"]["kind"], "resolved");
    assert_eq!(json["resolution"]["sourceVariantId"], "v1");
    assert_eq!(json["resolution"]["sourceUrl"], "https://supplier.example/widget");
    assert_eq!(json["resolution"]["specifics"]["Color"], "Red");
}

#[tokio::test]
async fn attribute_unmatched_sale() {
    let body = serde_json::json!({"sale": {"sku": "X1"}});
    let (status, json) = request(app_with(None), "POST", "/v1/attribute", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outcome"], "unmatched");
    assert_eq!(json["itemId"], serde_json::Value::Null);
    assert_eq!(
        json["resolution"],
        serde_json::json!({"kind": "fallback", "ebayVariant": "", "sku": "X1"})
    );
}

#[tokio::test]
async fn attribute_with_supplied_products() {
    let body = serde_json::json!({
        "sale": {"sku": "b0abc12345"},
        "products": [{"ebayItemId": "999", "customLabel": "B0ABC12345"}]
    });
    let (status, json) = request(app_with(None), "POST", "/v1/attribute", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["itemId"], "999");
    assert_eq!(json["tier"]["kind"], "label");
    assert_eq!(json["outcome"], "needsReview");
}

#[tokio::test]
async fn attribute_rejects_duplicate_supplied_item_ids() {
    let body = serde_json::json!({
        "sale": {"sku": "A"},
        "products": [{"ebayItemId": "1"}, {"ebayItemId": "1"}]
    });
    let (status, json) = request(app_with(None), "POST", "/v1/attribute", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("duplicate"));
}

#[tokio::test]
async fn attribute_batch_summarizes_outcomes() {
    let body = serde_json::json!({
        "sales": [
            {"itemId": "111", "variant": "Color: Red"},
            {"title": "Ceramic Coffee Mug Large", "sku": "MUG-CER-BLK"},
            {"sku": "NOPE"},
            {"itemId": "222"}
        ]
    });
    let (status, json) = request(app_with(None), "POST", "/v1/attribute/batch", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["attributions"].as_array().unwrap().len(), 4);
    assert_eq!(
        json["summary"],
        serde_json::json!({
            "total": 4,
            "resolved": 1,
            "needsReview": 1,
            "unmatched": 1,
            "nothingToResolve": 1
        })
    );
}

#[tokio::test]
async fn run_without_sale_source_is_not_found() {
    let (status, json) = request(app_with(None), "POST", "/v1/runs", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn run_with_sale_source() {
    let sales = MockSaleSource::new().with_sales(vec![
        Sale {
            item_id: Some(ItemId::new("111")),
            variant: Some("Color: Red".to_string()),
            ..Default::default()
        },
        Sale {
            sku: Some("mug-cer".to_string()),
            variant: Some("Color: Black".to_string()),
            ..Default::default()
        },
    ]);
    let orchestrator = Orchestrator::new(Arc::new(catalog()), Arc::new(sales));

    let app = app_with(Some(Arc::new(orchestrator)));
    let (status, json) = request(app, "POST", "/v1/runs", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"]["resolved"], 1);
    assert_eq!(json["summary"]["needsReview"], 1);
    assert_eq!(json["attributions"][1]["itemId"], "222");
}

#[tokio::test]
async fn catalog_failure_is_internal_error() {
    let app = api::create_router(AppState::new(Arc::new(MockCatalog::new().failing()), None));
    let body = serde_json::json!({"sale": {"sku": "A"}});
    let (status, json) = request(app, "POST", "/v1/attribute", Some(body)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].is_string());
}
