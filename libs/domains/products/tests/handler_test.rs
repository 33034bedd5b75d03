//! Handler tests for the Products domain, including both stock policies.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::json;
use test_utils::{TestDataBuilder, TestDatabase};
use tower::ServiceExt;

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app(db: &TestDatabase, policy: StockPolicy) -> Router {
    let service = ProductService::new(PgProductRepository::new(db.connection()), policy);
    handlers::router(service)
}

fn patch(uri: String) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_product_returns_201() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("product_create_201");
    let supplier_id = db.seed_supplier(&builder.name("supplier", "acme")).await;

    let request = Request::builder()
        .method("POST")
        .uri("/product")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "name": "Anvil",
                "category": "hardware",
                "price": 99.5,
                "available_stock": 7,
                "suppler_id": supplier_id
            })
            .to_string(),
        ))
        .unwrap();

    let response = app(&db, StockPolicy::Reject).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.supplier_id, supplier_id);
    assert_eq!(product.available_stock, 7);
    assert_eq!(product.image_id, None);
}

#[tokio::test]
async fn test_create_product_for_missing_supplier_is_404() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("product_create_404");

    let request = Request::builder()
        .method("POST")
        .uri("/product")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "name": "Anvil",
                "category": "hardware",
                "price": 99.5,
                "available_stock": 7,
                "supplier_id": builder.missing_id()
            })
            .to_string(),
        ))
        .unwrap();

    let response = app(&db, StockPolicy::Reject).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(db.count_rows("product").await, 0);
}

#[tokio::test]
async fn test_list_products_empty_is_200() {
    let db = TestDatabase::new().await;

    let response = app(&db, StockPolicy::Reject)
        .oneshot(Request::get("/products").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_reduce_stock_decrements_exactly() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("product_reduce");
    let supplier_id = db.seed_supplier(&builder.name("supplier", "acme")).await;
    let product_id = db.seed_product(supplier_id, "Rope", 10).await;

    let before: Product = json_body(
        app(&db, StockPolicy::Reject)
            .oneshot(
                Request::get(format!("/product/{}", product_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
            .into_body(),
    )
    .await;

    let response = app(&db, StockPolicy::Reject)
        .oneshot(patch(format!("/product/{}?count=4", product_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let after: Product = json_body(response.into_body()).await;
    assert_eq!(after.available_stock, 6);
    assert!(after.last_update_date >= before.last_update_date);

    // The whole remaining stock may be taken
    let response = app(&db, StockPolicy::Reject)
        .oneshot(patch(format!("/product/{}?count=6", product_id)))
        .await
        .unwrap();
    let after: Product = json_body(response.into_body()).await;
    assert_eq!(after.available_stock, 0);
}

#[tokio::test]
async fn test_reduce_stock_beyond_available_is_conflict() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("product_reduce_conflict");
    let supplier_id = db.seed_supplier(&builder.name("supplier", "acme")).await;
    let product_id = db.seed_product(supplier_id, "Rope", 2).await;

    let response = app(&db, StockPolicy::Reject)
        .oneshot(patch(format!("/product/{}?count=3", product_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app(&db, StockPolicy::Reject)
        .oneshot(
            Request::get(format!("/product/{}", product_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.available_stock, 2);
}

#[tokio::test]
async fn test_allow_negative_policy_backorders() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("product_reduce_negative");
    let supplier_id = db.seed_supplier(&builder.name("supplier", "acme")).await;
    let product_id = db.seed_product(supplier_id, "Rope", 2).await;

    let response = app(&db, StockPolicy::AllowNegative)
        .oneshot(patch(format!("/product/{}?count=5", product_id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.available_stock, -3);
}

#[tokio::test]
async fn test_allow_negative_stops_at_integer_floor() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("product_reduce_floor");
    let supplier_id = db.seed_supplier(&builder.name("supplier", "acme")).await;
    let product_id = db.seed_product(supplier_id, "Rope", 0).await;

    let response = app(&db, StockPolicy::AllowNegative)
        .oneshot(patch(format!("/product/{}?count={}", product_id, i32::MAX)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.available_stock, -i32::MAX);

    // One more unit is still representable, two are not
    let response = app(&db, StockPolicy::AllowNegative)
        .oneshot(patch(format!("/product/{}?count=2", product_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app(&db, StockPolicy::AllowNegative)
        .oneshot(patch(format!("/product/{}?count=1", product_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.available_stock, i32::MIN);
}

#[tokio::test]
async fn test_reduce_stock_rejects_bad_count() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("product_reduce_bad_count");
    let product_id = builder.missing_id();

    for query in ["count=-1", "count=abc", ""] {
        let response = app(&db, StockPolicy::Reject)
            .oneshot(patch(format!("/product/{}?{}", product_id, query)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "query: {query}");
    }
}

#[tokio::test]
async fn test_reduce_stock_of_missing_product_is_404() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("product_reduce_404");

    for policy in [StockPolicy::Reject, StockPolicy::AllowNegative] {
        let response = app(&db, policy)
            .oneshot(patch(format!("/product/{}?count=1", builder.missing_id())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_delete_product() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("product_delete");
    let supplier_id = db.seed_supplier(&builder.name("supplier", "acme")).await;
    let product_id = db.seed_product(supplier_id, "Rope", 1).await;

    let delete = |id: uuid::Uuid| {
        Request::builder()
            .method("DELETE")
            .uri(format!("/product/{}", id))
            .body(Body::empty())
            .unwrap()
    };

    let response = app(&db, StockPolicy::Reject)
        .oneshot(delete(product_id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app(&db, StockPolicy::Reject)
        .oneshot(delete(product_id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
