//! Handler tests for the Suppliers domain

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_suppliers::*;
use http_body_util::BodyExt;
use sea_orm::ConnectionTrait;
use serde_json::{Value, json};
use test_utils::{TestDataBuilder, TestDatabase};
use tower::ServiceExt;

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app(db: &TestDatabase) -> Router {
    let service = SupplierService::new(PgSupplierRepository::new(db.connection()));
    handlers::router(service)
}

fn post_supplier(payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/supplier")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn delete(id: impl std::fmt::Display) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(format!("/supplier/{}", id))
        .body(Body::empty())
        .unwrap()
}

async fn create(db: &TestDatabase, name: &str) -> Supplier {
    let response = app(db)
        .oneshot(post_supplier(json!({
            "name": name,
            "phone": "+1-000",
            "address": { "country": "US", "city": "Columbus", "street": "Main St" }
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_supplier_echoes_address() {
    let db = TestDatabase::new().await;

    let supplier = create(&db, "Acme").await;

    assert!(!supplier.id.is_nil());
    assert_eq!(supplier.name, "Acme");
    assert_eq!(supplier.phone, "+1-000");
    assert!(!supplier.address.id.is_nil());
    assert_ne!(supplier.address.id, supplier.id);
    assert_eq!(supplier.address.street, "Main St");
}

#[tokio::test]
async fn test_create_supplier_rejects_bad_phone() {
    let db = TestDatabase::new().await;

    let response = app(&db)
        .oneshot(post_supplier(json!({
            "name": "Acme",
            "phone": "not a phone",
            "address": { "country": "US", "city": "Columbus", "street": "Main St" }
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(db.count_rows("supplier").await, 0);
}

#[tokio::test]
async fn test_list_and_get_suppliers() {
    let db = TestDatabase::new().await;

    let response = app(&db)
        .oneshot(Request::get("/suppliers").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let suppliers: Vec<Supplier> = json_body(response.into_body()).await;
    assert!(suppliers.is_empty());

    let created = create(&db, "Globex").await;

    let response = app(&db)
        .oneshot(
            Request::get(format!("/supplier/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Supplier = json_body(response.into_body()).await;
    assert_eq!(fetched.address, created.address);
}

#[tokio::test]
async fn test_update_supplier_address() {
    let db = TestDatabase::new().await;
    let created = create(&db, "Initech").await;

    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/supplier/{}", created.id))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "country": "US", "city": "Austin", "street": "Congress Ave" }).to_string(),
        ))
        .unwrap();
    let response = app(&db).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Supplier = json_body(response.into_body()).await;
    assert_eq!(updated.name, "Initech");
    assert_eq!(updated.address.city, "Austin");
}

#[tokio::test]
async fn test_delete_supplier_removes_address() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("supplier_delete");
    let created = create(&db, "Umbrella").await;

    let response = app(&db).oneshot(delete(created.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(db.count_rows("address").await, 0);

    let response = app(&db).oneshot(delete(builder.missing_id())).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_supplier_with_products_is_conflict() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("supplier_delete_conflict");
    let supplier_id = db.seed_supplier(&builder.name("supplier", "busy")).await;
    db.seed_product(supplier_id, &builder.name("product", "widget"), 5)
        .await;

    let response = app(&db).oneshot(delete(supplier_id)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(db.count_rows("supplier").await, 1);
    assert_eq!(db.count_rows("address").await, 1);
}

#[tokio::test]
async fn test_failed_supplier_insert_rolls_back_address() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("supplier_create_rollback");

    // The address insert succeeds, the supplier insert cannot
    db.connection
        .execute_unprepared("DROP TABLE supplier CASCADE")
        .await
        .unwrap();

    let input: CreateSupplier = serde_json::from_value(json!({
        "name": builder.name("supplier", "rollback"),
        "phone": builder.phone(),
        "address": { "country": "US", "city": "Columbus", "street": "Main St" }
    }))
    .unwrap();
    let result = PgSupplierRepository::new(db.connection()).create(input).await;

    assert!(matches!(result, Err(SupplierError::InsertFailed(_))));
    assert_eq!(db.count_rows("address").await, 0);
}
