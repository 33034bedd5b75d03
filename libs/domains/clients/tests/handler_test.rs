//! Handler tests for the Clients domain
//!
//! Each test drives the clients router with `oneshot` against a fresh
//! PostgreSQL container, checking status codes, JSON shape and the rows
//! left behind.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_clients::*;
use http_body_util::BodyExt;
use sea_orm::ConnectionTrait;
use serde_json::{Value, json};
use test_utils::{TestDataBuilder, TestDatabase};
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app(db: &TestDatabase) -> Router {
    let service = ClientService::new(PgClientRepository::new(db.connection()));
    handlers::router(service)
}

fn client_payload(name: &str, surname: &str) -> Value {
    json!({
        "client_name": name,
        "client_sure_name": surname,
        "birth_date": "1990-04-01",
        "gender": "male",
        "address": { "country": "US", "city": "Columbus", "street": "Main St" }
    })
}

fn post_client(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/client")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap()
}

async fn create(db: &TestDatabase, name: &str, surname: &str) -> Client {
    let response = app(db)
        .oneshot(post_client(&client_payload(name, surname)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_client_returns_201_with_address() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("client_create_201");
    let name = builder.name("client", "alan");

    let first = create(&db, &name, "Turing").await;
    let second = create(&db, &name, "Turing").await;

    assert!(!first.id.is_nil());
    assert_ne!(first.id, second.id);
    assert_eq!(first.client_surname, "Turing");
    assert_eq!(first.address.city, "Columbus");
    assert_eq!(first.address_id, first.address.id);
    assert_eq!(db.count_rows("address").await, 2);
}

#[tokio::test]
async fn test_create_client_validates_input() {
    let db = TestDatabase::new().await;

    let mut payload = client_payload("", "Turing");
    payload["address"]["city"] = json!("");

    let response = app(&db).oneshot(post_client(&payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(db.count_rows("address").await, 0);
}

#[tokio::test]
async fn test_list_clients_empty_is_200() {
    let db = TestDatabase::new().await;

    let response = app(&db)
        .oneshot(Request::get("/clients").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let clients: Vec<Client> = json_body(response.into_body()).await;
    assert!(clients.is_empty());
}

#[tokio::test]
async fn test_list_clients_applies_limit_and_offset() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("client_list_page");

    for surname in ["One", "Two", "Three"] {
        create(&db, &builder.name("client", "page"), surname).await;
    }

    let response = app(&db)
        .oneshot(Request::get("/clients?limit=2&offset=1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let clients: Vec<Client> = json_body(response.into_body()).await;
    assert_eq!(clients.len(), 2);
    assert_eq!(clients[0].client_surname, "Two");

    // Zero means no LIMIT clause
    let response = app(&db)
        .oneshot(Request::get("/clients?limit=0").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let clients: Vec<Client> = json_body(response.into_body()).await;
    assert_eq!(clients.len(), 3);
}

#[tokio::test]
async fn test_list_clients_rejects_negative_limit() {
    let db = TestDatabase::new().await;

    let response = app(&db)
        .oneshot(Request::get("/clients?limit=-1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_QUERY");
    assert!(body["code"].is_number());

    let response = app(&db)
        .oneshot(Request::get("/clients?offset=abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_QUERY");
}

#[tokio::test]
async fn test_search_clients_by_name_and_surname() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("client_search");
    let name = builder.name("client", "search");

    let created = create(&db, &name, "Knuth").await;
    create(&db, &name, "Dijkstra").await;

    let response = app(&db)
        .oneshot(
            Request::get(format!("/client?name={}&surname=Knuth", name))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let clients: Vec<Client> = json_body(response.into_body()).await;
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].id, created.id);

    let response = app(&db)
        .oneshot(
            Request::get(format!("/client?name={}&surname=Nobody", name))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let clients: Vec<Client> = json_body(response.into_body()).await;
    assert!(clients.is_empty());
}

#[tokio::test]
async fn test_search_clients_requires_surname() {
    let db = TestDatabase::new().await;

    let response = app(&db)
        .oneshot(Request::get("/client?name=Ada").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app(&db)
        .oneshot(Request::get("/client?name=Ada&surname=").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_client_returns_404_for_missing() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("client_get_404");

    let response = app(&db)
        .oneshot(
            Request::get(format!("/client/{}", builder.missing_id()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_client_rejects_malformed_id() {
    let db = TestDatabase::new().await;

    let response = app(&db)
        .oneshot(Request::get("/client/not-a-uuid").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_client_address() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("client_update_address");
    let created = create(&db, &builder.name("client", "move"), "Mover").await;

    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/client/{}", created.id))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "country": "CA", "city": "Toronto", "street": "King St" }).to_string(),
        ))
        .unwrap();

    let response = app(&db).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Client = json_body(response.into_body()).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.address.id, created.address.id);
    assert_eq!(updated.address.city, "Toronto");
}

#[tokio::test]
async fn test_update_missing_client_returns_404() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("client_update_404");

    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/client/{}", builder.missing_id()))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "country": "CA", "city": "Toronto", "street": "King St" }).to_string(),
        ))
        .unwrap();

    let response = app(&db).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_client_removes_address() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("client_delete");
    let created = create(&db, &builder.name("client", "gone"), "Gone").await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/client/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app(&db).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(db.count_rows("client").await, 0);
    assert_eq!(db.count_rows("address").await, 0);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/client/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app(&db).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_failed_client_insert_rolls_back_address() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("client_create_rollback");

    // The address insert succeeds, the client insert cannot
    db.connection
        .execute_unprepared("DROP TABLE client")
        .await
        .unwrap();

    let input: CreateClient =
        serde_json::from_value(client_payload(&builder.name("client", "rollback"), "Turing")).unwrap();
    let result = PgClientRepository::new(db.connection()).create(input).await;

    assert!(matches!(result, Err(ClientError::InsertFailed(_))));
    assert_eq!(db.count_rows("address").await, 0);
}
