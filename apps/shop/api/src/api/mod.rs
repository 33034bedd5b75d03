use axum::{Router, middleware, routing::get};

pub mod clients;
pub mod health;
pub mod images;
pub mod products;
pub mod suppliers;

/// API version segment; `create_router` adds the `/api` prefix in front.
pub const API_VERSION_PATH: &str = "/v1";

/// All domain routes under `/v1`, with request metrics.
///
/// Returns a stateless Router; each domain router already carries its own
/// service state.
pub fn routes(state: &crate::state::AppState) -> Router {
    let v1 = Router::new()
        .merge(clients::router(state))
        .merge(suppliers::router(state))
        .merge(products::router(state))
        .merge(images::router(state))
        .route_layer(middleware::from_fn(observability::metrics_middleware));

    Router::new().nest(API_VERSION_PATH, v1)
}

/// `GET /ready`, checking the database connection.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// `GET /metrics` in Prometheus text format.
pub fn metrics_router() -> Router {
    Router::new().route("/metrics", get(observability::metrics_handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment, ProductsConfig};
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{AppInfo, server::ServerConfig};
    use database::postgres::PostgresConfig;
    use domain_products::StockPolicy;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState {
            config: Config {
                app: AppInfo {
                    name: "shop_api",
                    version: "0.0.0",
                },
                database: PostgresConfig::new("postgres://localhost/shop"),
                server: ServerConfig::default(),
                environment: Environment::Development,
                products: ProductsConfig {
                    stock_policy: StockPolicy::Reject,
                },
            },
            db: MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        }
    }

    #[tokio::test]
    async fn test_routes_are_versioned() {
        let app = routes(&state());

        let response = app
            .clone()
            .oneshot(Request::get("/v1/client/not-a-uuid").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "INVALID_UUID");

        // Unversioned paths are not served
        let response = app
            .oneshot(Request::get("/client/not-a-uuid").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_product_count_is_validated_before_the_database() {
        let app = routes(&state());

        let response = app
            .oneshot(
                Request::patch("/v1/product/0190f1f4-0000-7000-8000-000000000000?count=-2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
