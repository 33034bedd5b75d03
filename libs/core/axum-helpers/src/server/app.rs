use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::{cors_layer, security_headers};
use axum::{Router, http::StatusCode, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Upper bound for a single request, including the database round trips.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Wraps the API routes with documentation and cross-cutting middleware.
///
/// - `apis` is nested under `/api`
/// - Swagger UI at `/swagger-ui` (spec at `/api-docs/openapi.json`), plus
///   `/redoc`, `/rapidoc` and `/scalar`
/// - JSON 404 fallback
/// - request tracing, request timeout, security headers, CORS, compression
///
/// Health endpoints are merged by the caller.
///
/// # Errors
/// Fails when `CORS_ALLOWED_ORIGIN` is missing, empty or malformed.
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors = cors_layer()?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serves `router` until SIGINT/SIGTERM, then runs `cleanup`.
///
/// In-flight requests are drained first; `cleanup` (closing the pool,
/// typically) gets at most `shutdown_timeout`.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    serve_with_shutdown(listener, router, shutdown_timeout, cleanup, shutdown_signal()).await
}

/// [`create_production_app`] with an explicit listener and shutdown trigger.
pub async fn serve_with_shutdown<F, S>(
    listener: TcpListener,
    router: Router,
    shutdown_timeout: Duration,
    cleanup: F,
    signal: S,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
    S: Future<Output = ()> + Send + 'static,
{
    info!("Server starting on {}", listener.local_addr()?);

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(signal)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Server encountered an error"));

    info!(timeout = ?shutdown_timeout, "Running shutdown cleanup");
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed"),
        Err(_) => warn!(timeout = ?shutdown_timeout, "Cleanup timed out, forcing shutdown"),
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn test_cleanup_runs_after_shutdown_signal() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let cleaned = Arc::new(AtomicBool::new(false));
        let flag = cleaned.clone();

        serve_with_shutdown(
            listener,
            Router::new(),
            Duration::from_secs(1),
            async move { flag.store(true, Ordering::SeqCst) },
            async {},
        )
        .await
        .unwrap();

        assert!(cleaned.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_slow_cleanup_is_cut_off() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

        let result = serve_with_shutdown(
            listener,
            Router::new(),
            Duration::from_millis(20),
            tokio::time::sleep(Duration::from_secs(60)),
            async {},
        )
        .await;

        assert!(result.is_ok());
    }
}
