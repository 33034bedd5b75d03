use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    AuditEvent, AuditOutcome, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use domain_addresses::{Address, AddressInput};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::SupplierResult;
use crate::models::{CreateSupplier, Supplier};
use crate::repository::SupplierRepository;
use crate::service::SupplierService;

pub const TAG: &str = "Suppliers";

/// OpenAPI documentation for the Suppliers API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_suppliers,
        create_supplier,
        get_supplier,
        update_supplier_address,
        delete_supplier,
    ),
    components(
        schemas(Supplier, CreateSupplier, Address, AddressInput),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Supplier management endpoints")
    )
)]
pub struct ApiDoc;

pub fn router<R: SupplierRepository + 'static>(service: SupplierService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/suppliers", get(list_suppliers))
        .route("/supplier", post(create_supplier))
        .route(
            "/supplier/{id}",
            get(get_supplier)
                .patch(update_supplier_address)
                .delete(delete_supplier),
        )
        .with_state(shared_service)
}

/// List suppliers
#[utoipa::path(
    get,
    path = "/suppliers",
    tag = TAG,
    responses(
        (status = 200, description = "List of suppliers, possibly empty", body = Vec<Supplier>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_suppliers<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
) -> SupplierResult<Json<Vec<Supplier>>> {
    let suppliers = service.list_suppliers().await?;
    Ok(Json(suppliers))
}

/// Create a supplier with its address
#[utoipa::path(
    post,
    path = "/supplier",
    tag = TAG,
    request_body = CreateSupplier,
    responses(
        (status = 201, description = "Supplier created", body = Supplier),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_supplier<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateSupplier>,
) -> SupplierResult<impl IntoResponse> {
    let supplier = service.create_supplier(input).await?;

    AuditEvent::from_request(
        &headers,
        "supplier.create",
        Some(format!("supplier:{}", supplier.id)),
        AuditOutcome::Success,
    )
    .with_details(json!({
        "name": supplier.name,
        "address_id": supplier.address_id,
    }))
    .log();

    Ok((StatusCode::CREATED, Json(supplier)))
}

/// Get a supplier by ID
#[utoipa::path(
    get,
    path = "/supplier/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Supplier ID")
    ),
    responses(
        (status = 200, description = "Supplier found", body = Supplier),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_supplier<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    UuidPath(id): UuidPath,
) -> SupplierResult<Json<Supplier>> {
    let supplier = service.get_supplier(id).await?;
    Ok(Json(supplier))
}

/// Replace a supplier's address
#[utoipa::path(
    patch,
    path = "/supplier/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Supplier ID")
    ),
    request_body = AddressInput,
    responses(
        (status = 200, description = "Supplier with its updated address", body = Supplier),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_supplier_address<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<AddressInput>,
) -> SupplierResult<Json<Supplier>> {
    let supplier = service.update_supplier_address(id, input).await?;

    AuditEvent::from_request(
        &headers,
        "supplier.update_address",
        Some(format!("supplier:{}", id)),
        AuditOutcome::Success,
    )
    .log();

    Ok(Json(supplier))
}

/// Delete a supplier and its address
#[utoipa::path(
    delete,
    path = "/supplier/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Supplier ID")
    ),
    responses(
        (status = 204, description = "Supplier deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_supplier<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
) -> SupplierResult<impl IntoResponse> {
    let result = service.delete_supplier(id).await;

    AuditEvent::from_request(
        &headers,
        "supplier.delete",
        Some(format!("supplier:{}", id)),
        AuditOutcome::of(&result),
    )
    .log();

    result?;
    Ok(StatusCode::NO_CONTENT)
}
