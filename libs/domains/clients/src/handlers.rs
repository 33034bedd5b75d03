use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AuditEvent, AuditOutcome, UuidPath, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestQueryResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use domain_addresses::{Address, AddressInput};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ClientResult;
use crate::models::{Client, ClientListParams, ClientSearch, CreateClient};
use crate::repository::ClientRepository;
use crate::service::ClientService;

pub const TAG: &str = "Clients";

/// OpenAPI documentation for the Clients API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_clients,
        search_clients,
        create_client,
        get_client,
        update_client_address,
        delete_client,
    ),
    components(
        schemas(Client, CreateClient, ClientListParams, ClientSearch, Address, AddressInput),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            BadRequestQueryResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Client management endpoints")
    )
)]
pub struct ApiDoc;

/// Client routes, relative to the API version prefix
pub fn router<R: ClientRepository + 'static>(service: ClientService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/clients", get(list_clients))
        .route("/client", get(search_clients).post(create_client))
        .route(
            "/client/{id}",
            get(get_client)
                .patch(update_client_address)
                .delete(delete_client),
        )
        .with_state(shared_service)
}

/// List clients
#[utoipa::path(
    get,
    path = "/clients",
    tag = TAG,
    params(ClientListParams),
    responses(
        (status = 200, description = "List of clients, possibly empty", body = Vec<Client>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_clients<R: ClientRepository>(
    State(service): State<Arc<ClientService<R>>>,
    ValidatedQuery(params): ValidatedQuery<ClientListParams>,
) -> ClientResult<Json<Vec<Client>>> {
    let clients = service.list_clients(params).await?;
    Ok(Json(clients))
}

/// Find clients by exact name and surname
#[utoipa::path(
    get,
    path = "/client",
    tag = TAG,
    params(ClientSearch),
    responses(
        (status = 200, description = "Matching clients, possibly empty", body = Vec<Client>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_clients<R: ClientRepository>(
    State(service): State<Arc<ClientService<R>>>,
    ValidatedQuery(search): ValidatedQuery<ClientSearch>,
) -> ClientResult<Json<Vec<Client>>> {
    let clients = service.search_clients(search).await?;
    Ok(Json(clients))
}

/// Create a client with its address
#[utoipa::path(
    post,
    path = "/client",
    tag = TAG,
    request_body = CreateClient,
    responses(
        (status = 201, description = "Client created", body = Client),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_client<R: ClientRepository>(
    State(service): State<Arc<ClientService<R>>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateClient>,
) -> ClientResult<impl IntoResponse> {
    let client = service.create_client(input).await?;

    AuditEvent::from_request(
        &headers,
        "client.create",
        Some(format!("client:{}", client.id)),
        AuditOutcome::Success,
    )
    .with_details(json!({ "address_id": client.address_id }))
    .log();

    Ok((StatusCode::CREATED, Json(client)))
}

/// Get a client by ID
#[utoipa::path(
    get,
    path = "/client/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client found", body = Client),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_client<R: ClientRepository>(
    State(service): State<Arc<ClientService<R>>>,
    UuidPath(id): UuidPath,
) -> ClientResult<Json<Client>> {
    let client = service.get_client(id).await?;
    Ok(Json(client))
}

/// Replace a client's address
#[utoipa::path(
    patch,
    path = "/client/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Client ID")
    ),
    request_body = AddressInput,
    responses(
        (status = 200, description = "Client with its updated address", body = Client),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_client_address<R: ClientRepository>(
    State(service): State<Arc<ClientService<R>>>,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<AddressInput>,
) -> ClientResult<Json<Client>> {
    let client = service.update_client_address(id, input).await?;

    AuditEvent::from_request(
        &headers,
        "client.update_address",
        Some(format!("client:{}", id)),
        AuditOutcome::Success,
    )
    .log();

    Ok(Json(client))
}

/// Delete a client and its address
#[utoipa::path(
    delete,
    path = "/client/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Client ID")
    ),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_client<R: ClientRepository>(
    State(service): State<Arc<ClientService<R>>>,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
) -> ClientResult<impl IntoResponse> {
    let result = service.delete_client(id).await;

    AuditEvent::from_request(
        &headers,
        "client.delete",
        Some(format!("client:{}", id)),
        AuditOutcome::of(&result),
    )
    .log();

    result?;
    Ok(StatusCode::NO_CONTENT)
}
