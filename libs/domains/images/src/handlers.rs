use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    AuditEvent, AuditOutcome, UuidPath,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ImageError, ImageResult};
use crate::models::{ImageInfo, ImageUpload};
use crate::repository::ImageRepository;
use crate::service::ImageService;

pub const TAG: &str = "Images";

/// Multipart field carrying the image bytes
pub const IMAGE_FIELD: &str = "image";

/// Request body cap for uploads (10 MiB)
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const RAW_CACHE_CONTROL: &str = "public, max-age=60";

/// OpenAPI documentation for the Images API
#[derive(OpenApi)]
#[openapi(
    paths(
        upload_image,
        get_image,
        replace_image,
        delete_image,
        get_product_image,
    ),
    components(
        schemas(ImageInfo, ImageUpload),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Product image upload and download")
    )
)]
pub struct ApiDoc;

pub fn router<R: ImageRepository + 'static>(service: ImageService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/image/{id}",
            post(upload_image)
                .get(get_image)
                .patch(replace_image)
                .delete(delete_image),
        )
        .route("/products/{id}/image", get(get_product_image))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(shared_service)
}

/// Pull the `image` field out of a multipart body.
async fn read_image_field(multipart: Result<Multipart, MultipartRejection>) -> ImageResult<Vec<u8>> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(IMAGE_FIELD) {
            return Ok(field.bytes().await?.to_vec());
        }
    }

    Err(ImageError::Validation(format!(
        "multipart field '{}' is required",
        IMAGE_FIELD
    )))
}

fn raw_image(data: Vec<u8>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/octet-stream"),
            (header::CACHE_CONTROL, RAW_CACHE_CONTROL),
        ],
        data,
    )
}

/// Upload an image for a product
#[utoipa::path(
    post,
    path = "/image/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body(content = ImageUpload, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image stored and linked to the product", body = ImageInfo),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 413, description = "Upload exceeds 10 MiB"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn upload_image<R: ImageRepository>(
    State(service): State<Arc<ImageService<R>>>,
    headers: HeaderMap,
    UuidPath(product_id): UuidPath,
    multipart: Result<Multipart, MultipartRejection>,
) -> ImageResult<impl IntoResponse> {
    let data = read_image_field(multipart).await?;
    let info = service.add_image(product_id, data).await?;

    AuditEvent::from_request(
        &headers,
        "image.upload",
        Some(format!("image:{}", info.id)),
        AuditOutcome::Success,
    )
    .with_details(json!({ "product_id": product_id, "size": info.size }))
    .log();

    Ok((StatusCode::CREATED, Json(info)))
}

/// Download an image
#[utoipa::path(
    get,
    path = "/image/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Raw image bytes", content_type = "application/octet-stream", body = Vec<u8>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_image<R: ImageRepository>(
    State(service): State<Arc<ImageService<R>>>,
    UuidPath(id): UuidPath,
) -> ImageResult<impl IntoResponse> {
    let data = service.get_image(id).await?;
    Ok(raw_image(data))
}

/// Replace an image's bytes
#[utoipa::path(
    patch,
    path = "/image/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Image ID")
    ),
    request_body(content = ImageUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image replaced", body = ImageInfo),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 413, description = "Upload exceeds 10 MiB"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn replace_image<R: ImageRepository>(
    State(service): State<Arc<ImageService<R>>>,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
    multipart: Result<Multipart, MultipartRejection>,
) -> ImageResult<Json<ImageInfo>> {
    let data = read_image_field(multipart).await?;
    let info = service.update_image(id, data).await?;

    AuditEvent::from_request(
        &headers,
        "image.replace",
        Some(format!("image:{}", id)),
        AuditOutcome::Success,
    )
    .with_details(json!({ "size": info.size }))
    .log();

    Ok(Json(info))
}

/// Delete an image; its product keeps existing without one
#[utoipa::path(
    delete,
    path = "/image/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Image ID")
    ),
    responses(
        (status = 204, description = "Image deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_image<R: ImageRepository>(
    State(service): State<Arc<ImageService<R>>>,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
) -> ImageResult<impl IntoResponse> {
    service.delete_image(id).await?;

    AuditEvent::from_request(
        &headers,
        "image.delete",
        Some(format!("image:{}", id)),
        AuditOutcome::Success,
    )
    .log();

    Ok(StatusCode::NO_CONTENT)
}

/// Download the image linked to a product
#[utoipa::path(
    get,
    path = "/products/{id}/image",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Raw image bytes", content_type = "application/octet-stream", body = Vec<u8>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product_image<R: ImageRepository>(
    State(service): State<Arc<ImageService<R>>>,
    UuidPath(product_id): UuidPath,
) -> ImageResult<impl IntoResponse> {
    let data = service.get_product_image(product_id).await?;
    Ok(raw_image(data))
}
