use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Shop API",
        version = "0.1.0",
        description = "Clients, suppliers, products and product images"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/v1", api = domain_clients::ApiDoc),
        (path = "/v1", api = domain_suppliers::ApiDoc),
        (path = "/v1", api = domain_products::ApiDoc),
        (path = "/v1", api = domain_images::ApiDoc)
    )
)]
pub struct ApiDoc;
