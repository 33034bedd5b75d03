use axum::Router;
use domain_images::{ImageService, PgImageRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgImageRepository::new(state.db.clone());
    handlers::router(ImageService::new(repository))
}
