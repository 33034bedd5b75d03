use axum::Router;
use domain_clients::{ClientService, PgClientRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgClientRepository::new(state.db.clone());
    handlers::router(ClientService::new(repository))
}
