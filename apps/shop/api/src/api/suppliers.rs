use axum::Router;
use domain_suppliers::{PgSupplierRepository, SupplierService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgSupplierRepository::new(state.db.clone());
    handlers::router(SupplierService::new(repository))
}
