//! Suppliers Domain
//!
//! Suppliers own one address and are referenced by products. A supplier
//! with products cannot be deleted.
//!
//! ```rust,ignore
//! use domain_suppliers::{handlers, PgSupplierRepository, SupplierService};
//!
//! let service = SupplierService::new(PgSupplierRepository::new(db));
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{SupplierError, SupplierResult};
pub use handlers::ApiDoc;
pub use models::{CreateSupplier, Supplier};
pub use postgres::PgSupplierRepository;
pub use repository::SupplierRepository;
pub use service::SupplierService;
