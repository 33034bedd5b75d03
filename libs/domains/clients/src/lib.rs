//! Clients Domain
//!
//! Shop clients, each owning exactly one address.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /clients, /client, /client/{id}
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← validation, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← client + address writes in one transaction
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Client, CreateClient, query params
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_clients::{handlers, ClientService, PgClientRepository};
//!
//! let service = ClientService::new(PgClientRepository::new(db));
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ClientError, ClientResult};
pub use handlers::ApiDoc;
pub use models::{Client, ClientListParams, ClientSearch, CreateClient};
pub use postgres::PgClientRepository;
pub use repository::ClientRepository;
pub use service::ClientService;
