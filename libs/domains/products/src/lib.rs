//! Products Domain
//!
//! Products belong to a supplier, may link one image, and carry an
//! available stock counter.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /products, /product, /product/{id}?count=
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← supplier existence, StockPolicy
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← guarded stock decrement
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, CreateProduct, StockPolicy
//! └─────────────┘
//! ```
//!
//! # Stock policy
//!
//! `PATCH /product/{id}?count=n` decrements stock by `n`. With
//! [`StockPolicy::Reject`] a request larger than the available stock fails
//! with 409 and changes nothing; with [`StockPolicy::AllowNegative`] the
//! counter may drop below zero.
//!
//! ```rust,ignore
//! use domain_products::{handlers, PgProductRepository, ProductService, StockPolicy};
//!
//! let service = ProductService::new(PgProductRepository::new(db), StockPolicy::Reject);
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, Product, ReduceStockParams, StockPolicy};
pub use postgres::PgProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
