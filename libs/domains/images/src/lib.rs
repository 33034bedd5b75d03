//! Images Domain
//!
//! Binary product images. An upload is stored and linked to its product in
//! one transaction; deleting an image detaches it from the product.
//!
//! Uploads are `multipart/form-data` with a single `image` field, capped at
//! [`MAX_UPLOAD_BYTES`]. Downloads are raw `application/octet-stream`.
//!
//! ```rust,ignore
//! use domain_images::{handlers, ImageService, PgImageRepository};
//!
//! let service = ImageService::new(PgImageRepository::new(db));
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ImageError, ImageResult};
pub use handlers::{ApiDoc, IMAGE_FIELD, MAX_UPLOAD_BYTES};
pub use models::ImageInfo;
pub use postgres::PgImageRepository;
pub use repository::ImageRepository;
pub use service::ImageService;
