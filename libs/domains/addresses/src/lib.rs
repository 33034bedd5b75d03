//! Addresses Domain
//!
//! Country/city/street records owned by clients and suppliers. There are no
//! HTTP routes here: the owning domains call the store functions in
//! [`store`] from inside their own transactions, so an address is always
//! written together with the row that references it.
//!
//! ```rust,ignore
//! use sea_orm::TransactionTrait;
//!
//! let txn = db.begin().await?;
//! let address = domain_addresses::store::insert(&txn, input.address).await?;
//! // insert the owner referencing address.id ...
//! txn.commit().await?;
//! ```

pub mod entity;
pub mod error;
pub mod models;
pub mod store;

pub use error::{AddressError, AddressResult};
pub use models::{Address, AddressInput, AddressOwner};
