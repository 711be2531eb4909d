//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Concrete implementation of the [`crate::domain::ports::Storage`] port
//! backed by PostgreSQL via Diesel with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! Row structs (`models`) and table definitions (`schema`) are internal
//! implementation details, never exposed to the domain layer.

mod diesel_storage;
mod models;
mod pool;
mod schema;

pub use diesel_storage::DieselStorage;
pub use pool::{DbPool, PoolConfig, PoolError};
