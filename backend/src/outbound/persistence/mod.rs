//! PostgreSQL adapters built on Diesel with `diesel-async` and bb8 pooling.
//!
//! Row structs and table definitions stay private to this module; only the
//! store, the pool, and the migration runner are exported.
//!
//! ```ignore
//! use bloglist::outbound::persistence::{DbPool, DieselStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/bloglist")).await?;
//! let store = DieselStore::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_store;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_store::DieselStore;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
