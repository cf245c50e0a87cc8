//! # kennywood-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `kennywood-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Bootstrap the `park_areas` table on startup
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `kennywood-app` (for port traits) and `kennywood-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod park_area_repo;
mod pool;

pub use error::StorageError;
pub use park_area_repo::SqliteParkAreaRepository;
pub use pool::{Config, Database};
