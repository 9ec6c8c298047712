//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, the `posts` row struct, and repository
//! functions for the postboard schema.  No business logic lives here.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use pool::DbPool;
pub use error::DbError;
