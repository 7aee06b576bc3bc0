//! `PostgreSQL` adapters for housekeeping task persistence.

mod models;
mod repository;
mod schema;

pub use repository::{HousekeepingPgPool, PostgresTaskRepository};
