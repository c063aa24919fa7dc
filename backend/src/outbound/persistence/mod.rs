//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Thin adapters only: row structs and schema definitions stay internal, all
//! database errors are mapped to the domain's port errors, and no business
//! logic lives here.

mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
