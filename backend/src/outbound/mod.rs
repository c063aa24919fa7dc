//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed user repository using Diesel ORM
//! - **media**: Cloudinary-backed media store using reqwest
//!
//! Adapters translate between domain types and infrastructure-specific
//! representations; they contain no business logic.

pub mod media;
pub mod persistence;
