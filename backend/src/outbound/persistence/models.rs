//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer, never exposed to the
//! domain. `ProfileRow` deliberately omits `password_hash` and
//! `refresh_token`, so the sanitized re-fetch excludes them at the query
//! level rather than by post-filtering.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::users;

/// Row struct for reading a sanitized profile from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProfileRow {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub user_name: String,
    pub avatar_url: String,
    pub cover_image_url: Option<String>,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub full_name: &'a str,
    pub email: &'a str,
    pub user_name: &'a str,
    pub password_hash: &'a str,
    pub avatar_url: &'a str,
    pub cover_image_url: Option<&'a str>,
}
