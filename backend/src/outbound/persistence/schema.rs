//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. The unique
//! indexes on `email` and `user_name` are what actually enforce the
//! registration uniqueness rule; the application's pre-insert check is only
//! a fast path for a friendlier error.

diesel::table! {
    /// Registered user accounts.
    ///
    /// `email` and `user_name` each carry a unique index; `user_name` is
    /// stored lower-cased. The `id` column is the primary key (UUID v4).
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Display name shown to other users.
        full_name -> Varchar,
        /// Unique contact address.
        email -> Varchar,
        /// Unique handle, lower-cased.
        user_name -> Varchar,
        /// Argon2 password hash; never leaves the persistence layer.
        password_hash -> Varchar,
        /// Hosted avatar image URL.
        avatar_url -> Varchar,
        /// Hosted cover image URL, when one was uploaded.
        cover_image_url -> Nullable<Varchar>,
        /// Issued refresh token; unused by the registration flow.
        refresh_token -> Nullable<Varchar>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
