//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! A thin adapter: it translates between Diesel rows and domain types, hashes
//! the password on the way in, and maps database failures to port errors. In
//! particular a `UniqueViolation` on insert becomes
//! [`UserPersistenceError::DuplicateIdentity`], which is how a registration
//! that loses the check-then-create race still answers 409.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use rand::Rng;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{NewUser, UserPersistenceError, UserRepository};
use crate::domain::registration::{Email, Username};
use crate::domain::user::{UserId, UserProfile};

use super::models::{NewUserRow, ProfileRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to the port's connection error.
fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to port errors.
fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserPersistenceError::DuplicateIdentity
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        _ => UserPersistenceError::query("database error"),
    }
}

/// Hash the plaintext password with a fresh random salt.
fn hash_password(password: &str) -> Result<String, UserPersistenceError> {
    let mut salt = [0u8; 16];
    rand::thread_rng().fill(&mut salt);
    argon2::hash_encoded(password.as_bytes(), &salt, &argon2::Config::default())
        .map_err(|error| UserPersistenceError::query(format!("password hashing failed: {error}")))
}

fn row_to_profile(row: ProfileRow) -> UserProfile {
    UserProfile {
        id: UserId::from_uuid(row.id),
        full_name: row.full_name,
        email: row.email,
        user_name: row.user_name,
        avatar_url: row.avatar_url,
        cover_image_url: row.cover_image_url.unwrap_or_default(),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_identity(
        &self,
        email: &Email,
        username: &Username,
    ) -> Result<Option<UserId>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = users::table
            .filter(
                users::email
                    .eq(email.as_ref())
                    .or(users::user_name.eq(username.as_ref())),
            )
            .select(users::id)
            .first::<Uuid>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(id.map(UserId::from_uuid))
    }

    async fn create(&self, user: NewUser) -> Result<UserId, UserPersistenceError> {
        let password_hash = hash_password(user.password.expose())?;
        let id = Uuid::new_v4();
        let row = NewUserRow {
            id,
            full_name: user.full_name.as_ref(),
            email: user.email.as_ref(),
            user_name: user.username.as_ref(),
            password_hash: &password_hash,
            avatar_url: &user.avatar_url,
            cover_image_url: user.cover_image_url.as_deref(),
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(UserId::from_uuid(id))
    }

    async fn find_profile_by_id(
        &self,
        id: &UserId,
    ) -> Result<Option<UserProfile>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .filter(users::id.eq(*id.as_uuid()))
            .select(ProfileRow::as_select())
            .first::<ProfileRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(row_to_profile))
    }
}
