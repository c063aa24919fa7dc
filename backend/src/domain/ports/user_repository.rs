//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::registration::{Email, FullName, Password, Username};
use crate::domain::user::{UserId, UserProfile};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
    /// The database's unique constraint on email or username fired.
    ///
    /// The pre-insert duplicate check is only a fast path; this variant is
    /// how a lost check-then-create race still surfaces as a conflict.
    #[error("a user with this email or username already exists")]
    DuplicateIdentity,
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Write model for a registration insert.
///
/// Carries the plaintext password; the adapter hashes it and nothing below
/// the port ever returns it.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: FullName,
    pub email: Email,
    pub username: Username,
    pub password: Password,
    pub avatar_url: String,
    pub cover_image_url: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up an existing user matching the email OR the username.
    async fn find_by_identity(
        &self,
        email: &Email,
        username: &Username,
    ) -> Result<Option<UserId>, UserPersistenceError>;

    /// Insert a new user record, hashing the password on the way in.
    async fn create(&self, user: NewUser) -> Result<UserId, UserPersistenceError>;

    /// Fetch the sanitized profile for an existing user.
    async fn find_profile_by_id(
        &self,
        id: &UserId,
    ) -> Result<Option<UserProfile>, UserPersistenceError>;
}
