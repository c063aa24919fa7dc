//! Driving port for the registration use-case.
//!
//! Inbound adapters (the HTTP handler) call this port with already-validated
//! field values; the implementation owns the duplicate check, uploads, and
//! persistence. Keeping the trait here lets handler tests substitute a stub
//! without wiring real adapters.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::ports::MediaFile;
use crate::domain::registration::{Email, FullName, Password, Username};
use crate::domain::user::UserProfile;

/// Validated registration input.
///
/// The avatar is optional here even though the flow requires one: the
/// presence check belongs to the pipeline (after the duplicate check), not
/// to extraction.
#[derive(Debug)]
pub struct NewRegistration {
    pub full_name: FullName,
    pub email: Email,
    pub username: Username,
    pub password: Password,
    pub avatar: Option<MediaFile>,
    pub cover_image: Option<MediaFile>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Run the registration pipeline and return the sanitized profile.
    async fn register(&self, registration: NewRegistration) -> Result<UserProfile, Error>;
}
