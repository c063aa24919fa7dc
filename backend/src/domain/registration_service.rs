//! Registration use-case implementation.
//!
//! The pipeline is linear and short-circuits on the first failure:
//! duplicate check, avatar presence, uploads, insert, sanitized re-fetch.
//! Exactly one domain result leaves this service per call; the inbound
//! adapter turns it into exactly one response envelope.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::Error;
use crate::domain::ports::{
    MediaStore, MediaUploadError, NewRegistration, NewUser, RegistrationService,
    UserPersistenceError, UserRepository,
};
use crate::domain::user::UserProfile;

/// Production [`RegistrationService`] wiring a user repository and a media
/// store together.
#[derive(Clone)]
pub struct Registrar {
    users: Arc<dyn UserRepository>,
    media: Arc<dyn MediaStore>,
}

impl Registrar {
    /// Create a registrar over the given adapters.
    pub fn new(users: Arc<dyn UserRepository>, media: Arc<dyn MediaStore>) -> Self {
        Self { users, media }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
        UserPersistenceError::DuplicateIdentity => {
            Error::conflict("user with email or username already exists")
        }
    }
}

fn map_avatar_upload_error(error: &MediaUploadError) -> Error {
    let message = match error {
        MediaUploadError::Transport { .. } => "avatar upload failed in transit",
        MediaUploadError::Rejected { .. } => "avatar upload was rejected by the media host",
    };
    Error::invalid_request(message)
        .with_details(json!({ "field": "avatar", "code": error.cause() }))
}

#[async_trait]
impl RegistrationService for Registrar {
    async fn register(&self, registration: NewRegistration) -> Result<UserProfile, Error> {
        let NewRegistration {
            full_name,
            email,
            username,
            password,
            avatar,
            cover_image,
        } = registration;

        if let Some(existing) = self
            .users
            .find_by_identity(&email, &username)
            .await
            .map_err(map_persistence_error)?
        {
            tracing::debug!(user_id = %existing, "registration rejected: identity already taken");
            return Err(Error::conflict(
                "user with email or username already exists",
            ));
        }

        let Some(avatar) = avatar else {
            return Err(Error::invalid_request("avatar image is required")
                .with_details(json!({ "field": "avatar", "code": "missing_file" })));
        };

        let avatar_url = match self.media.upload(avatar).await {
            Ok(media) => media.url,
            Err(error) => {
                warn!(%error, cause = error.cause(), "avatar upload failed");
                return Err(map_avatar_upload_error(&error));
            }
        };

        // A cover image is optional, so a failed upload degrades to "none"
        // rather than failing the registration.
        let cover_image_url = match cover_image {
            Some(file) => match self.media.upload(file).await {
                Ok(media) => Some(media.url),
                Err(error) => {
                    warn!(%error, cause = error.cause(), "cover image upload failed; registering without one");
                    None
                }
            },
            None => None,
        };

        let created = self
            .users
            .create(NewUser {
                full_name,
                email,
                username,
                password,
                avatar_url,
                cover_image_url,
            })
            .await
            .map_err(map_persistence_error)?;

        let profile = self
            .users
            .find_profile_by_id(&created)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::internal("registered user could not be loaded"))?;

        info!(user_id = %profile.id, user_name = %profile.user_name, "user registered");
        Ok(profile)
    }
}
