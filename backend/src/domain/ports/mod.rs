//! Domain ports for the hexagonal boundary.

mod media_store;
mod registration_service;
mod user_repository;

#[cfg(test)]
pub use media_store::MockMediaStore;
pub use media_store::{HostedMedia, MediaFile, MediaStore, MediaUploadError};
#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use registration_service::{NewRegistration, RegistrationService};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{NewUser, UserPersistenceError, UserRepository};
