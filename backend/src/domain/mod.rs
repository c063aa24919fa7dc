//! Domain primitives, ports, and the registration use-case.
//!
//! Everything in this module is transport agnostic: inbound adapters map the
//! types here onto HTTP, and outbound adapters implement the ports against
//! real infrastructure.

pub mod error;
pub mod ports;
pub mod registration;
pub mod registration_service;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::registration::{
    Email, FullName, Password, RegistrationValidationError, Username,
};
pub use self::registration_service::Registrar;
pub use self::user::{UserId, UserProfile};

/// Convenient result alias for domain operations.
pub type ApiResult<T> = Result<T, Error>;
