//! Validated registration input fields.
//!
//! Each text field from the registration form is wrapped in a newtype whose
//! constructor enforces the field's invariant: non-empty once trimmed of
//! whitespace. [`Username`] additionally lower-cases its value so the
//! duplicate check and the stored record share a single normal form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors raised by the registration field constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationValidationError {
    EmptyFullName,
    EmptyEmail,
    EmptyUsername,
    EmptyPassword,
}

impl RegistrationValidationError {
    /// Wire name of the offending form field.
    pub fn field(self) -> &'static str {
        match self {
            Self::EmptyFullName => "fullName",
            Self::EmptyEmail => "email",
            Self::EmptyUsername => "userName",
            Self::EmptyPassword => "password",
        }
    }
}

impl fmt::Display for RegistrationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} must not be empty", self.field())
    }
}

impl std::error::Error for RegistrationValidationError {}

fn reject_blank(
    value: &str,
    error: RegistrationValidationError,
) -> Result<(), RegistrationValidationError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(())
}

/// Display name supplied at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FullName(String);

impl FullName {
    /// Validate and construct a [`FullName`].
    pub fn new(value: impl Into<String>) -> Result<Self, RegistrationValidationError> {
        let value = value.into();
        reject_blank(&value, RegistrationValidationError::EmptyFullName)?;
        Ok(Self(value))
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<FullName> for String {
    fn from(value: FullName) -> Self {
        value.0
    }
}

/// Contact address used as one of the two unique identities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    pub fn new(value: impl Into<String>) -> Result<Self, RegistrationValidationError> {
        let value = value.into();
        reject_blank(&value, RegistrationValidationError::EmptyEmail)?;
        Ok(Self(value))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

/// Unique handle, stored lower-cased.
///
/// ## Invariants
/// - non-empty once trimmed of whitespace;
/// - always lower-case (applied on construction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Validate, lower-case, and construct a [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, RegistrationValidationError> {
        let value = value.into();
        reject_blank(&value, RegistrationValidationError::EmptyUsername)?;
        Ok(Self(value.to_lowercase()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// Plaintext password in transit to the persistence layer, which hashes it.
///
/// Deliberately excluded from `Debug` output and never serialized.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Validate and construct a [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, RegistrationValidationError> {
        let value = value.into();
        reject_blank(&value, RegistrationValidationError::EmptyPassword)?;
        Ok(Self(value))
    }

    /// Expose the plaintext for hashing.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}
