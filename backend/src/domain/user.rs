//! User identity and the sanitized profile read model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Stable user identifier stored as a UUID v4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Wrap an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sanitized user record returned to clients after registration.
///
/// This is the only user shape that crosses the HTTP boundary. It has no
/// password or refresh-token fields, so sanitization holds by construction
/// rather than by filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Stable user identifier.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: UserId,
    /// Display name shown to other users.
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    /// Unique contact address.
    #[schema(example = "jane@x.com")]
    pub email: String,
    /// Unique handle, always lower-case.
    #[schema(example = "janed")]
    pub user_name: String,
    /// Hosted avatar image URL.
    #[schema(example = "https://host/avatar.png")]
    pub avatar_url: String,
    /// Hosted cover image URL; empty when no cover image was uploaded.
    #[serde(default)]
    #[schema(example = "")]
    pub cover_image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample_profile() -> UserProfile {
        UserProfile {
            id: UserId::random(),
            full_name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            user_name: "janed".into(),
            avatar_url: "https://host/avatar.png".into(),
            cover_image_url: String::new(),
        }
    }

    #[test]
    fn serializes_camel_case_without_credentials() {
        let value = serde_json::to_value(sample_profile()).expect("profile serializes");
        let object = value.as_object().expect("profile is an object");

        assert!(object.contains_key("fullName"));
        assert!(object.contains_key("userName"));
        assert!(object.contains_key("avatarUrl"));
        assert!(object.contains_key("coverImageUrl"));
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("passwordHash"));
        assert!(!object.contains_key("refreshToken"));
    }

    #[test]
    fn user_id_serializes_as_plain_string() {
        let id = UserId::random();
        let value = serde_json::to_value(id).expect("id serializes");
        assert!(matches!(value, Value::String(_)));
    }
}
