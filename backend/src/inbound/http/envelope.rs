//! Success envelope returned by every handler.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform success wrapper: `{statusCode, data, message, success}`.
///
/// `success` is derived from the status code rather than set by callers, so
/// the flag can never disagree with the code.
///
/// # Examples
/// ```
/// use backend::inbound::http::envelope::ApiResponse;
///
/// let envelope = ApiResponse::new(201, "payload", "created");
/// assert!(envelope.success);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// HTTP status code mirrored into the body.
    pub status_code: u16,
    /// Handler payload.
    pub data: T,
    /// Human-readable outcome message.
    pub message: String,
    /// True exactly when `status_code` is below 400.
    pub success: bool,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload with its status code and message.
    pub fn new(status_code: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code,
            data,
            message: message.into(),
            success: status_code < 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(200, true)]
    #[case(201, true)]
    #[case(399, true)]
    #[case(400, false)]
    #[case(500, false)]
    fn success_tracks_the_status_code(#[case] status: u16, #[case] expected: bool) {
        assert_eq!(ApiResponse::new(status, (), "done").success, expected);
    }

    #[test]
    fn serializes_camel_case() {
        let value = serde_json::to_value(ApiResponse::new(201, "payload", "created"))
            .expect("envelope serializes");
        let object = value.as_object().expect("envelope is an object");

        assert_eq!(object["statusCode"], 201);
        assert_eq!(object["data"], "payload");
        assert_eq!(object["message"], "created");
        assert_eq!(object["success"], true);
    }
}
