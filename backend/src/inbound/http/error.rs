//! HTTP adapter mapping for domain errors.
//!
//! Handlers return `ApiResult<T>`; actix forwards the `Err` branch here, so
//! this impl is the centralized error responder: every domain failure becomes
//! exactly one JSON error envelope with a matching status code, and no
//! handler carries its own catch logic.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Uniform error wrapper: `{statusCode, message, success: false, details?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// HTTP status code mirrored into the body.
    pub status_code: u16,
    /// Human-readable error message.
    pub message: String,
    /// Always false.
    pub success: bool,
    /// Supplementary structured details, when the failure has them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn envelope_for(error: &Error, status: StatusCode) -> ErrorEnvelope {
    // Internal messages may carry adapter detail; clients get a generic line.
    if matches!(error.code(), ErrorCode::InternalError) {
        return ErrorEnvelope {
            status_code: status.as_u16(),
            message: "Internal server error".to_owned(),
            success: false,
            details: None,
        };
    }

    ErrorEnvelope {
        status_code: status.as_u16(),
        message: error.message().to_owned(),
        success: false,
        details: error.details().cloned(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(message = self.message(), "internal error returned to client");
        }
        HttpResponse::build(self.status_code()).json(envelope_for(self, self.status_code()))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::json;

    async fn envelope_of(error: Error) -> (StatusCode, ErrorEnvelope) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body())
            .await
            .expect("response body reads");
        let envelope = serde_json::from_slice(&bytes).expect("error envelope deserialises");
        (status, envelope)
    }

    #[rstest]
    #[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(Error::conflict("dup"), StatusCode::CONFLICT)]
    #[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
    #[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
        assert_eq!(error.status_code(), status);
    }

    #[actix_web::test]
    async fn envelope_mirrors_status_and_flags_failure() {
        let (status, envelope) = envelope_of(
            Error::invalid_request("email must not be empty")
                .with_details(json!({ "field": "email" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(envelope.status_code, 400);
        assert!(!envelope.success);
        assert_eq!(envelope.message, "email must not be empty");
        assert_eq!(envelope.details, Some(json!({ "field": "email" })));
    }

    #[actix_web::test]
    async fn internal_errors_are_redacted() {
        let (status, envelope) = envelope_of(
            Error::internal("connection string leaked").with_details(json!({ "secret": "x" })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(envelope.message, "Internal server error");
        assert!(envelope.details.is_none());
    }

    #[actix_web::test]
    async fn conflict_envelope_keeps_its_message() {
        let (status, envelope) =
            envelope_of(Error::conflict("user with email or username already exists")).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            envelope.message,
            "user with email or username already exists"
        );
        assert!(!envelope.success);
    }
}
