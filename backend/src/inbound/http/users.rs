//! Users API handlers.
//!
//! ```text
//! POST /api/v1/users/register  (multipart/form-data)
//!   fullName, email, userName, password: text
//!   avatar: file (required), coverImage: file (optional)
//! ```

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use actix_web::{HttpResponse, http::StatusCode, post, web};
use serde_json::json;

use crate::domain::ports::{MediaFile, NewRegistration};
use crate::domain::registration::{
    Email, FullName, Password, RegistrationValidationError, Username,
};
use crate::domain::user::UserProfile;
use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;

/// Multipart registration form.
///
/// Text fields are optional at the extractor level so a missing field is
/// reported through the domain error envelope rather than the extractor's
/// default response. File fields collect every part with that name; only the
/// first is used.
#[derive(MultipartForm)]
pub struct RegisterForm {
    #[multipart(rename = "fullName")]
    pub full_name: Option<Text<String>>,
    pub email: Option<Text<String>>,
    #[multipart(rename = "userName")]
    pub user_name: Option<Text<String>>,
    pub password: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub avatar: Vec<TempFile>,
    #[multipart(rename = "coverImage", limit = "10MB")]
    pub cover_image: Vec<TempFile>,
}

fn missing_field(field: &'static str) -> Error {
    Error::invalid_request(format!("{field} is required"))
        .with_details(json!({ "field": field, "code": "missing_field" }))
}

fn map_validation_error(error: RegistrationValidationError) -> Error {
    Error::invalid_request(error.to_string())
        .with_details(json!({ "field": error.field(), "code": "empty_field" }))
}

fn require_text(value: Option<Text<String>>, field: &'static str) -> Result<String, Error> {
    value
        .map(Text::into_inner)
        .ok_or_else(|| missing_field(field))
}

/// Detach a spooled part from the extractor so its lifetime is owned by the
/// registration pipeline (ultimately the uploader) instead of the extractor.
fn detach(file: TempFile) -> Result<MediaFile, Error> {
    let TempFile {
        file, file_name, ..
    } = file;
    let path = file.into_temp_path().keep().map_err(|error| {
        Error::internal(format!("failed to retain spooled upload: {error}"))
    })?;
    Ok(MediaFile::new(path).with_original_name(file_name))
}

fn first_file(mut files: Vec<TempFile>) -> Result<Option<MediaFile>, Error> {
    if files.is_empty() {
        return Ok(None);
    }
    // Remaining duplicates drop here, removing their spool files.
    detach(files.swap_remove(0)).map(Some)
}

fn parse_registration(form: RegisterForm) -> Result<NewRegistration, Error> {
    let full_name = FullName::new(require_text(form.full_name, "fullName")?)
        .map_err(map_validation_error)?;
    let email =
        Email::new(require_text(form.email, "email")?).map_err(map_validation_error)?;
    let username = Username::new(require_text(form.user_name, "userName")?)
        .map_err(map_validation_error)?;
    let password = Password::new(require_text(form.password, "password")?)
        .map_err(map_validation_error)?;

    Ok(NewRegistration {
        full_name,
        email,
        username,
        password,
        avatar: first_file(form.avatar)?,
        cover_image: first_file(form.cover_image)?,
    })
}

/// Register a new user.
///
/// Field validation failures, a missing avatar, and avatar upload failures
/// all answer 400; a duplicate email or username answers 409.
#[utoipa::path(
    post,
    path = "/api/v1/users/register",
    responses(
        (status = 201, description = "User registered", body = ApiResponse<UserProfile>),
        (status = 400, description = "Validation, missing avatar, or upload failure", body = ErrorEnvelope),
        (status = 409, description = "Email or username already registered", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope),
        (status = 503, description = "Persistence unavailable", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    form: MultipartForm<RegisterForm>,
) -> ApiResult<HttpResponse> {
    let registration = parse_registration(form.into_inner())?;
    let profile = state.registration.register(registration).await?;
    Ok(HttpResponse::Created().json(ApiResponse::new(
        StatusCode::CREATED.as_u16(),
        profile,
        "user registered successfully",
    )))
}
