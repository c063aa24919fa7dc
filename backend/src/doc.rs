//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: the registration endpoint, the health probes, and the
//! envelope/profile schemas. The generated specification backs Swagger UI in
//! debug builds.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registration backend API",
        description = "HTTP interface for user registration and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::domain::user::UserProfile,
        crate::inbound::http::error::ErrorEnvelope,
    )),
    tags(
        (name = "users", description = "User registration"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;
