//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::users::register;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// JSON body cap for non-file submissions.
const JSON_PAYLOAD_LIMIT: usize = 24 * 1024;
/// Urlencoded body cap for non-file submissions.
const FORM_PAYLOAD_LIMIT: usize = 16 * 1024;

/// Build the single-origin CORS policy with credentials allowed.
fn cors_policy(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allowed_methods(vec!["GET", "POST"])
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

/// Assemble the application: parsers, CORS, tracing, routes.
pub fn build_app(
    state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
    cors_origin: String,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(state)
        .app_data(health_state)
        .app_data(web::JsonConfig::default().limit(JSON_PAYLOAD_LIMIT))
        .app_data(web::FormConfig::default().limit(FORM_PAYLOAD_LIMIT))
        .wrap(cors_policy(&cors_origin))
        .wrap(Trace)
        .service(web::scope("/api/v1/users").service(register))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}
