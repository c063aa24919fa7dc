//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the domain's driving port and remain testable without real adapters.

use std::sync::Arc;

use crate::domain::ports::RegistrationService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn RegistrationService>,
}

impl HttpState {
    /// Construct state over the registration use-case.
    pub fn new(registration: Arc<dyn RegistrationService>) -> Self {
        Self { registration }
    }
}
