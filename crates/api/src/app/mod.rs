//! HTTP application wiring (Axum router + services).
//!
//! - `services.rs`: the product store handlers share
//! - `routes/`: routes + handlers
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: the error translator

use std::sync::Arc;

use axum::{middleware::from_fn, Extension, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

use storefront_auth::{CredentialVerifier, StaticApiKey};

use crate::config::ApiConfig;
use crate::middleware::{self, AuthState, ValidationState};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router with the static API key from `config`.
pub fn build_app(config: &ApiConfig, services: AppServices) -> Router {
    let verifier: Arc<dyn CredentialVerifier> = Arc::new(StaticApiKey::new(config.api_key.clone()));
    build_app_with_verifier(config, services, verifier)
}

/// Build the router with a custom credential verifier.
pub fn build_app_with_verifier(
    config: &ApiConfig,
    services: AppServices,
    verifier: Arc<dyn CredentialVerifier>,
) -> Router {
    let auth = AuthState { verifier };
    let validation = ValidationState {
        max_body_bytes: config.max_body_bytes,
    };

    // Outermost first: logging sees every request, including panics turned into 500s.
    routes::router(auth, validation).layer(
        ServiceBuilder::new()
            .layer(from_fn(middleware::log_requests))
            .layer(CatchPanicLayer::custom(errors::panic_response))
            .layer(Extension(services)),
    )
}
