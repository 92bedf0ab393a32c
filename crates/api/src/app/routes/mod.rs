use axum::{routing::get, Router};

use crate::middleware::{AuthState, ValidationState};

pub mod products;
pub mod system;

/// Full route table (without global layers).
pub fn router(auth: AuthState, validation: ValidationState) -> Router {
    Router::new()
        .route("/", get(system::welcome))
        .route("/health", get(system::health))
        .route("/api/products/", products::collection(auth.clone(), validation))
        .nest("/api/products", products::router(auth, validation))
        .fallback(system::not_found)
}
