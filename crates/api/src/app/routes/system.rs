use axum::http::StatusCode;

use crate::app::errors::ApiError;

pub const WELCOME: &str = "Welcome to the Product API! Go to /api/products to see all products.";

pub async fn welcome() -> &'static str {
    WELCOME
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn not_found() -> ApiError {
    ApiError::not_found("Route not found.")
}
