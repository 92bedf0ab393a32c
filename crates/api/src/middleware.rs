//! Request middleware chain: logging → authentication → validation.
//!
//! Each stage either passes the request on or short-circuits with an
//! [`ApiError`]; a short-circuited request never reaches later stages or the
//! handler.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use storefront_auth::{CredentialVerifier, API_KEY_HEADER};
use storefront_products::ProductPayload;

use crate::app::errors::ApiError;
use crate::context::ValidatedProduct;

/// Logs every request on arrival and on completion. Never fails.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    tracing::info!(method = %method, uri = %uri, "request started");

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "request completed"
    );

    response
}

#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<dyn CredentialVerifier>,
}

/// Rejects requests whose API key the verifier does not accept.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    state.verifier.verify(presented_key(req.headers()))?;
    Ok(next.run(req).await)
}

fn presented_key(headers: &HeaderMap) -> Option<&str> {
    headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok())
}

#[derive(Debug, Clone, Copy)]
pub struct ValidationState {
    pub max_body_bytes: usize,
}

/// Validates a product body and attaches it as [`ValidatedProduct`].
///
/// The body is passed on unchanged.
pub async fn validate_product(
    State(state): State<ValidationState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (mut parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, state.max_body_bytes)
        .await
        .map_err(|_| ApiError::validation("Request body is too large."))?;

    // Unparseable JSON is not a field-level failure; it surfaces as a generic 500.
    let payload = ProductPayload::from_json(&bytes)
        .map_err(|err| anyhow::Error::new(err).context("request body is not valid JSON"))?;
    let draft = payload.validate()?;
    parts.extensions.insert(ValidatedProduct(draft));

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::StatusCode,
        middleware::{from_fn, from_fn_with_state},
        routing::post,
        Extension, Router,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use storefront_auth::StaticApiKey;
    use tower::ServiceExt;

    fn chain(hits: Arc<AtomicUsize>) -> Router {
        let handler = move |Extension(ValidatedProduct(draft)): Extension<ValidatedProduct>| {
            let hits = hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                draft.name().to_string()
            }
        };

        Router::new()
            .route("/", post(handler))
            .route_layer(from_fn_with_state(
                ValidationState { max_body_bytes: 128 },
                validate_product,
            ))
            .route_layer(from_fn_with_state(
                AuthState {
                    verifier: Arc::new(StaticApiKey::new("k")),
                },
                auth_middleware,
            ))
            .layer(from_fn(log_requests))
    }

    fn request(key: Option<&str>, body: &str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(key) = key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    const VALID: &str = r#"{"name":"Mug","description":"d","price":4,"category":"c","inStock":true}"#;

    #[tokio::test]
    async fn passes_valid_requests_to_the_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let response = chain(hits.clone()).oneshot(request(Some("k"), VALID)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Mug");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn auth_runs_before_validation() {
        let hits = Arc::new(AtomicUsize::new(0));
        let response = chain(hits.clone()).oneshot(request(None, "{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn invalid_payload_never_reaches_the_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let body = r#"{"name":"Mug","description":"d","price":0,"category":"c","inStock":true}"#;
        let response = chain(hits.clone()).oneshot(request(Some("k"), body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn oversized_bodies_are_rejected() {
        let hits = Arc::new(AtomicUsize::new(0));
        let body = format!(r#"{{"name":"{}"}}"#, "x".repeat(200));
        let response = chain(hits.clone()).oneshot(request(Some("k"), &body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unparseable_json_is_an_internal_error() {
        let hits = Arc::new(AtomicUsize::new(0));
        let response = chain(hits.clone()).oneshot(request(Some("k"), "{\"name\": ")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn non_ascii_header_counts_as_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(
            API_KEY_HEADER,
            axum::http::HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap(),
        );
        assert_eq!(presented_key(&headers), None);
    }
}
