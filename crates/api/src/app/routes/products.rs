use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put, MethodRouter},
    Json, Router,
};

use storefront_products::{CategoryCounts, Product, ProductDraft, ProductId};

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::context::ValidatedProduct;
use crate::middleware::{auth_middleware, validate_product, AuthState, ValidationState};

/// `/api/products` routes.
///
/// Mutating methods carry their own middleware: authentication on all of them,
/// validation after it on create/update. `/statistics` is a literal segment and
/// wins over `/:id`, but only for GET; writes to it go through the same chain
/// as writes to any other id.
pub fn router(auth: AuthState, validation: ValidationState) -> Router {
    let authenticate = from_fn_with_state(auth.clone(), auth_middleware);
    let validate = from_fn_with_state(validation, validate_product);

    Router::new()
        .route("/", collection(auth, validation))
        .route(
            "/statistics",
            get(product_statistics)
                .merge(
                    put(update_statistics_id)
                        .route_layer(validate.clone())
                        .route_layer(authenticate.clone()),
                )
                .merge(delete(delete_statistics_id).route_layer(authenticate.clone())),
        )
        .route(
            "/:id",
            get(get_product)
                .merge(
                    put(update_product)
                        .route_layer(validate)
                        .route_layer(authenticate.clone()),
                )
                .merge(delete(delete_product).route_layer(authenticate)),
        )
}

/// List and create, mounted on the collection path with and without a
/// trailing slash.
pub fn collection(auth: AuthState, validation: ValidationState) -> MethodRouter {
    get(list_products).merge(
        post(create_product)
            .route_layer(from_fn_with_state(validation, validate_product))
            .route_layer(from_fn_with_state(auth, auth_middleware)),
    )
}

pub async fn list_products(
    Extension(services): Extension<AppServices>,
    pairs: Option<Query<Vec<(String, String)>>>,
) -> Result<Json<dto::ProductListResponse>, ApiError> {
    let pairs = pairs.map(|Query(p)| p).unwrap_or_default();
    let query = dto::ListProductsParams::from_pairs(pairs).to_query();
    let page = services.store().list(&query)?;
    Ok(Json(page.into()))
}

pub async fn product_statistics(
    Extension(services): Extension<AppServices>,
) -> Result<Json<CategoryCounts>, ApiError> {
    Ok(Json(services.store().statistics()?))
}

pub async fn get_product(
    Extension(services): Extension<AppServices>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(services.store().get(&id)?))
}

pub async fn create_product(
    Extension(services): Extension<AppServices>,
    Extension(ValidatedProduct(draft)): Extension<ValidatedProduct>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = services.store().create(draft)?;
    tracing::info!(product_id = %product.id(), "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    Extension(services): Extension<AppServices>,
    Path(id): Path<String>,
    Extension(ValidatedProduct(draft)): Extension<ValidatedProduct>,
) -> Result<Json<Product>, ApiError> {
    update(&services, &id, draft).map(Json)
}

pub async fn delete_product(
    Extension(services): Extension<AppServices>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    delete_by_id(&services, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

// `/statistics` has no path parameter; its segment is the id.
pub async fn update_statistics_id(
    Extension(services): Extension<AppServices>,
    Extension(ValidatedProduct(draft)): Extension<ValidatedProduct>,
) -> Result<Json<Product>, ApiError> {
    update(&services, STATISTICS_SEGMENT, draft).map(Json)
}

pub async fn delete_statistics_id(
    Extension(services): Extension<AppServices>,
) -> Result<StatusCode, ApiError> {
    delete_by_id(&services, STATISTICS_SEGMENT)?;
    Ok(StatusCode::NO_CONTENT)
}

const STATISTICS_SEGMENT: &str = "statistics";

fn update(services: &AppServices, raw_id: &str, draft: ProductDraft) -> Result<Product, ApiError> {
    let id = parse_id(raw_id)?;
    let product = services.store().update(&id, draft)?;
    tracing::info!(product_id = %product.id(), "product updated");
    Ok(product)
}

fn delete_by_id(services: &AppServices, raw_id: &str) -> Result<(), ApiError> {
    let id = parse_id(raw_id)?;
    services.store().delete(&id)?;
    tracing::info!(product_id = %id, "product deleted");
    Ok(())
}

// Path segments are never empty, so a parse failure can only mean "no such product".
fn parse_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::not_found("Product not found."))
}
