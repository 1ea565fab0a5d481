//! Product registry endpoints.
//!
//! Bodies are schema-validated explicitly before anything reaches the
//! store, so a validation failure surfaces the field-level violations and
//! leaves the collection untouched.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};

use prodreg_products::schema;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            put(replace_product)
                .patch(patch_product)
                .delete(delete_product),
        )
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.products_list())).into_response()
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<schema::ProductDraft>,
) -> axum::response::Response {
    let product = match schema::validate_draft(body) {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.products_create(product) {
        Ok(created) => {
            tracing::info!(id = %created.id, "product created");
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn replace_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<schema::ProductDraft>,
) -> axum::response::Response {
    let product = match schema::validate_draft(body) {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.products_replace(&id, product) {
        Ok(updated) => {
            tracing::info!(id = %updated.id, "product replaced");
            (StatusCode::OK, Json(updated)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn patch_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<schema::ProductPatch>,
) -> axum::response::Response {
    let changes = match schema::validate_patch(body) {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.products_merge_patch(&id, changes) {
        Ok(updated) => {
            tracing::info!(id = %updated.id, "product patched");
            (StatusCode::OK, Json(updated)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    // Absent id: silent no-op, still 200.
    let removed = services.products_remove(&id);
    tracing::info!(id = %id, removed, "product delete");
    StatusCode::OK.into_response()
}
