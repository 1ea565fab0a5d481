//! HTTP API application wiring (axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: the shared application state (store behind a mutex)
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `errors.rs`: consistent error responses
//!
//! Request/response bodies are the (de)serializable types from
//! `prodreg-products` (`ProductDraft`, `ProductPatch`, `Product`); there is
//! no separate DTO layer to keep in sync.

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app() -> Router {
    let services = Arc::new(services::AppServices::new());

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/products", routes::products::router())
        .layer(Extension(services))
}
