//! Defines the fixed route table for the inventory service.
//!
//! ## Structure
//! - `GET    /`                          — health check
//! - `POST   /inventory`                 — add or overwrite an item
//! - `GET    /inventory/{sku}`           — fetch an item by SKU
//! - `DELETE /inventory/{sku}`           — delete an item by SKU
//! - `GET    /file/download/{filename}`  — download a stored file
//!
//! No versioning and no middleware beyond request parsing and the
//! error-to-status mapping in `AppError`.

use crate::{
    handlers::{
        file_handlers::download_file,
        health_handlers::health,
        inventory_handlers::{create_item, delete_item, get_item},
    },
    services::store_service::StoreService,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Build and return the router for all inventory routes.
///
/// The router carries shared state (`StoreService`) to all handlers.
pub fn routes() -> Router<StoreService> {
    Router::new()
        .route("/", get(health))
        .route("/inventory", post(create_item))
        .route("/inventory/{sku}", get(get_item).delete(delete_item))
        .route("/file/download/{filename}", get(download_file))
}
