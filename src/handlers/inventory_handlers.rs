//! HTTP handlers for inventory record operations.
//! Validates request shape before any store call and delegates storage
//! concerns to `StoreService`.

use crate::{
    errors::AppError,
    models::item::Item,
    services::store_service::StoreService,
};
use axum::{
    Json,
    extract::{Path, State},
    extract::rejection::JsonRejection,
    response::IntoResponse,
};
use serde::Serialize;

/// Confirmation body for `POST /inventory`.
#[derive(Serialize)]
pub struct CreatedResponse {
    pub status: &'static str,
    pub item: Item,
}

/// Confirmation body for `DELETE /inventory/{sku}`.
#[derive(Serialize)]
pub struct DeletedResponse {
    pub status: &'static str,
    pub sku: String,
}

/// `POST /inventory` — add or overwrite an item.
///
/// A malformed body or missing/mis-typed field is rejected with 400
/// before the store is touched.
pub async fn create_item(
    State(service): State<StoreService>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(item) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    item.validate().map_err(AppError::bad_request)?;

    service.put_record(&item).await?;

    Ok(Json(CreatedResponse {
        status: "created",
        item,
    }))
}

/// `GET /inventory/{sku}` — fetch an item by SKU.
pub async fn get_item(
    State(service): State<StoreService>,
    Path(sku): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    match service.get_record(&sku).await? {
        Some(item) => Ok(Json(item)),
        None => Err(AppError::not_found(format!(
            "Item with SKU '{}' not found",
            sku
        ))),
    }
}

/// `DELETE /inventory/{sku}` — delete an item by SKU.
///
/// Deleting a SKU that never existed still confirms; only a store
/// failure is an error.
pub async fn delete_item(
    State(service): State<StoreService>,
    Path(sku): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    service.delete_record(&sku).await?;

    Ok(Json(DeletedResponse {
        status: "deleted",
        sku,
    }))
}
