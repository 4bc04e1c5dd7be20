//! HTTP handler for file downloads out of the blob store.

use crate::{errors::AppError, services::store_service::StoreService};
use axum::{
    body::Body,
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::Response,
};

/// `GET /file/download/{filename}` — stream a stored file back to the
/// caller with its recorded content type and an attachment disposition.
pub async fn download_file(
    State(service): State<StoreService>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    let Some(object) = service.get_object(&filename).await? else {
        return Err(AppError::not_found(format!(
            "File '{}' not found in bucket",
            filename
        )));
    };

    let content_type = object
        .content_type
        .unwrap_or_else(|| "application/octet-stream".into());

    let mut response = Response::new(Body::from(object.bytes));
    *response.status_mut() = StatusCode::OK;
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&content_type)
            .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream")),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&content_disposition(&filename))
            .map_err(|_| AppError::bad_request(format!("invalid filename `{}`", filename)))?,
    );

    Ok(response)
}

/// Build the attachment header value carrying the exact filename.
fn content_disposition(filename: &str) -> String {
    format!("attachment; filename={}", filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disposition_carries_exact_filename() {
        assert_eq!(
            content_disposition("report-2024.pdf"),
            "attachment; filename=report-2024.pdf"
        );
    }
}
