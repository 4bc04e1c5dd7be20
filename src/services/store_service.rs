//! src/services/store_service.rs
//!
//! StoreService — typed adapter over the two external managed stores:
//! a DynamoDB table holding inventory records keyed by SKU and an S3
//! bucket holding downloadable files. This file intentionally does
//! **not** add caching, retries, or conditional writes; it is a direct
//! pass-through with error translation.

use crate::models::{file::FileObject, item::Item};
use aws_sdk_dynamodb::{
    Client as DynamoClient,
    error::{DisplayErrorContext, SdkError},
    types::AttributeValue,
};
use aws_sdk_s3::{Client as S3Client, operation::get_object::GetObjectError};
use thiserror::Error;
use tracing::debug;

/// Failure reported by one of the underlying store clients.
///
/// Absence of a key is not an error; the adapter methods return
/// `Ok(None)` for that, so callers branch on a discriminated result
/// instead of inspecting error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or the call timed out.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// The store was reached but refused the request.
    #[error("store rejected request: {0}")]
    Rejected(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// StoreService provides the four operations the handlers need:
/// - Put a record (unconditional overwrite by SKU)
/// - Get a record by SKU
/// - Delete a record by SKU (idempotent)
/// - Get a file object by filename
///
/// Clients and names are built once at startup and shared read-only
/// across all requests.
#[derive(Clone)]
pub struct StoreService {
    dynamo: DynamoClient,
    s3: S3Client,
    table: String,
    bucket: String,
}

impl StoreService {
    /// Create a new StoreService over the given clients, table, and bucket.
    pub fn new(
        dynamo: DynamoClient,
        s3: S3Client,
        table: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            dynamo,
            s3,
            table: table.into(),
            bucket: bucket.into(),
        }
    }

    /// Write the full item as the new value for its SKU.
    ///
    /// No precondition check; any prior record with the same key is
    /// overwritten entirely.
    pub async fn put_record(&self, item: &Item) -> StoreResult<()> {
        self.dynamo
            .put_item()
            .table_name(&self.table)
            .set_item(Some(item.to_attributes()))
            .send()
            .await
            .map_err(classify)?;

        debug!("stored record for sku `{}`", item.sku);
        Ok(())
    }

    /// Fetch the record for `sku`, or `None` if no record exists.
    ///
    /// A record that exists but does not match the expected attribute
    /// shape is reported as `Rejected` rather than silently dropped.
    pub async fn get_record(&self, sku: &str) -> StoreResult<Option<Item>> {
        let output = self
            .dynamo
            .get_item()
            .table_name(&self.table)
            .key("sku", AttributeValue::S(sku.to_string()))
            .send()
            .await
            .map_err(classify)?;

        match output.item() {
            None => Ok(None),
            Some(attrs) => Item::from_attributes(attrs)
                .map(Some)
                .ok_or_else(|| {
                    StoreError::Rejected(format!("stored record for sku `{}` is malformed", sku))
                }),
        }
    }

    /// Remove the record for `sku` if present.
    ///
    /// Idempotent: succeeds whether or not a record existed.
    pub async fn delete_record(&self, sku: &str) -> StoreResult<()> {
        self.dynamo
            .delete_item()
            .table_name(&self.table)
            .key("sku", AttributeValue::S(sku.to_string()))
            .send()
            .await
            .map_err(classify)?;

        debug!("deleted record for sku `{}` (if it existed)", sku);
        Ok(())
    }

    /// Fetch blob bytes and content type for `filename` from the bucket.
    ///
    /// A missing key maps to `Ok(None)`; every other failure is a
    /// `StoreError`. The body is collected fully before returning.
    pub async fn get_object(&self, filename: &str) -> StoreResult<Option<FileObject>> {
        let output = match self
            .s3
            .get_object()
            .bucket(&self.bucket)
            .key(filename)
            .send()
            .await
        {
            Ok(output) => output,
            Err(err) if err.as_service_error().is_some_and(GetObjectError::is_no_such_key) => {
                return Ok(None);
            }
            Err(err) => return Err(classify(err)),
        };

        let content_type = output.content_type().map(str::to_string);
        let body = output
            .body
            .collect()
            .await
            .map_err(|err| StoreError::Unavailable(format!("reading object body: {}", err)))?;

        Ok(Some(FileObject {
            bytes: body.into_bytes(),
            content_type,
        }))
    }
}

/// Translate an SDK error into the adapter's taxonomy.
///
/// Timeouts and dispatch failures mean the store was unreachable;
/// everything else (service errors included) counts as a rejection.
/// The detail string keeps the SDK's full error chain.
fn classify<E, R>(err: SdkError<E, R>) -> StoreError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    let detail = DisplayErrorContext(&err).to_string();
    match err {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => {
            StoreError::Unavailable(detail)
        }
        _ => StoreError::Rejected(detail),
    }
}

/// DynamoDB client pointed at an unroutable endpoint. Any call fails
/// with a dispatch error, which makes it useful both for code paths
/// that never issue a store call and for exercising the failure path.
#[cfg(test)]
pub fn offline_dynamo() -> DynamoClient {
    use aws_sdk_dynamodb::config::{BehaviorVersion, Credentials, Region};

    DynamoClient::from_conf(
        aws_sdk_dynamodb::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new("test", "test", None, None, "static"))
            .endpoint_url("http://127.0.0.1:1")
            .build(),
    )
}

/// S3 client pointed at an unroutable endpoint; see [`offline_dynamo`].
#[cfg(test)]
pub fn offline_s3() -> S3Client {
    use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};

    S3Client::from_conf(
        aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new("test", "test", None, None, "static"))
            .endpoint_url("http://127.0.0.1:1")
            .force_path_style(true)
            .build(),
    )
}

#[cfg(test)]
pub fn offline_for_tests() -> StoreService {
    StoreService::new(
        offline_dynamo(),
        offline_s3(),
        "Inventory",
        "inventory-files",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::operation::get_item::GetItemError;

    #[test]
    fn timeout_classifies_as_unavailable() {
        let err: SdkError<GetItemError> = SdkError::timeout_error("operation timed out");
        assert!(matches!(classify(err), StoreError::Unavailable(_)));
    }

    #[test]
    fn construction_failure_classifies_as_rejected() {
        let err: SdkError<GetItemError> = SdkError::construction_failure("bad request parameters");
        assert!(matches!(classify(err), StoreError::Rejected(_)));
    }

    #[test]
    fn classification_keeps_error_detail() {
        let err: SdkError<GetItemError> = SdkError::timeout_error("operation timed out");
        let StoreError::Unavailable(detail) = classify(err) else {
            panic!("expected Unavailable");
        };
        assert!(detail.contains("timed out"));
    }
}
