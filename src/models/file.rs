//! Represents a downloadable file fetched from the blob store.

use bytes::Bytes;

/// Payload and metadata for one object read from the bucket.
///
/// The bytes are held only for the duration of a single download
/// response; nothing is cached between requests.
#[derive(Clone, Debug)]
pub struct FileObject {
    /// Raw object bytes.
    pub bytes: Bytes,

    /// Content type recorded by the store, if any.
    pub content_type: Option<String>,
}
