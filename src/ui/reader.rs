//! Binary blob to string encoding

use crate::{Error, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;

/// Asynchronous blob encoder
#[async_trait]
pub trait BlobReader: Send + Sync {
    /// Encode `blob` as an embeddable data URL
    async fn read_as_data_url(&self, blob: Bytes, mimetype: &str) -> Result<String>;
}

/// Produces `data:{mimetype};base64,{payload}` strings
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlReader;

#[async_trait]
impl BlobReader for DataUrlReader {
    async fn read_as_data_url(&self, blob: Bytes, mimetype: &str) -> Result<String> {
        if blob.is_empty() {
            return Err(Error::Encoding("Cannot encode an empty blob".to_string()));
        }
        if mimetype.is_empty() || !mimetype.contains('/') {
            return Err(Error::Encoding(format!("Invalid mimetype '{}'", mimetype)));
        }

        // Completion is always signalled from a later poll, like a file reader's
        // load-end event.
        tokio::task::yield_now().await;

        Ok(format!("data:{};base64,{}", mimetype, STANDARD.encode(&blob)))
    }
}
