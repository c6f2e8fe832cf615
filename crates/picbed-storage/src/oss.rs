//! Aliyun OSS storage adapter.
//!
//! Objects are uploaded with a signed `PUT` to the bucket's virtual-hosted
//! endpoint `{bucket}.{region}.aliyuncs.com` (the region identifier carries
//! the `oss-` prefix, e.g. `oss-cn-hangzhou`). Authentication is the header
//! signature scheme: `Authorization: OSS {access_key_id}:{signature}`.

use crate::body::progress_body;
use crate::keys::{content_type_for_key, encode_key_path};
use crate::sign::{gmt_date, oss_authorization};
use crate::traits::{ObjectStorage, ProgressFn, StorageError, StorageProvider, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use picbed_core::UploadProgress;
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, DATE};

/// Aliyun OSS adapter
#[derive(Clone)]
pub struct OssStorage {
    http: reqwest::Client,
    bucket: String,
    region: String,
    access_key_id: String,
    access_key_secret: String,
}

impl OssStorage {
    /// Create a new OSS adapter.
    ///
    /// # Arguments
    /// * `bucket` - bucket name
    /// * `region` - OSS region identifier including the `oss-` prefix
    ///   (e.g. "oss-cn-hangzhou")
    pub fn new(
        bucket: String,
        region: String,
        access_key_id: String,
        access_key_secret: String,
    ) -> Self {
        OssStorage {
            http: reqwest::Client::new(),
            bucket,
            region,
            access_key_id,
            access_key_secret,
        }
    }

    fn host(&self) -> String {
        format!("{}.{}.aliyuncs.com", self.bucket, self.region)
    }

    /// Canonical object URL. The OSS SDK reports `http://` URLs; forcing the
    /// scheme to https is the orchestrator's responsibility, mirrored here by
    /// returning the URL exactly as the provider would.
    fn object_url(&self, key: &str) -> String {
        format!("http://{}/{}", self.host(), key)
    }
}

#[async_trait]
impl ObjectStorage for OssStorage {
    async fn put_object(
        &self,
        key: &str,
        data: Bytes,
        on_progress: ProgressFn,
    ) -> StorageResult<String> {
        let size = data.len() as u64;
        let content_type = content_type_for_key(key);
        let date = gmt_date(Utc::now());
        let request_url = format!("https://{}/{}", self.host(), encode_key_path(key));

        let authorization = oss_authorization(
            &self.access_key_id,
            &self.access_key_secret,
            "PUT",
            content_type,
            &date,
            &self.bucket,
            key,
        );

        let start = std::time::Instant::now();

        let response = self
            .http
            .put(&request_url)
            .header(AUTHORIZATION, authorization)
            .header(DATE, date)
            .header(CONTENT_TYPE, content_type)
            .header(CONTENT_LENGTH, size)
            .body(progress_body(data, on_progress.clone()))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            tracing::error!(
                bucket = %self.bucket,
                key = %key,
                size_bytes = size,
                status = %status,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "OSS upload failed"
            );
            return Err(StorageError::UploadFailed {
                provider: StorageProvider::Oss,
                message: format!("{}: {}", status, message),
            });
        }

        on_progress(UploadProgress::new(size, size));

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "OSS upload successful"
        );

        Ok(self.object_url(key))
    }

    fn provider(&self) -> StorageProvider {
        StorageProvider::Oss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> OssStorage {
        OssStorage::new(
            "pics".to_string(),
            "oss-cn-hangzhou".to_string(),
            "LTAItest".to_string(),
            "secret".to_string(),
        )
    }

    #[test]
    fn native_url_keeps_provider_scheme() {
        // http on purpose: the orchestrator owns the https rewrite.
        assert_eq!(
            storage().object_url("images/8-26-1756200000000.jpg"),
            "http://pics.oss-cn-hangzhou.aliyuncs.com/images/8-26-1756200000000.jpg"
        );
    }

    #[test]
    fn provider_tag() {
        assert_eq!(storage().provider(), StorageProvider::Oss);
    }
}
