//! Tencent COS storage adapter.
//!
//! Objects are uploaded with a signed `PUT` to the bucket's virtual-hosted
//! endpoint `{bucket}.cos.{region}.myqcloud.com`. The signature is the COS
//! v5 `q-sign-algorithm=sha1` Authorization header.

use crate::body::progress_body;
use crate::keys::{content_type_for_key, encode_key_path};
use crate::sign::cos_authorization;
use crate::traits::{ObjectStorage, ProgressFn, StorageError, StorageProvider, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use picbed_core::UploadProgress;
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};

const SIGNATURE_VALID_SECS: i64 = 600;

/// Tencent COS adapter
#[derive(Clone)]
pub struct CosStorage {
    http: reqwest::Client,
    bucket: String,
    region: String,
    secret_id: String,
    secret_key: String,
}

impl CosStorage {
    /// Create a new COS adapter.
    ///
    /// # Arguments
    /// * `bucket` - bucket name including the appid suffix (e.g. "pics-1250000000")
    /// * `region` - COS region identifier (e.g. "ap-shanghai")
    pub fn new(bucket: String, region: String, secret_id: String, secret_key: String) -> Self {
        CosStorage {
            http: reqwest::Client::new(),
            bucket,
            region,
            secret_id,
            secret_key,
        }
    }

    fn host(&self) -> String {
        format!("{}.cos.{}.myqcloud.com", self.bucket, self.region)
    }

    /// Canonical object URL. COS reports object locations over https already;
    /// the orchestrator still owns any CDN override.
    fn object_url(&self, key: &str) -> String {
        format!("https://{}/{}", self.host(), key)
    }
}

#[async_trait]
impl ObjectStorage for CosStorage {
    async fn put_object(
        &self,
        key: &str,
        data: Bytes,
        on_progress: ProgressFn,
    ) -> StorageResult<String> {
        let size = data.len() as u64;
        let url_path = format!("/{}", key);
        let request_url = format!("https://{}/{}", self.host(), encode_key_path(key));

        let authorization = cos_authorization(
            &self.secret_id,
            &self.secret_key,
            "PUT",
            &url_path,
            Utc::now(),
            SIGNATURE_VALID_SECS,
        );

        let start = std::time::Instant::now();

        let response = self
            .http
            .put(&request_url)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, content_type_for_key(key))
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
                "COS upload failed"
            );
            return Err(StorageError::UploadFailed {
                provider: StorageProvider::Cos,
                message: format!("{}: {}", status, message),
            });
        }

        on_progress(UploadProgress::new(size, size));

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "COS upload successful"
        );

        Ok(self.object_url(key))
    }

    fn provider(&self) -> StorageProvider {
        StorageProvider::Cos
    }
}
