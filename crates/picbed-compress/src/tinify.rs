//! tinify (TinyPNG) compression adapter.
//!
//! Protocol: `POST /shrink` with the raw image bytes and HTTP basic auth
//! (`api:{key}`). A 201 response carries a JSON body whose `output.url`
//! points at the compressed object; a second authenticated GET fetches the
//! compressed bytes. Failures are mapped onto [`CompressionError`] and never
//! retried here.

use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;
use thiserror::Error;

const API_BASE: &str = "https://api.tinify.com";
const AUTH_USER: &str = "api";

/// Remote compression failures.
#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("Invalid compression API key")]
    InvalidKey,

    #[error("Compression quota exceeded for this API key")]
    QuotaExceeded,

    #[error("Unsupported image format: {0}")]
    Unsupported(String),

    #[error("Compression service error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("Compression transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Uniform compression contract: configured key plus raw bytes in,
/// compressed bytes out.
#[async_trait]
pub trait Compressor: Send + Sync {
    async fn compress(&self, api_key: &str, data: Bytes) -> Result<Bytes, CompressionError>;
}

#[derive(Debug, Deserialize)]
struct ShrinkResponse {
    output: ShrinkOutput,
}

#[derive(Debug, Deserialize)]
struct ShrinkOutput {
    url: String,
    size: u64,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    message: String,
}

/// Stateless tinify client over a shared `reqwest::Client`.
#[derive(Clone)]
pub struct TinifyClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for TinifyClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TinifyClient {
    pub fn new() -> Self {
        TinifyClient {
            http: reqwest::Client::new(),
            base_url: API_BASE.to_string(),
        }
    }

    /// Override the API endpoint, for tests against a local stub server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        TinifyClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn error_from_response(response: reqwest::Response) -> CompressionError {
        let status = response.status().as_u16();
        let body: ApiErrorBody = response.json().await.unwrap_or(ApiErrorBody {
            error: String::new(),
            message: String::new(),
        });
        match status {
            401 | 403 => CompressionError::InvalidKey,
            429 => CompressionError::QuotaExceeded,
            415 => CompressionError::Unsupported(body.message),
            _ => CompressionError::Service {
                status,
                message: if body.message.is_empty() {
                    body.error
                } else {
                    body.message
                },
            },
        }
    }
}

#[async_trait]
impl Compressor for TinifyClient {
    async fn compress(&self, api_key: &str, data: Bytes) -> Result<Bytes, CompressionError> {
        let source_size = data.len() as u64;

        let response = self
            .http
            .post(format!("{}/shrink", self.base_url))
            .basic_auth(AUTH_USER, Some(api_key))
            .body(data)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let shrink: ShrinkResponse = response.json().await?;

        let output = self
            .http
            .get(&shrink.output.url)
            .basic_auth(AUTH_USER, Some(api_key))
            .send()
            .await?;

        if !output.status().is_success() {
            return Err(Self::error_from_response(output).await);
        }

        let compressed = output.bytes().await?;

        tracing::info!(
            source_bytes = source_size,
            compressed_bytes = shrink.output.size,
            "tinify compression successful"
        );

        Ok(compressed)
    }
}
