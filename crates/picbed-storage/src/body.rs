//! Progress-reporting request body.
//!
//! Uploads stream the payload in fixed-size chunks so the progress callback
//! fires as the transport consumes the body. Percent is cumulative and
//! therefore monotonically non-decreasing.

use crate::traits::ProgressFn;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use picbed_core::UploadProgress;

const CHUNK_SIZE: usize = 64 * 1024;

/// Chunk `data` and report cumulative progress as each chunk is yielded.
fn chunk_with_progress(
    data: Bytes,
    on_progress: ProgressFn,
) -> impl Stream<Item = Result<Bytes, std::io::Error>> {
    let total = data.len() as u64;

    let mut chunks: Vec<(u64, Bytes)> = Vec::with_capacity(data.len() / CHUNK_SIZE + 1);
    let mut offset = 0usize;
    while offset < data.len() {
        let end = (offset + CHUNK_SIZE).min(data.len());
        chunks.push((end as u64, data.slice(offset..end)));
        offset = end;
    }

    futures::stream::iter(chunks).map(move |(loaded, chunk)| {
        on_progress(UploadProgress::new(loaded, total));
        Ok(chunk)
    })
}

/// Wrap `data` in a request body that reports cumulative progress per chunk.
pub(crate) fn progress_body(data: Bytes, on_progress: ProgressFn) -> reqwest::Body {
    reqwest::Body::wrap_stream(chunk_with_progress(data, on_progress))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn progress_is_monotonic_and_reaches_total() {
        let data = Bytes::from(vec![7u8; CHUNK_SIZE * 2 + 100]);
        let total = data.len() as u64;
        let seen: Arc<Mutex<Vec<UploadProgress>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        let mut stream = std::pin::pin!(chunk_with_progress(
            data.clone(),
            Arc::new(move |p| sink.lock().unwrap().push(p)),
        ));

        let mut sent = Vec::new();
        while let Some(chunk) = stream.next().await {
            sent.extend_from_slice(&chunk.unwrap());
        }
        assert_eq!(sent, data.to_vec());

        let reports = seen.lock().unwrap();
        assert_eq!(reports.len(), 3);
        assert!(reports.windows(2).all(|w| w[0].percent <= w[1].percent));
        assert_eq!(reports.last().unwrap().loaded, total);
        assert_eq!(reports.last().unwrap().percent, 100);
        assert!(reports.iter().all(|p| p.total == total));
    }

    #[tokio::test]
    async fn empty_payload_yields_no_chunks() {
        let seen: Arc<Mutex<Vec<UploadProgress>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut stream = std::pin::pin!(chunk_with_progress(
            Bytes::new(),
            Arc::new(move |p| sink.lock().unwrap().push(p)),
        ));
        assert!(stream.next().await.is_none());
        assert!(seen.lock().unwrap().is_empty());
    }
}
