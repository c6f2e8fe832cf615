//! Pipeline error taxonomy.
//!
//! Every failure is caught at the orchestrator boundary and converted to a
//! single user-visible notification; nothing is retried and nothing panics
//! the host. A user cancel is not an error (see `PipelineOutcome`).

use picbed_compress::CompressionError;
use picbed_storage::StorageError;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use thiserror::Error;

/// The step a failed invocation was in when it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Selecting,
    Reading,
    Compressing,
    Uploading,
    Inserting,
}

impl Display for PipelineStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            PipelineStage::Selecting => "selecting",
            PipelineStage::Reading => "reading",
            PipelineStage::Compressing => "compressing",
            PipelineStage::Uploading => "uploading",
            PipelineStage::Inserting => "inserting",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Compression(#[from] CompressionError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl PipelineError {
    /// Which stage this failure belongs to. Configuration problems are
    /// mapped before a pipeline exists (the host loads and validates the
    /// provider config), so they never appear here.
    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineError::Io { .. } => PipelineStage::Reading,
            PipelineError::Compression(_) => PipelineStage::Compressing,
            PipelineError::Storage(_) => PipelineStage::Uploading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_map_to_variants() {
        let io = PipelineError::Io {
            path: PathBuf::from("/tmp/x.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(io.stage(), PipelineStage::Reading);
        assert!(io.to_string().contains("/tmp/x.png"));

        let comp = PipelineError::from(CompressionError::QuotaExceeded);
        assert_eq!(comp.stage(), PipelineStage::Compressing);

        let storage = PipelineError::from(StorageError::UploadFailed {
            provider: picbed_storage::StorageProvider::Cos,
            message: "denied".to_string(),
        });
        assert_eq!(storage.stage(), PipelineStage::Uploading);
    }
}
