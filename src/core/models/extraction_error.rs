use std::path::PathBuf;

use thiserror::Error;

use crate::core::models::OcrResult;

/// Why an extraction produced no text.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The image could not be read or decoded.
    #[error("could not load image {path:?}: {source:#}")]
    Load {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The engine could not be invoked or failed while reading the image.
    #[error("text recognition failed: {source:#}")]
    Recognition {
        #[source]
        source: anyhow::Error,
    },
}

impl ExtractionError {
    pub fn load(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }

    pub fn recognition(source: anyhow::Error) -> Self {
        Self::Recognition { source }
    }

    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load { .. })
    }
}

pub type ExtractionResult = Result<OcrResult, ExtractionError>;
