//! Error taxonomy shared by every stage of card production.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::card::ImageDimensions;

/// Failures raised while validating inputs or rendering cards.
///
/// None of these are recoverable: callers propagate them to the binary,
/// which reports the chain and stops the run.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("path does not exist: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("{} is not a valid PNG file: {reason}", path.display())]
    InvalidImageFormat { path: PathBuf, reason: String },

    #[error("{} does not match dimensions (expected {expected}, got {actual})", path.display())]
    DimensionMismatch {
        path: PathBuf,
        expected: ImageDimensions,
        actual: ImageDimensions,
    },

    #[error("could not find font '{0}' in the system")]
    FontNotFound(String),

    #[error("could not read font '{name}' from {}", path.display())]
    FontUnreadable {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse font '{name}' from {}", path.display())]
    FontUnparsable { name: String, path: PathBuf },

    #[error("text file {} is empty or missing", path.display())]
    EmptyOrMissingTextFile {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    #[error("there are no templates in {}", dir.display())]
    NoTemplatesFound { dir: PathBuf },

    #[error("there are no TrueType fonts in the system")]
    NoFontsFound,

    #[error("prompt for {label} failed: {reason}")]
    PromptAborted { label: String, reason: String },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl CardError {
    /// Wrap an I/O failure with a human-readable description of the operation.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Convenience result alias used across the crate.
pub type Result<T> = std::result::Result<T, CardError>;
