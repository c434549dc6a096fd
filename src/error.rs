//! Error taxonomy shared by every file utility.
//!
//! Each operation logs its failure with path context, then returns the error
//! unchanged to the caller. Nothing is retried or swallowed here.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur during file utility operations
#[derive(Error, Debug)]
pub enum FileUtilsError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Failed to parse {format} file {path}: {message}")]
    Parse {
        format: &'static str,
        path: String,
        message: String,
    },

    #[error("Failed to serialize {format} data for {path}: {message}")]
    Serialize {
        format: &'static str,
        path: String,
        message: String,
    },

    #[error("Failed to deserialize binary artifact {path}: {message}")]
    Deserialize { path: String, message: String },

    #[error("Invalid base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for file utility operations
pub type Result<T> = std::result::Result<T, FileUtilsError>;

impl FileUtilsError {
    /// Classify an I/O failure: a missing path becomes [`NotFound`], every
    /// other kind keeps the underlying error as [`Io`].
    ///
    /// [`NotFound`]: FileUtilsError::NotFound
    /// [`Io`]: FileUtilsError::Io
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            FileUtilsError::NotFound(path.display().to_string())
        } else {
            FileUtilsError::Io {
                path: path.display().to_string(),
                source,
            }
        }
    }
}
