//! save_binary / load_binary: binary artifact persistence
//!
//! Artifacts (model weights, encoder state, cached tensors) are stored in
//! bincode's little-endian encoding. The format is concrete and stable for a
//! fixed type definition; loading expects the same type that wrote the file.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info};

use crate::error::{FileUtilsError, Result};

/// Encode `value` with bincode and write it to `path`, overwriting any
/// existing file.
pub fn save_binary<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes = bincode::serialize(value).map_err(|e| {
        error!("Failed to encode binary artifact for {:?}: {}", path, e);
        FileUtilsError::Serialize {
            format: "binary",
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;

    fs::write(path, bytes).map_err(|e| {
        let err = FileUtilsError::from_io(path, e);
        error!("Failed to write binary artifact {:?}: {}", path, err);
        err
    })?;

    info!("Saved binary artifact to {:?}", path);
    Ok(())
}

/// Deserialize a bincode artifact file into `T`.
///
/// # Arguments
/// * `path` - Path to the artifact file
///
/// # Returns
/// * `Ok(T)` - The decoded value; ownership transfers to the caller
/// * `Err(FileUtilsError)` - `NotFound` if the path does not exist,
///   `Deserialize` for a corrupted or incompatible artifact
///
/// # Examples
/// ```ignore
/// use huginn_fileutils::load_binary;
/// use std::path::Path;
///
/// let embeddings: Vec<f32> = load_binary(Path::new("encoder.bin"))?;
/// ```
pub fn load_binary<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).map_err(|e| {
        let err = FileUtilsError::from_io(path, e);
        error!("Failed to read binary artifact {:?}: {}", path, err);
        err
    })?;

    let value = bincode::deserialize(&bytes).map_err(|e| {
        error!("Failed to deserialize binary artifact {:?}: {}", path, e);
        FileUtilsError::Deserialize {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;

    info!("Loaded binary artifact from {:?}", path);
    Ok(value)
}
