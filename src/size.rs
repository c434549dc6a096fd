//! get_size: human-readable file size

use std::fs;
use std::path::Path;

use tracing::error;

use crate::error::{FileUtilsError, Result};

/// Report a file's size in whole kibibytes, formatted as `"~ 4 KB"`.
///
/// Rounds half away from zero, so a 512-byte file reports as `"~ 1 KB"`.
pub fn get_size(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| {
        let err = FileUtilsError::from_io(path, e);
        error!("Failed to read metadata for {:?}: {}", path, err);
        err
    })?;

    let size_in_kb = (metadata.len() as f64 / 1024.0).round() as u64;
    Ok(format!("~ {} KB", size_in_kb))
}
