//! decode_image / encode_image_to_base64: image transport helpers
//!
//! Standard base64 alphabet, no line wrapping. Used to move image payloads
//! in and out of the prediction surface.

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use tracing::{error, info};

use crate::error::{FileUtilsError, Result};

/// Decode a base64 string and write the raw bytes to `output_path`,
/// overwriting any existing file.
///
/// Surrounding ASCII whitespace in `data` is ignored; embedded line breaks
/// are not accepted.
pub fn decode_image(data: &str, output_path: &Path) -> Result<()> {
    let bytes = general_purpose::STANDARD.decode(data.trim()).map_err(|e| {
        error!("Failed to decode base64 image data: {}", e);
        FileUtilsError::Base64(e)
    })?;

    fs::write(output_path, bytes).map_err(|e| {
        let err = FileUtilsError::from_io(output_path, e);
        error!("Failed to write image {:?}: {}", output_path, err);
        err
    })?;

    info!("Decoded image written to {:?}", output_path);
    Ok(())
}

/// Read the file at `path` and return its bytes as standard base64.
pub fn encode_image_to_base64(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| {
        let err = FileUtilsError::from_io(path, e);
        error!("Failed to read image {:?}: {}", path, err);
        err
    })?;

    let encoded = general_purpose::STANDARD.encode(bytes);
    info!("Encoded image {:?} as base64", path);
    Ok(encoded)
}
