//! save_json / load_json: JSON files for metrics, scores, and manifests
//!
//! Writes are human-readable (4-space indent) and overwrite the target file.
//! Loads return the same [`ConfigMap`] shape as YAML configs.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{error, info};

use crate::error::{FileUtilsError, Result};
use crate::mapping::ConfigMap;

/// Serialize `data` as 4-space-indented JSON and write it to `path`,
/// overwriting any existing file.
pub fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer).map_err(|e| {
        error!("Failed to serialize JSON data for {:?}: {}", path, e);
        FileUtilsError::Serialize {
            format: "JSON",
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;

    fs::write(path, &buf).map_err(|e| {
        let err = FileUtilsError::from_io(path, e);
        error!("Failed to write JSON file {:?}: {}", path, err);
        err
    })?;

    info!("Saved JSON to {:?}", path);
    Ok(())
}

/// Read a JSON file into a [`ConfigMap`]. The document root must be an
/// object.
///
/// Fails with `NotFound` if the path does not exist and `Parse` if the
/// content is malformed or the root is not an object.
pub fn load_json(path: &Path) -> Result<ConfigMap> {
    let raw = fs::read_to_string(path).map_err(|e| {
        let err = FileUtilsError::from_io(path, e);
        error!("Failed to read JSON file {:?}: {}", path, err);
        err
    })?;

    let document: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
        error!("Failed to parse JSON file {:?}: {}", path, e);
        FileUtilsError::Parse {
            format: "JSON",
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;

    // JSON object keys are always strings, so this conversion is total.
    let document = serde_yaml::to_value(document).map_err(|e| {
        error!("Failed to parse JSON file {:?}: {}", path, e);
        FileUtilsError::Parse {
            format: "JSON",
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;

    let config = ConfigMap::from_document(document).map_err(|reason| {
        error!("Failed to parse JSON file {:?}: {}", path, reason);
        FileUtilsError::Parse {
            format: "JSON",
            path: path.display().to_string(),
            message: reason.to_string(),
        }
    })?;

    info!("Loaded JSON from {:?}", path);
    Ok(config)
}
