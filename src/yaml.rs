//! read_yaml: load a YAML configuration file
//!
//! Parses with safe semantics only: no custom tags, no arbitrary object
//! construction. The document root must be a mapping.

use std::fs;
use std::path::Path;

use tracing::{error, info};

use crate::error::{FileUtilsError, Result};
use crate::mapping::ConfigMap;

/// Read a YAML file into a [`ConfigMap`].
///
/// # Arguments
/// * `path` - Path to the YAML file
///
/// # Returns
/// * `Ok(ConfigMap)` - Document content, keys in document order
/// * `Err(FileUtilsError)` - `NotFound` if the path does not exist, `Parse`
///   if the content is not a valid YAML mapping
///
/// # Examples
/// ```ignore
/// use huginn_fileutils::read_yaml;
/// use std::path::Path;
///
/// let config = read_yaml(Path::new("params.yaml"))?;
/// let epochs = config.get_u64("training.epochs");
/// ```
pub fn read_yaml(path: &Path) -> Result<ConfigMap> {
    let raw = fs::read_to_string(path).map_err(|e| {
        let err = FileUtilsError::from_io(path, e);
        error!("Failed to read YAML file {:?}: {}", path, err);
        err
    })?;

    let document: serde_yaml::Value = serde_yaml::from_str(&raw).map_err(|e| {
        error!("Failed to parse YAML file {:?}: {}", path, e);
        FileUtilsError::Parse {
            format: "YAML",
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;

    let config = ConfigMap::from_document(document).map_err(|reason| {
        error!("Failed to parse YAML file {:?}: {}", path, reason);
        FileUtilsError::Parse {
            format: "YAML",
            path: path.display().to_string(),
            message: reason.to_string(),
        }
    })?;

    info!("Loaded YAML config from {:?}", path);
    Ok(config)
}
