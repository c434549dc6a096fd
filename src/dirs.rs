//! create_directories: directory setup for pipeline stages

use std::fs;
use std::path::Path;

use tracing::{error, info};

use crate::error::{FileUtilsError, Result};

/// Create every directory in `paths`, in order, including missing parents.
/// Directories that already exist are left untouched.
///
/// When `verbose` is true, each path is logged after creation.
pub fn create_directories<P: AsRef<Path>>(paths: &[P], verbose: bool) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(|e| {
            let err = FileUtilsError::from_io(path, e);
            error!("Failed to create directory {:?}: {}", path, err);
            err
        })?;

        if verbose {
            info!("Directory created: {:?}", path);
        }
    }
    Ok(())
}
