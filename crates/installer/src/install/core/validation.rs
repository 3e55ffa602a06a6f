//! Precondition checks for the caller-supplied paths
//!
//! Both checks run before any filesystem mutation. The first violated
//! precondition aborts the run; there is no partial validation reporting.

use std::path::Path;
use tracing::{debug, warn};

use crate::install::core::{InstallError, Result};

/// Require that the supplied game-data directory exists
pub fn validate_game_data_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(InstallError::InvalidGameDataDir {
            path: path.to_path_buf(),
        });
    }
    if path.is_dir() {
        debug!("Game-data directory present: {}", path.display());
    } else {
        // Only existence is required; a non-directory will fail later steps.
        warn!(
            "Game-data path {} exists but is not a directory",
            path.display()
        );
    }
    Ok(())
}

/// Require that the supplied assembly path exists
pub fn validate_assembly_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(InstallError::InvalidAssemblyPath {
            path: path.to_path_buf(),
        });
    }
    if path.is_file() {
        debug!("Assembly present: {}", path.display());
    } else {
        warn!("Assembly path {} exists but is not a file", path.display());
    }
    Ok(())
}
