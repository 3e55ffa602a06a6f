//! Filesystem primitives for the install procedure
//!
//! Centralized file handling so every operation reports failures the same
//! way: the affected path plus what was being attempted.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::install::core::{FileOperation, InstallError, Result};

/// Totals accumulated while copying a directory tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Number of files copied
    pub files: usize,
    /// Total bytes copied
    pub bytes: u64,
}

/// Recursively copy `source` to `destination`.
///
/// The destination must not exist yet; missing intermediate directories are
/// created. Empty subdirectories in the source are recreated at the
/// destination. Fails on the first file that cannot be read or written,
/// leaving whatever was copied so far in place.
pub fn copy_dir_recursive(source: &Path, destination: &Path) -> Result<CopyStats> {
    if destination.symlink_metadata().is_ok() {
        return Err(InstallError::io(
            destination,
            FileOperation::CreateDir,
            std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "copy destination already exists",
            ),
        ));
    }

    let mut stats = CopyStats::default();
    copy_tree(source, destination, &mut stats)?;
    debug!(
        "Copied {} to {} ({} files, {} bytes)",
        source.display(),
        destination.display(),
        stats.files,
        stats.bytes
    );
    Ok(stats)
}

fn copy_tree(source: &Path, destination: &Path, stats: &mut CopyStats) -> Result<()> {
    // Open the source listing before creating anything, so a missing source
    // fails without leaving an empty destination directory behind.
    let entries = fs::read_dir(source)
        .map_err(|e| InstallError::io(source, FileOperation::ReadDir, e))?;

    fs::create_dir_all(destination)
        .map_err(|e| InstallError::io(destination, FileOperation::CreateDir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| InstallError::io(source, FileOperation::ReadDir, e))?;
        let path = entry.path();
        let target = destination.join(entry.file_name());

        if path.is_dir() {
            copy_tree(&path, &target, stats)?;
        } else {
            let bytes =
                fs::copy(&path, &target).map_err(|e| InstallError::io(&path, FileOperation::Copy, e))?;
            stats.files += 1;
            stats.bytes += bytes;
        }
    }

    Ok(())
}

/// Copy a single file, returning the number of bytes copied
pub fn copy_file(source: &Path, destination: &Path) -> Result<u64> {
    let bytes =
        fs::copy(source, destination).map_err(|e| InstallError::io(source, FileOperation::Copy, e))?;
    debug!(
        "Copied {} to {} ({} bytes)",
        source.display(),
        destination.display(),
        bytes
    );
    Ok(bytes)
}

/// Recursively delete a directory and everything under it
pub fn remove_dir_tree(path: &Path) -> Result<()> {
    fs::remove_dir_all(path).map_err(|e| InstallError::io(path, FileOperation::Remove, e))?;
    debug!("Removed {}", path.display());
    Ok(())
}

/// Whether `dir` has an immediate child with exactly the given name.
///
/// The match is exact and case-sensitive; the child's type is not inspected.
pub fn dir_contains_entry(dir: &Path, name: &str) -> Result<bool> {
    let entries =
        fs::read_dir(dir).map_err(|e| InstallError::io(dir, FileOperation::ReadDir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| InstallError::io(dir, FileOperation::ReadDir, e))?;
        if entry.file_name() == name {
            return Ok(true);
        }
    }

    Ok(false)
}
