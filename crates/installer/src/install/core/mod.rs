//! Core types used throughout the install procedure
//!
//! Errors, progress reporting, precondition checks, and the filesystem
//! primitives the installer is built from.

pub mod error;
pub mod files;
pub mod progress;
pub mod validation;

// Re-export main types for convenience
pub use error::{FileOperation, InstallError, Result};
pub use files::{copy_dir_recursive, copy_file, dir_contains_entry, remove_dir_tree, CopyStats};
pub use progress::{
    CompositeProgressReporter, ConsoleProgressReporter, IntoProgressCallback,
    NullProgressReporter, ProgressCallback, ProgressEvent, ProgressReporter,
};
pub use validation::{validate_assembly_path, validate_game_data_dir};

use std::path::PathBuf;

/// What a successful install run did
///
/// Returned by [`Installer::install`](crate::install::Installer::install);
/// purely informational, the filesystem contract does not depend on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSummary {
    /// The populated mod directory inside the game-data directory
    pub mod_dir: PathBuf,
    /// Whether a previous install was removed before copying
    pub replaced_previous: bool,
    /// Data files copied, plus the assembly
    pub files_installed: usize,
    /// Total bytes written
    pub bytes_installed: u64,
}
