//! Error types for the install procedure, with path and operation context

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while deploying the mod into a game-data directory
#[derive(Error, Debug)]
pub enum InstallError {
    /// The supplied game-data directory does not exist
    #[error("'{path}' is not a valid game-data directory")]
    InvalidGameDataDir { path: PathBuf },

    /// The supplied assembly path does not exist
    #[error("'{path}' is not a valid assembly path")]
    InvalidAssemblyPath { path: PathBuf },

    /// A filesystem operation failed partway through the run
    #[error("I/O error while {operation} '{path}'")]
    Io {
        path: PathBuf,
        operation: FileOperation,
        #[source]
        source: std::io::Error,
    },
}

/// The filesystem operation being attempted when an [`InstallError::Io`] arose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    ReadDir,
    Remove,
    CreateDir,
    Copy,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::ReadDir => write!(f, "reading directory"),
            FileOperation::Remove => write!(f, "removing"),
            FileOperation::CreateDir => write!(f, "creating directory"),
            FileOperation::Copy => write!(f, "copying"),
        }
    }
}

pub type Result<T> = std::result::Result<T, InstallError>;

impl InstallError {
    /// Build an [`InstallError::Io`] for a failed operation on `path`
    pub(crate) fn io(
        path: impl Into<PathBuf>,
        operation: FileOperation,
        source: std::io::Error,
    ) -> Self {
        InstallError::Io {
            path: path.into(),
            operation,
            source,
        }
    }

    /// Whether this error is a violated input precondition rather than a
    /// failure of the install itself. Precondition failures are raised before
    /// any filesystem mutation happens.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            InstallError::InvalidGameDataDir { .. } | InstallError::InvalidAssemblyPath { .. }
        )
    }

    /// The path the error is about, for callers that report by location
    pub fn path(&self) -> &Path {
        match self {
            InstallError::InvalidGameDataDir { path } => path,
            InstallError::InvalidAssemblyPath { path } => path,
            InstallError::Io { path, .. } => path,
        }
    }
}
