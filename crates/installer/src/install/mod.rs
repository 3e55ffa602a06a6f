//! Install module
//!
//! Everything needed to deploy the mod into a game-data directory: the
//! run configuration, the core types, and the installer itself.

pub mod config;
pub mod core;
pub mod r#lib;

// Re-export main types for convenience
pub use config::{InstallConfig, ASSEMBLY_FILE_NAME, DEFAULT_DATA_DIR, MOD_DIR_NAME};
pub use core::{
    CompositeProgressReporter, ConsoleProgressReporter, CopyStats, FileOperation, InstallError,
    InstallSummary, IntoProgressCallback, NullProgressReporter, ProgressCallback, ProgressEvent,
    ProgressReporter, Result,
};
pub use r#lib::Installer;
