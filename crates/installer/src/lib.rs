//! Installer Library
//!
//! This library deploys the DangIt plugin into a Kerbal Space Program
//! `GameData` directory: any previous install is removed, the bundled data
//! tree is copied into place, and the compiled assembly lands under its
//! fixed destination name.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use installer::{
//!     ConsoleProgressReporter, InstallConfig, Installer, IntoProgressCallback,
//! };
//!
//! # fn main() -> installer::Result<()> {
//! // Point the run at the game and the freshly built assembly; the bundled
//! // data payload defaults to `Data` next to the installer.
//! let config = InstallConfig::new("/path/to/KSP/GameData", "bin/Release/DangIt.dll");
//!
//! let installer = Installer::new(config)
//!     .with_progress_callback(ConsoleProgressReporter::new().into_callback());
//!
//! let summary = installer.install()?;
//! println!(
//!     "installed {} files ({} bytes) into {}",
//!     summary.files_installed,
//!     summary.bytes_installed,
//!     summary.mod_dir.display()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior
//!
//! - **Destructive replace**: a pre-existing `DangIt` directory is deleted
//!   in full before copying, so no stale files survive a version change.
//! - **Fail-fast preconditions**: both supplied paths must exist before any
//!   filesystem mutation happens.
//! - **No rollback**: a failure partway through leaves a partial tree;
//!   re-running the installer is self-healing.
//! - **Progress events**: each step is announced through a callback so
//!   frontends decide how to surface progress.

pub mod install;

// Re-export commonly used types for convenience
pub use install::{
    CompositeProgressReporter, ConsoleProgressReporter, CopyStats, FileOperation, InstallConfig,
    InstallError, InstallSummary, Installer, IntoProgressCallback, NullProgressReporter,
    ProgressCallback, ProgressEvent, ProgressReporter, Result, ASSEMBLY_FILE_NAME,
    DEFAULT_DATA_DIR, MOD_DIR_NAME,
};
