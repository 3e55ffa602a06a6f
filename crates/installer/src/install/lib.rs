//! The install procedure
//!
//! Drives one run from start to finish: validate the supplied paths, remove
//! a previous install if present, copy the bundled data tree, copy the
//! assembly, report completion.

use std::path::Path;
use tracing::{debug, info};

use crate::install::config::{InstallConfig, MOD_DIR_NAME};
use crate::install::core::{
    copy_dir_recursive, copy_file, dir_contains_entry, remove_dir_tree, validate_assembly_path,
    validate_game_data_dir, InstallSummary, ProgressCallback, ProgressEvent, Result,
};

/// One-shot installer that deploys the mod into a game-data directory
///
/// A value over explicit inputs: construct it with an [`InstallConfig`],
/// optionally attach a progress callback, then run [`install`](Self::install).
/// Failures abort the run with no rollback; re-running is self-healing
/// because a fresh run first clears whatever a previous one left behind.
pub struct Installer {
    config: InstallConfig,
    progress_callback: Option<ProgressCallback>,
}

impl Installer {
    /// Create a new installer with the given configuration
    pub fn new(config: InstallConfig) -> Self {
        Self {
            config,
            progress_callback: None,
        }
    }

    /// Attach a progress callback for step announcements
    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Run the whole procedure, in strict order with no parallelism:
    ///
    /// 1. Validate that both supplied paths exist (fail-fast, the first
    ///    violation aborts before any mutation).
    /// 2. If the game-data directory has an immediate child named exactly
    ///    like the mod directory, recursively delete it.
    /// 3. Recursively copy the bundled data directory to the mod directory.
    /// 4. Copy the assembly to its fixed destination name inside the mod
    ///    directory.
    /// 5. Report completion.
    pub fn install(&self) -> Result<InstallSummary> {
        validate_game_data_dir(&self.config.game_data_dir)?;
        validate_assembly_path(&self.config.assembly_path)?;

        let mod_dir = self.config.mod_dir();
        let replaced_previous = self.remove_previous_install(&mod_dir)?;

        self.emit(ProgressEvent::CopyingData {
            source: self.config.data_dir.clone(),
            destination: mod_dir.clone(),
        });
        let stats = copy_dir_recursive(&self.config.data_dir, &mod_dir)?;

        let assembly_destination = self.config.assembly_destination();
        self.emit(ProgressEvent::CopyingAssembly {
            source: self.config.assembly_path.clone(),
            destination: assembly_destination.clone(),
        });
        let assembly_bytes = copy_file(&self.config.assembly_path, &assembly_destination)?;

        let summary = InstallSummary {
            mod_dir,
            replaced_previous,
            files_installed: stats.files + 1,
            bytes_installed: stats.bytes + assembly_bytes,
        };
        info!(
            "Install complete: {} files, {} bytes into {}",
            summary.files_installed,
            summary.bytes_installed,
            summary.mod_dir.display()
        );
        self.emit(ProgressEvent::InstallComplete {
            files_installed: summary.files_installed,
            bytes_installed: summary.bytes_installed,
        });

        Ok(summary)
    }

    /// Step 2: delete the previous install when the game-data directory has
    /// an immediate child of exactly the mod directory's name. The match
    /// considers only top-level entries; the entry's type is not checked, so
    /// a plain file of that name makes the removal fail.
    fn remove_previous_install(&self, mod_dir: &Path) -> Result<bool> {
        if !dir_contains_entry(&self.config.game_data_dir, MOD_DIR_NAME)? {
            debug!(
                "No previous install under {}",
                self.config.game_data_dir.display()
            );
            return Ok(false);
        }

        self.emit(ProgressEvent::RemovingPreviousInstall {
            path: mod_dir.to_path_buf(),
        });
        remove_dir_tree(mod_dir)?;
        Ok(true)
    }

    fn emit(&self, event: ProgressEvent) {
        debug!("Install step: {:?}", event);
        if let Some(ref callback) = self.progress_callback {
            callback(event);
        }
    }
}
