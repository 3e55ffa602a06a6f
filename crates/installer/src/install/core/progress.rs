//! Progress reporting for install runs
//!
//! The installer announces each step through a callback instead of printing
//! directly, so frontends can choose how (or whether) to surface progress.

use std::path::PathBuf;
use std::sync::Arc;

/// Progress callback invoked once per install step
pub type ProgressCallback = Arc<dyn Fn(ProgressEvent) + Send + Sync>;

/// Events emitted during an install run, in the order the steps execute
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// A previous install was found and is being deleted. Only emitted when
    /// the game-data directory actually contained a prior mod directory.
    RemovingPreviousInstall { path: PathBuf },
    /// The bundled data tree is being copied into the mod directory
    CopyingData {
        source: PathBuf,
        destination: PathBuf,
    },
    /// The assembly is being copied to its fixed destination name
    CopyingAssembly {
        source: PathBuf,
        destination: PathBuf,
    },
    /// The run finished successfully
    InstallComplete {
        files_installed: usize,
        bytes_installed: u64,
    },
}

/// Trait for progress reporting with per-event hooks
pub trait ProgressReporter: Send + Sync {
    fn on_removing_previous_install(&self, _path: &std::path::Path) {}
    fn on_copying_data(&self, _source: &std::path::Path, _destination: &std::path::Path) {}
    fn on_copying_assembly(&self, _source: &std::path::Path, _destination: &std::path::Path) {}
    fn on_install_complete(&self, _files_installed: usize, _bytes_installed: u64) {}
}

/// Extension trait to convert a [`ProgressReporter`] into a [`ProgressCallback`]
pub trait IntoProgressCallback {
    fn into_callback(self) -> ProgressCallback;
}

impl<T: ProgressReporter + 'static> IntoProgressCallback for T {
    fn into_callback(self) -> ProgressCallback {
        Arc::new(move |event| match event {
            ProgressEvent::RemovingPreviousInstall { path } => {
                self.on_removing_previous_install(&path);
            }
            ProgressEvent::CopyingData {
                source,
                destination,
            } => {
                self.on_copying_data(&source, &destination);
            }
            ProgressEvent::CopyingAssembly {
                source,
                destination,
            } => {
                self.on_copying_assembly(&source, &destination);
            }
            ProgressEvent::InstallComplete {
                files_installed,
                bytes_installed,
            } => {
                self.on_install_complete(files_installed, bytes_installed);
            }
        })
    }
}

/// Console progress reporter that prints each announcement to stdout
#[derive(Debug, Default)]
pub struct ConsoleProgressReporter;

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn on_removing_previous_install(&self, path: &std::path::Path) {
        println!("Removing previous install at {}...", path.display());
    }

    fn on_copying_data(&self, _source: &std::path::Path, destination: &std::path::Path) {
        println!("Copying data to {}...", destination.display());
    }

    fn on_copying_assembly(&self, _source: &std::path::Path, destination: &std::path::Path) {
        println!("Copying assembly to {}...", destination.display());
    }

    fn on_install_complete(&self, files_installed: usize, bytes_installed: u64) {
        println!("Done! Installed {files_installed} files ({bytes_installed} bytes).");
    }
}

/// Null progress reporter that does nothing
#[derive(Debug, Default)]
pub struct NullProgressReporter;

impl ProgressReporter for NullProgressReporter {}

/// Composite progress reporter that forwards events to multiple reporters
pub struct CompositeProgressReporter {
    reporters: Vec<Box<dyn ProgressReporter>>,
}

impl std::fmt::Debug for CompositeProgressReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeProgressReporter")
            .field("reporters_count", &self.reporters.len())
            .finish()
    }
}

impl CompositeProgressReporter {
    pub fn new() -> Self {
        Self {
            reporters: Vec::new(),
        }
    }

    pub fn add_reporter<R: ProgressReporter + 'static>(mut self, reporter: R) -> Self {
        self.reporters.push(Box::new(reporter));
        self
    }
}

impl Default for CompositeProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for CompositeProgressReporter {
    fn on_removing_previous_install(&self, path: &std::path::Path) {
        for reporter in &self.reporters {
            reporter.on_removing_previous_install(path);
        }
    }

    fn on_copying_data(&self, source: &std::path::Path, destination: &std::path::Path) {
        for reporter in &self.reporters {
            reporter.on_copying_data(source, destination);
        }
    }

    fn on_copying_assembly(&self, source: &std::path::Path, destination: &std::path::Path) {
        for reporter in &self.reporters {
            reporter.on_copying_assembly(source, destination);
        }
    }

    fn on_install_complete(&self, files_installed: usize, bytes_installed: u64) {
        for reporter in &self.reporters {
            reporter.on_install_complete(files_installed, bytes_installed);
        }
    }
}
