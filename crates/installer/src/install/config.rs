//! Configuration for an install run

use std::path::PathBuf;

/// Name of the directory the mod occupies inside the game-data directory
pub const MOD_DIR_NAME: &str = "DangIt";

/// Destination filename for the assembly, regardless of its source name
pub const ASSEMBLY_FILE_NAME: &str = "DangIt.dll";

/// Default location of the bundled data payload, relative to the working
/// directory the installer runs from
pub const DEFAULT_DATA_DIR: &str = "Data";

/// Inputs for a single install run
///
/// The two caller-supplied paths must exist when the run starts; the data
/// directory is part of the installer's own distribution and is not treated
/// as validated user input.
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Root of the game's mod-loading tree
    pub game_data_dir: PathBuf,
    /// The compiled plugin binary to install
    pub assembly_path: PathBuf,
    /// The bundled data payload shipped alongside the installer
    pub data_dir: PathBuf,
}

impl InstallConfig {
    /// Create a config for the given game-data directory and assembly,
    /// with the data payload at its default location
    pub fn new<G: Into<PathBuf>, A: Into<PathBuf>>(game_data_dir: G, assembly_path: A) -> Self {
        Self {
            game_data_dir: game_data_dir.into(),
            assembly_path: assembly_path.into(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }

    /// Override where the bundled data payload is read from
    pub fn with_data_dir<P: Into<PathBuf>>(mut self, data_dir: P) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// The mod directory this run owns: `<game_data_dir>/DangIt`
    pub fn mod_dir(&self) -> PathBuf {
        self.game_data_dir.join(MOD_DIR_NAME)
    }

    /// Where the assembly ends up: `<game_data_dir>/DangIt/DangIt.dll`
    pub fn assembly_destination(&self) -> PathBuf {
        self.mod_dir().join(ASSEMBLY_FILE_NAME)
    }
}
