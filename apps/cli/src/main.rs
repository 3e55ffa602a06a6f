//! Command-line installer for the DangIt mod
//!
//! Copies the bundled `Data` payload and the compiled assembly into
//! `<GAME_DATA_DIR>/DangIt`, replacing any previous install there.

use std::error::Error as _;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use installer::{ConsoleProgressReporter, InstallConfig, Installer, IntoProgressCallback};

/// Deploys the DangIt plugin into a KSP GameData directory
#[derive(Parser, Debug)]
#[command(name = "install")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The game's GameData directory to install into
    game_data_dir: PathBuf,

    /// The compiled DangIt assembly to deploy
    assembly_path: PathBuf,
}

fn main() {
    // Diagnostics go to stderr; stdout carries only the progress messages.
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::WARN)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = InstallConfig::new(args.game_data_dir, args.assembly_path);
    let installer = Installer::new(config)
        .with_progress_callback(ConsoleProgressReporter::new().into_callback());

    if let Err(e) = installer.install() {
        eprintln!("error: {e}");
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        exit(if e.is_precondition() { 2 } else { 1 });
    }
}
