//! Command-line surface.
//!
//! The surface is strictly positional: a required source path and an
//! optional second value that turns on execution after compiling. clap
//! rejects zero arguments and anything past the second.

use std::path::PathBuf;

use clap::Parser;

/// Compile a VEX program with a local Houdini install, optionally running it.
#[derive(Parser)]
#[command(name = "vexrun")]
#[command(about = "Compile a .vfl program with the local Houdini toolchain")]
#[command(version)]
pub struct Cli {
    /// Path to the .vfl program to compile
    pub source: PathBuf,

    /// Pass any second value to also run the compiled program with vexexec
    pub run: Option<String>,
}

impl Cli {
    /// Whether the compiled artifact should also be executed.
    pub fn should_run(&self) -> bool {
        self.run.is_some()
    }
}
