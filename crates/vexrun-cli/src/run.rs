//! Compile and execute orchestration.
//!
//! Two strictly sequential, blocking subprocess calls: `vcc` to compile,
//! then optionally `vexexec` to run the artifact. Exit statuses of the
//! tools are not inspected; a compile failure still proceeds to execution
//! when requested, matching the tools' own console diagnostics being the
//! source of truth. Only a failure to start a process is surfaced.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;
use vexrun_core::{Resolution, toolchain};

use crate::error::CliError;

/// Options forwarded to `vexexec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOptions {
    /// Worker threads for the VEX program (`-p`).
    pub threads: u32,
    /// Report execution time (`-t`).
    pub timed: bool,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self {
            threads: 1,
            timed: true,
        }
    }
}

fn vcc_command(vcc: &Path, source: &Path, artifact: &Path) -> Command {
    let mut cmd = Command::new(vcc);
    cmd.arg(source).arg("-o").arg(artifact);
    cmd
}

fn vexexec_command(vexexec: &Path, artifact: &Path, options: ExecOptions) -> Command {
    let mut cmd = Command::new(vexexec);
    cmd.arg("-p").arg(options.threads.to_string());
    if options.timed {
        cmd.arg("-t");
    }
    cmd.arg(artifact);
    cmd
}

/// Compile a source file with the install's `vcc`, returning the artifact path.
pub fn compile(install: &Path, source: &Path) -> Result<PathBuf, CliError> {
    let vcc = toolchain::vcc_path(install);
    let artifact = toolchain::artifact_path(source);

    println!("Compiling:\n\t{}", source.display());
    let status = vcc_command(&vcc, source, &artifact)
        .status()
        .map_err(|e| CliError::Process(format!("failed to start {}: {}", vcc.display(), e)))?;
    debug!(code = ?status.code(), "vcc finished");

    Ok(artifact)
}

/// Run a compiled artifact with the install's `vexexec`.
pub fn execute(install: &Path, artifact: &Path, options: ExecOptions) -> Result<(), CliError> {
    let vexexec = toolchain::vexexec_path(install);

    println!("Executing:\n\t{}", artifact.display());
    let status = vexexec_command(&vexexec, artifact, options)
        .status()
        .map_err(|e| CliError::Process(format!("failed to start {}: {}", vexexec.display(), e)))?;
    debug!(code = ?status.code(), "vexexec finished");

    Ok(())
}

/// Compile a source file and optionally run the result.
pub fn compile_and_run(
    resolution: &Resolution,
    source: &Path,
    run: bool,
    options: ExecOptions,
) -> Result<(), CliError> {
    println!("Using Houdini install:\n\t{}", resolution.install.display());

    let artifact = compile(&resolution.install, source)?;
    if run {
        execute(&resolution.install, &artifact, options)?;
    }

    Ok(())
}
