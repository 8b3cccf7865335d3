//! CLI-specific error types and exit-code mappings.

use thiserror::Error;
use vexrun_core::ResolveError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Install resolution failed.
    #[error("{0}")]
    Resolve(#[from] ResolveError),

    /// A toolchain subprocess could not be started.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 2: Misuse of shell command (clap handles argument errors itself)
    /// - 64-78: Specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Resolve(_) => 78, // EX_CONFIG
            CliError::Process(_) => 71, // EX_OSERR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let resolve = CliError::Resolve(ResolveError::UnknownPlatform {
            descriptor: "Plan9".to_string(),
        });
        assert_eq!(resolve.exit_code(), 78);

        let process = CliError::Process("vcc not found".to_string());
        assert_eq!(process.exit_code(), 71);
    }
}
