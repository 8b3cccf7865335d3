//! CLI adapter for vexrun: argument parsing, subprocess orchestration, and
//! exit-code mapping.

pub mod error;
pub mod parser;
pub mod run;

// Re-export primary types for convenient access
pub use error::CliError;
pub use parser::Cli;
pub use run::ExecOptions;
