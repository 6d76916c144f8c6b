//! Error types for the eat binaries.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for eat operations.
///
/// Each variant maps to a specific exit code via [`EatError::exit_code`].
#[derive(Error, Debug)]
pub enum EatError {
    /// Bad arguments or inputs, reported before any process is launched.
    #[error("{0}")]
    Usage(String),

    /// The requested agent tool is not one of the supported executables.
    #[error("unsupported tool '{0}' (expected one of: claude, codex)")]
    UnsupportedTool(String),

    /// Defaults file, environment or version file is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The external executable could not be spawned.
    #[error("failed to launch '{program}': {reason}")]
    Launch { program: String, reason: String },

    /// The external executable ran and exited unsuccessfully.
    #[error("{}", external_process_message(program, *code))]
    ExternalProcess { program: String, code: Option<i32> },

    /// The status page server failed to bind or serve.
    #[error("server error: {0}")]
    Server(String),
}

fn external_process_message(program: &str, code: Option<i32>) -> String {
    match code {
        Some(code) => format!("'{}' exited with status {}", program, code),
        None => format!("'{}' was terminated by a signal", program),
    }
}

impl EatError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// External process failures mirror the child's own exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            EatError::Usage(_) => exit_codes::USAGE_ERROR,
            EatError::UnsupportedTool(_) => exit_codes::FAILURE,
            EatError::Config(_) => exit_codes::FAILURE,
            EatError::Launch { .. } => exit_codes::LAUNCH_FAILURE,
            EatError::ExternalProcess { code, .. } => code.unwrap_or(exit_codes::FAILURE),
            EatError::Server(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for eat operations.
pub type Result<T> = std::result::Result<T, EatError>;
