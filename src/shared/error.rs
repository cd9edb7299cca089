use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and schedulers to distinguish between
/// different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - inventory completed and the report was written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (directory unreachable, config error, write error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the inventory run.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Configuration file not found: {path}\n\n💡 Hint: Create a bitlocker-inventory.config.yml with the directory connection settings, or pass one with --config")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse configuration file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Directory service unavailable: {details}\n\n💡 Hint: Verify the host and port in the configuration file and that a domain controller is reachable from this machine")]
    DirectoryUnavailable { details: String },

    #[error("Directory authentication failed for {bind_dn}\n\n💡 Hint: Verify the bind DN and password in the configuration file")]
    AuthenticationFailed { bind_dn: String },

    #[error("Directory search failed under {base}\nDetails: {details}")]
    SearchFailed { base: String, details: String },

    #[error("Failed to write report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    ReportWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
