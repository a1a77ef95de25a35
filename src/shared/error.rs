use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - configuration was generated
    Success = 0,
    /// Application error (invalid reference, missing setting, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
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
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for provider project generation.
///
/// `RegistryQueryFailed` is the only recoverable kind. It never escapes the
/// major version resolver and exists so the degraded-decision warning has
/// one rendering.
#[derive(Debug, Error)]
pub enum ProviderProjectError {
    #[error("Invalid terraform provider reference: '{reference}'\n\n💡 Hint: Use the form 'namespace/name@version', e.g. 'hashicorp/aws@5.42.0'")]
    InvalidReference { reference: String },

    #[error("Provider name '{name}' (from '{reference}') may not end with '-go'\n\n💡 Hint: The '-go' suffix is reserved for the generated Go package repositories")]
    ReservedSuffixConflict { reference: String, name: String },

    #[error("Missing required setting: {setting}\n\n💡 Hint: Pass it on the command line or set it in the config file")]
    MissingConfiguration { setting: String },

    #[error("Failed to query releases of {repository}: {details}")]
    RegistryQueryFailed { repository: String, details: String },

    #[error("Invalid config file: {path}\nDetails: {details}\n\n💡 Hint: Please verify the config file contents")]
    ConfigFileError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
