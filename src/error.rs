//! Error types for verification runs.
//!
//! This module defines [`VerifyError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! Check routines never return these errors to the caller: a failed probe is
//! folded into a failed check. Errors only escape for problems that make the
//! run itself impossible, such as an unreadable configuration file.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for verification operations.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// None of the interpreter candidates could be located.
    #[error("Python interpreter not found (tried: {tried})")]
    InterpreterNotFound { tried: String },

    /// An interpreter probe could not be run or produced unusable output.
    #[error("Probe `{command}` failed: {message}")]
    ProbeFailed { command: String, message: String },

    /// An interpreter probe ran past its deadline and was killed.
    #[error("Probe `{command}` timed out after {seconds}s")]
    ProbeTimedOut { command: String, seconds: u64 },

    /// The database driver reported an error while connecting.
    #[error("{message}")]
    ConnectionFailed { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for verification operations.
pub type Result<T> = std::result::Result<T, VerifyError>;
