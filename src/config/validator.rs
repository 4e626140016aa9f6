//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - The minimum Python version must parse
//! - Package names must be importable module paths
//! - File entries and database identifiers must be non-empty
//! - Ports and timeouts must be non-zero
//! - The driver's connect timeout must expire before the probe deadline

use crate::config::schema::VerifyConfig;
use crate::error::{Result, VerifyError};
use crate::python::{import_name, is_valid_module_name};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &VerifyConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_python(config));
    errors.extend(validate_packages(config));
    errors.extend(validate_files(config));
    errors.extend(validate_database(config));
    errors.extend(validate_timeouts(config));

    errors
}

/// Validate a configuration, failing with every message joined together.
pub fn validate(config: &VerifyConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| format!("[{}] {}", e.rule, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(VerifyError::ConfigValidationError { message })
}

fn validate_python(config: &VerifyConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let python = &config.python;

    if python.minimum().is_err() {
        errors.push(ValidationError::new(
            "invalid-min-version",
            format!(
                "python.min_version '{}' is not a version like 3.8",
                python.min_version
            ),
        ));
    }

    if python.candidates.iter().all(|c| c.trim().is_empty()) {
        errors.push(ValidationError::new(
            "no-interpreter",
            "python.candidates must name at least one interpreter",
        ));
    }

    if python.timeout_secs == 0 {
        errors.push(ValidationError::new(
            "zero-timeout",
            "python.timeout_secs must be greater than zero",
        ));
    }

    errors
}

fn validate_packages(config: &VerifyConfig) -> Vec<ValidationError> {
    config
        .packages
        .iter()
        .filter(|p| !is_valid_module_name(&import_name(p)))
        .map(|p| {
            ValidationError::new(
                "invalid-package",
                format!("package '{}' is not an importable module name", p),
            )
        })
        .collect()
}

fn validate_files(config: &VerifyConfig) -> Vec<ValidationError> {
    if config.files.iter().any(|f| f.as_os_str().is_empty()) {
        vec![ValidationError::new(
            "empty-file",
            "files must not contain empty paths",
        )]
    } else {
        Vec::new()
    }
}

fn validate_database(config: &VerifyConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let db = &config.database;

    if db.host.trim().is_empty() {
        errors.push(ValidationError::new("empty-host", "database.host is empty"));
    }
    if db.user.trim().is_empty() {
        errors.push(ValidationError::new("empty-user", "database.user is empty"));
    }
    if db.name.trim().is_empty() {
        errors.push(ValidationError::new("empty-name", "database.name is empty"));
    }
    if db.port == 0 {
        errors.push(ValidationError::new("zero-port", "database.port must be non-zero"));
    }
    if db.connect_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "zero-timeout",
            "database.connect_timeout_secs must be greater than zero",
        ));
    }

    errors
}

fn validate_timeouts(config: &VerifyConfig) -> Vec<ValidationError> {
    let connect = config.database.connect_timeout_secs;
    let probe = config.python.timeout_secs;
    if connect == 0 || probe == 0 || connect < probe {
        return Vec::new();
    }

    // Otherwise the probe is killed before the driver can report its own error.
    vec![ValidationError::new(
        "connect-timeout-exceeds-probe",
        format!(
            "database.connect_timeout_secs ({}) must be less than python.timeout_secs ({})",
            connect, probe
        ),
    )]
}
