//! Configuration file discovery and loading.
//!
//! An explicit `--config` path wins. Otherwise `.garage-verify.yml` in the
//! project root is used when present, and the built-in defaults apply when
//! it is not.

use crate::config::schema::VerifyConfig;
use crate::config::validator::validate;
use crate::error::{Result, VerifyError};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".garage-verify.yml";

/// Find the project config at `<project_root>/.garage-verify.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into `VerifyConfig`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<VerifyConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VerifyError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VerifyError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into `VerifyConfig`.
///
/// An empty document is treated as "all defaults".
pub fn parse_config(content: &str, source_path: &Path) -> Result<VerifyConfig> {
    if content.trim().is_empty() {
        return Ok(VerifyConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| VerifyError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and validate the configuration for a run.
///
/// If `config_override` is provided, that file must exist. Otherwise the
/// project config is used when present, falling back to defaults.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<VerifyConfig> {
    let config = match config_override {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)?
        }
        None => match find_project_config(project_root) {
            Some(path) => {
                tracing::debug!("Loading project config from {}", path.display());
                load_config_file(&path)?
            }
            None => {
                tracing::debug!("No config file found, using defaults");
                VerifyConfig::default()
            }
        },
    };

    validate(&config)?;
    Ok(config)
}
