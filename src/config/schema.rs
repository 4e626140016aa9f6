//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the optional
//! `.garage-verify.yml` file. Every field has a default, so an empty file
//! (or no file at all) describes the stock Royal Enfield project layout.

use crate::error::Result;
use crate::python::PythonVersion;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Application name shown in the report banner
    pub app_name: String,

    /// Interpreter discovery and probe settings
    pub python: PythonSettings,

    /// Python packages that must be importable, by distribution-style name
    pub packages: Vec<String>,

    /// Project files that must exist, relative to the project root
    pub files: Vec<PathBuf>,

    /// Database connection settings
    pub database: DatabaseSettings,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            app_name: "Royal Enfield Service Management System".to_string(),
            python: PythonSettings::default(),
            packages: default_packages(),
            files: default_files(),
            database: DatabaseSettings::default(),
        }
    }
}

/// Interpreter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PythonSettings {
    /// Interpreter names or paths, tried in order
    pub candidates: Vec<String>,

    /// Lowest acceptable interpreter version, e.g. "3.8"
    pub min_version: String,

    /// Per-probe timeout in seconds
    pub timeout_secs: u64,
}

impl Default for PythonSettings {
    fn default() -> Self {
        Self {
            candidates: vec!["python3".to_string(), "python".to_string()],
            min_version: "3.8".to_string(),
            timeout_secs: 10,
        }
    }
}

impl PythonSettings {
    /// Parse the configured minimum version.
    pub fn minimum(&self) -> Result<PythonVersion> {
        self.min_version.parse()
    }

    /// Probe timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// MySQL connection settings used by the database check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Database (schema) name
    pub name: String,

    /// Driver-level connect timeout in seconds
    pub connect_timeout_secs: u64,

    /// Also attempt a connection when only the fallback driver is installed.
    ///
    /// When false, an importable fallback driver is enough to pass.
    pub verify_fallback_connection: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            name: "garage41".to_string(),
            connect_timeout_secs: 5,
            verify_fallback_connection: true,
        }
    }
}

fn default_packages() -> Vec<String> {
    ["django", "rest_framework", "corsheaders", "rest_framework_simplejwt"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_files() -> Vec<PathBuf> {
    [
        "manage.py",
        "requirements.txt",
        "garage41/settings.py",
        "garage41/urls.py",
        "garage_app/models.py",
        "garage_app/views.py",
        "garage_app/urls.py",
        "jsfile.js",
        "BikeShowroom.html",
        "homepage.html",
        "booking.html",
        "user_login.html",
        "registration.html",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}
