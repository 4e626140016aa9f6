//! The four environment checks.
//!
//! Each check prints its own progress lines and returns a single boolean.
//! Failures never propagate: a probe error is reported and counted as a
//! failed item, and the check carries on with its remaining items.
//!
//! - [`python_version`] - interpreter is new enough
//! - [`packages`] - required packages import
//! - [`files`] - required project files exist
//! - [`database`] - a MySQL driver is installed and can connect

pub mod database;
pub mod files;
pub mod packages;
pub mod python_version;

pub use database::check_database;
pub use files::check_django_files;
pub use packages::check_packages;
pub use python_version::check_python_version;

use serde::Serialize;

/// Identity of a check, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    PythonVersion,
    Packages,
    ProjectFiles,
    Database,
}

impl CheckKind {
    /// All checks in the order they run.
    pub const ALL: [CheckKind; 4] = [
        CheckKind::PythonVersion,
        CheckKind::Packages,
        CheckKind::ProjectFiles,
        CheckKind::Database,
    ];

    /// Name shown in the summary.
    pub fn title(self) -> &'static str {
        match self {
            Self::PythonVersion => "Python Version",
            Self::Packages => "Required Packages",
            Self::ProjectFiles => "Project Files",
            Self::Database => "Database",
        }
    }
}

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
}

impl CheckResult {
    pub fn new(kind: CheckKind, passed: bool) -> Self {
        Self {
            name: kind.title().to_string(),
            passed,
        }
    }
}
