//! Interpreter version check.

use crate::config::PythonSettings;
use crate::python::{version_satisfies, Interpreter};
use crate::ui::{Console, StatusKind};
use std::io::Write;

/// Pass iff the interpreter reports a version at or above the minimum.
///
/// Prints the detected version either way.
pub fn check_python_version<W: Write>(
    console: &mut Console<W>,
    python: &dyn Interpreter,
    settings: &PythonSettings,
) -> bool {
    let minimum = match settings.minimum() {
        Ok(v) => v,
        Err(e) => {
            console.status(StatusKind::Failed, &e.to_string());
            return false;
        }
    };

    match python.version() {
        Ok(found) if version_satisfies(found, minimum) => {
            console.status(StatusKind::Success, &format!("Python version: {}", found));
            true
        }
        Ok(found) => {
            console.status(
                StatusKind::Failed,
                &format!(
                    "Python version too old. Required: {}+, Found: {}",
                    settings.min_version, found
                ),
            );
            false
        }
        Err(e) => {
            tracing::warn!("Version probe failed for {}: {}", python.describe(), e);
            console.status(
                StatusKind::Failed,
                &format!("Cannot determine Python version: {}", e),
            );
            false
        }
    }
}
