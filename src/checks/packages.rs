//! Required package check.

use crate::python::{import_name, Interpreter};
use crate::ui::{icons, Console, StatusKind};
use std::io::Write;

/// Pass only if every package imports. Every package is probed even after
/// a failure.
pub fn check_packages<W: Write>(
    console: &mut Console<W>,
    python: &dyn Interpreter,
    packages: &[String],
) -> bool {
    console.section(icons::PACKAGES, "Checking installed packages:");

    let mut all_installed = true;
    for package in packages {
        let module = import_name(package);
        let installed = match python.can_import(&module) {
            Ok(installed) => installed,
            Err(e) => {
                tracing::warn!("Import probe for {} failed: {}", module, e);
                false
            }
        };

        if installed {
            console.item(StatusKind::Success, package);
        } else {
            console.item(StatusKind::Failed, &format!("{} - NOT INSTALLED", package));
            all_installed = false;
        }
    }

    all_installed
}
