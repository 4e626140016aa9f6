//! Project file check.

use crate::ui::{icons, Console, StatusKind};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Pass only if every listed path exists under `project_root`.
///
/// Absolute entries are checked as given. Every path is checked even after
/// a miss.
pub fn check_django_files<W: Write>(
    console: &mut Console<W>,
    project_root: &Path,
    files: &[PathBuf],
) -> bool {
    console.section(icons::FILES, "Checking project files:");

    let mut all_exist = true;
    for file in files {
        let display = file.display().to_string();
        if project_root.join(file).exists() {
            console.item(StatusKind::Success, &display);
        } else {
            tracing::debug!("Missing {}", project_root.join(file).display());
            console.item(StatusKind::Failed, &format!("{} - NOT FOUND", display));
            all_exist = false;
        }
    }

    all_exist
}
