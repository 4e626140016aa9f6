//! Interpreter discovery on PATH.
//!
//! Candidates are resolved by walking PATH entries directly instead of
//! calling `which`, whose behavior varies across systems and is sometimes
//! a shell builtin.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        for name in executable_names(tool) {
            let candidate = dir.join(&name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(windows)]
fn executable_names(tool: &str) -> Vec<String> {
    if tool.to_ascii_lowercase().ends_with(".exe") {
        vec![tool.to_string()]
    } else {
        vec![format!("{}.exe", tool), tool.to_string()]
    }
}

#[cfg(not(windows))]
fn executable_names(tool: &str) -> Vec<String> {
    vec![tool.to_string()]
}

/// Resolve the first usable interpreter among `candidates`.
///
/// A candidate containing a path separator is taken as a path (relative
/// to the current directory) and used if it is an existing file. Bare
/// names are searched for in `path_entries`.
pub fn locate_interpreter(candidates: &[String], path_entries: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .find_map(|candidate| {
            if candidate.contains('/') || candidate.contains(std::path::MAIN_SEPARATOR) {
                let path = PathBuf::from(candidate);
                path.is_file().then_some(path)
            } else {
                resolve_tool_path(candidate, path_entries)
            }
        })
}
