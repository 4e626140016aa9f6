//! Python version parsing and comparison.

use crate::error::{Result, VerifyError};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static VERSION_IN_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

static VERSION_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?$").unwrap());

/// A `major.minor.patch` interpreter version.
///
/// Ordering is lexicographic over the three components, so
/// `3.10.0 > 3.9.18`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PythonVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Extract the first version number found in interpreter output.
    ///
    /// Accepts both the bare `3.11.4` printed by the version probe and
    /// `Python 3.11.4` as printed by `python --version`.
    pub fn extract(text: &str) -> Option<Self> {
        VERSION_IN_TEXT.captures(text).and_then(|c| from_captures(&c))
    }
}

fn from_captures(caps: &regex::Captures<'_>) -> Option<PythonVersion> {
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    let patch = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    Some(PythonVersion::new(major, minor, patch))
}

impl FromStr for PythonVersion {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self> {
        VERSION_EXACT
            .captures(s.trim())
            .and_then(|c| from_captures(&c))
            .ok_or_else(|| VerifyError::ConfigValidationError {
                message: format!("'{}' is not a version like 3.8 or 3.8.10", s),
            })
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Whether `found` is at least `minimum`.
pub fn version_satisfies(found: PythonVersion, minimum: PythonVersion) -> bool {
    found >= minimum
}
