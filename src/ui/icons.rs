//! Status vocabulary for report lines.
//!
//! `StatusKind` is the single set of emoji markers and colors used for
//! every line the checks print.

use super::theme::VerifyTheme;

/// Section marker for the package check.
pub const PACKAGES: &str = "📦";
/// Section marker for the project file check.
pub const FILES: &str = "📁";
/// Section marker for the database check.
pub const DATABASE: &str = "🗄️";
/// Marker for the all-passed banner.
pub const CELEBRATE: &str = "🎉";

/// Gap to put after `icon`.
///
/// Emoji carrying a variation selector (`⚠️`, `ℹ️`, `🗄️`) render one column
/// short in most terminals, so they get an extra space.
pub fn gap(icon: &str) -> &'static str {
    if icon.ends_with('\u{FE0F}') {
        "  "
    } else {
        " "
    }
}

/// Canonical status kinds used across report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Item passed.
    Success,
    /// Item failed.
    Failed,
    /// Non-fatal problem worth attention.
    Warning,
    /// Informational note.
    Info,
}

impl StatusKind {
    /// Emoji marker.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Failed => "❌",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }

    /// Gap between marker and text.
    pub fn separator(self) -> &'static str {
        gap(self.icon())
    }

    /// Summary label for a pass/fail outcome.
    pub fn verdict(passed: bool) -> &'static str {
        if passed {
            "✅ PASS"
        } else {
            "❌ FAIL"
        }
    }

    /// Marker plus text, unstyled.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{}{}{}", self.icon(), self.separator(), msg)
    }

    /// Marker plus text, styled with the given theme.
    pub fn format(self, theme: &VerifyTheme, msg: &str) -> String {
        let line = self.format_plain(msg);
        match self {
            Self::Success => theme.success.apply_to(line).to_string(),
            Self::Failed => theme.error.apply_to(line).to_string(),
            Self::Warning => theme.warning.apply_to(line).to_string(),
            Self::Info => theme.info.apply_to(line).to_string(),
        }
    }
}
