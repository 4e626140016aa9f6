//! Line-oriented report writer.

use super::icons::{gap, StatusKind};
use super::theme::VerifyTheme;
use std::io::{self, Write};

/// Width of the `=` rules framing the banner and summary.
pub const RULE_WIDTH: usize = 60;

/// Writes report lines to any `Write` sink.
///
/// Write errors are ignored: a closed stdout must not stop the remaining
/// checks from running.
pub struct Console<W: Write> {
    out: W,
    theme: VerifyTheme,
}

impl Console<io::Stdout> {
    /// Console on stdout, colored when stdout is a terminal.
    pub fn stdout(colors: bool) -> Self {
        Self::new(io::stdout(), VerifyTheme::for_colors(colors))
    }
}

impl Console<io::Sink> {
    /// Console that discards everything.
    pub fn sink() -> Self {
        Self::plain(io::sink())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, theme: VerifyTheme) -> Self {
        Self { out, theme }
    }

    /// Console without styling.
    pub fn plain(out: W) -> Self {
        Self::new(out, VerifyTheme::plain())
    }

    pub fn theme(&self) -> &VerifyTheme {
        &self.theme
    }

    /// Write one line as-is.
    pub fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }

    /// Write an empty line.
    pub fn blank(&mut self) {
        self.line("");
    }

    /// Write a `=` rule.
    pub fn rule(&mut self) {
        let rule = self.theme.border.apply_to("=".repeat(RULE_WIDTH)).to_string();
        self.line(&rule);
    }

    /// Write a bold line.
    pub fn heading(&mut self, text: &str) {
        let styled = self.theme.header.apply_to(text).to_string();
        self.line(&styled);
    }

    /// Write a top-level status line.
    pub fn status(&mut self, kind: StatusKind, msg: &str) {
        let styled = kind.format(&self.theme, msg);
        self.line(&styled);
    }

    /// Write a status line indented under a section.
    pub fn item(&mut self, kind: StatusKind, msg: &str) {
        let styled = kind.format(&self.theme, msg);
        self.line(&format!("  {}", styled));
    }

    /// Write an indented follow-up line under an item.
    pub fn detail(&mut self, msg: &str) {
        let styled = self.theme.dim.apply_to(msg).to_string();
        self.line(&format!("     {}", styled));
    }

    /// Start a section: blank line, then `icon title`.
    pub fn section(&mut self, icon: &str, title: &str) {
        self.blank();
        let styled = self.theme.highlight.apply_to(title).to_string();
        self.line(&format!("{}{}{}", icon, gap(icon), styled));
    }

    /// Write an indented hint line.
    pub fn hint(&mut self, text: &str) {
        self.line(&format!("  {}", text));
    }

    pub fn flush(&mut self) {
        let _ = self.out.flush();
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
