//! Machine-readable run report.

use crate::checks::CheckResult;
use crate::error::Result;
use crate::runner::Report;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// JSON shape printed by `--format json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub application: &'a str,
    pub project_root: String,
    pub checked_at: DateTime<Utc>,
    pub all_passed: bool,
    pub failed: Vec<&'a str>,
    pub checks: &'a [CheckResult],
}

impl<'a> JsonReport<'a> {
    pub fn new(report: &'a Report, project_root: &Path) -> Self {
        Self {
            application: &report.application,
            project_root: project_root.display().to_string(),
            checked_at: Utc::now(),
            all_passed: report.all_passed(),
            failed: report.failed(),
            checks: &report.checks,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize JSON report")?;
        Ok(json)
    }
}
