//! Verification run orchestration.
//!
//! [`verify`] prints the banner, runs every check in fixed order regardless
//! of earlier failures, then prints the summary and one closing hint block.

use crate::checks::{
    check_database, check_django_files, check_packages, check_python_version, CheckKind,
    CheckResult,
};
use crate::config::VerifyConfig;
use crate::python::Interpreter;
use crate::ui::{hints, icons, Console, StatusKind};
use std::io::Write;
use std::path::Path;

/// Results of one run, in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub application: String,
    pub checks: Vec<CheckResult>,
}

impl Report {
    /// Whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Names of the checks that failed.
    pub fn failed(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.name.as_str())
            .collect()
    }
}

/// Run the banner and the four checks, without the summary.
pub fn run_checks<W: Write>(
    console: &mut Console<W>,
    config: &VerifyConfig,
    python: &dyn Interpreter,
    project_root: &Path,
) -> Report {
    console.rule();
    console.heading(&config.app_name);
    console.line("Installation Verification");
    console.rule();

    let mut checks = Vec::with_capacity(CheckKind::ALL.len());
    for kind in CheckKind::ALL {
        let passed = match kind {
            CheckKind::PythonVersion => check_python_version(console, python, &config.python),
            CheckKind::Packages => check_packages(console, python, &config.packages),
            CheckKind::ProjectFiles => check_django_files(console, project_root, &config.files),
            CheckKind::Database => check_database(console, python, &config.database),
        };
        tracing::debug!("{}: {}", kind.title(), if passed { "pass" } else { "fail" });
        checks.push(CheckResult::new(kind, passed));
    }

    Report {
        application: config.app_name.clone(),
        checks,
    }
}

/// Print the summary table and the matching hint block.
pub fn print_summary<W: Write>(console: &mut Console<W>, report: &Report, database: &str) {
    console.blank();
    console.rule();
    console.heading("Summary:");
    console.rule();

    for check in &report.checks {
        let verdict = StatusKind::verdict(check.passed);
        let styled = if check.passed {
            console.theme().success.apply_to(verdict).to_string()
        } else {
            console.theme().error.apply_to(verdict).to_string()
        };
        console.line(&format!("{}: {}", check.name, styled));
    }

    console.rule();

    if report.all_passed() {
        console.blank();
        console.line(&format!(
            "{} All checks passed! You're ready to run the application.",
            icons::CELEBRATE
        ));
        console.blank();
        console.line("Next steps:");
        for step in hints::next_steps() {
            console.hint(step);
        }
    } else {
        console.blank();
        console.status(
            StatusKind::Warning,
            "Some checks failed. Please fix the issues above before running.",
        );
        console.blank();
        console.line("Common fixes:");
        for fix in hints::common_fixes(database) {
            console.hint(&fix);
        }
    }

    console.flush();
}

/// Run every check and print the full report.
pub fn verify<W: Write>(
    console: &mut Console<W>,
    config: &VerifyConfig,
    python: &dyn Interpreter,
    project_root: &Path,
) -> Report {
    let report = run_checks(console, config, python, project_root);
    print_summary(console, &report, &config.database.name);
    report
}
