//! Command execution.

use super::args::{Cli, OutputFormat};
use crate::config::{load_config, VerifyConfig};
use crate::error::Result;
use crate::python::{Interpreter, SystemInterpreter, UnavailableInterpreter};
use crate::report::JsonReport;
use crate::runner::{verify, Report};
use crate::ui::{should_use_colors, Console};
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Exit status after a completed run.
///
/// Failed checks only change it under `--strict`.
pub fn exit_code(report: &Report, strict: bool) -> u8 {
    if strict && !report.all_passed() {
        1
    } else {
        0
    }
}

/// Resolve the project root: `--project` or the current directory.
pub fn project_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.project {
        Some(path) => Ok(path.clone()),
        None => Ok(std::env::current_dir().context("Failed to determine current directory")?),
    }
}

/// Load configuration and apply command-line overrides.
pub fn resolve_config(cli: &Cli, project_root: &Path) -> Result<VerifyConfig> {
    let mut config = load_config(project_root, cli.config.as_deref())?;
    if let Some(python) = &cli.python {
        config.python.candidates = vec![python.clone()];
    }
    Ok(config)
}

/// Locate the interpreter, substituting a stand-in that fails every probe
/// when none is found.
pub fn interpreter(config: &VerifyConfig) -> Box<dyn Interpreter> {
    match SystemInterpreter::discover(&config.python) {
        Ok(python) => Box::new(python),
        Err(e) => {
            tracing::warn!("{}", e);
            Box::new(UnavailableInterpreter::new(&config.python))
        }
    }
}

/// Run a full verification for the parsed command line.
///
/// Returns the process exit status. Errors only escape when the run cannot
/// start, such as an unreadable config file.
pub fn execute(cli: &Cli) -> Result<u8> {
    let root = project_root(cli)?;
    let config = resolve_config(cli, &root)?;
    let python = interpreter(&config);

    let report = match cli.format {
        OutputFormat::Text => {
            let colors = !cli.no_color && should_use_colors();
            let mut console = Console::stdout(colors);
            verify(&mut console, &config, python.as_ref(), &root)
        }
        OutputFormat::Json => {
            let mut console = Console::sink();
            let report = verify(&mut console, &config, python.as_ref(), &root);
            let json = JsonReport::new(&report, &root).to_json()?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
            report
        }
    };

    Ok(exit_code(&report, cli.strict))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CheckKind, CheckResult};
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn report(passed: bool) -> Report {
        Report {
            application: "Garage".to_string(),
            checks: vec![
                CheckResult::new(CheckKind::PythonVersion, true),
                CheckResult::new(CheckKind::Database, passed),
            ],
        }
    }

    #[test]
    fn failures_exit_zero_by_default() {
        assert_eq!(exit_code(&report(false), false), 0);
        assert_eq!(exit_code(&report(true), false), 0);
    }

    #[test]
    fn strict_failures_exit_one() {
        assert_eq!(exit_code(&report(false), true), 1);
        assert_eq!(exit_code(&report(true), true), 0);
    }

    #[test]
    fn python_flag_replaces_candidates() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from(["garage-verify", "--python", "/opt/py/bin/python3.11"]);
        let config = resolve_config(&cli, temp.path()).unwrap();
        assert_eq!(config.python.candidates, vec!["/opt/py/bin/python3.11"]);
    }

    #[test]
    fn project_flag_sets_root() {
        let cli = Cli::parse_from(["garage-verify", "-p", "/srv/garage"]);
        assert_eq!(project_root(&cli).unwrap(), PathBuf::from("/srv/garage"));
    }

    #[test]
    fn project_config_is_read_from_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".garage-verify.yml"), "app_name: Demo\n").unwrap();
        let cli = Cli::parse_from(["garage-verify"]);
        let config = resolve_config(&cli, temp.path()).unwrap();
        assert_eq!(config.app_name, "Demo");
    }

    #[test]
    fn missing_interpreter_yields_stand_in() {
        let mut config = VerifyConfig::default();
        config.python.candidates = vec!["/nonexistent/garage/python3".to_string()];
        let python = interpreter(&config);
        assert!(python.version().is_err());
    }
}
