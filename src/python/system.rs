//! Subprocess-backed interpreter.

use super::locate::{locate_interpreter, parse_system_path};
use super::process::{run_with_timeout, ProcessOutput};
use super::{connection_env, Interpreter, MysqlDriver, PythonVersion};
use crate::config::{DatabaseSettings, PythonSettings};
use crate::error::{Result, VerifyError};
use std::path::PathBuf;
use std::time::Duration;

const VERSION_SCRIPT: &str = "import sys; print('.'.join(map(str, sys.version_info[:3])))";

/// A Python interpreter on this machine, driven through `-c` probes.
#[derive(Debug, Clone)]
pub struct SystemInterpreter {
    path: PathBuf,
    timeout: Duration,
}

impl SystemInterpreter {
    pub fn new(path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            path: path.into(),
            timeout,
        }
    }

    /// Locate the first configured candidate on the current PATH.
    pub fn discover(settings: &PythonSettings) -> Result<Self> {
        Self::discover_in(settings, &parse_system_path())
    }

    /// Locate the first configured candidate in `path_entries`.
    pub fn discover_in(settings: &PythonSettings, path_entries: &[PathBuf]) -> Result<Self> {
        match locate_interpreter(&settings.candidates, path_entries) {
            Some(path) => {
                tracing::debug!("Using interpreter {}", path.display());
                Ok(Self::new(path, settings.timeout()))
            }
            None => Err(VerifyError::InterpreterNotFound {
                tried: settings.candidates.join(", "),
            }),
        }
    }

    fn run_script(&self, label: &str, script: &str, env: &[(&str, String)]) -> Result<ProcessOutput> {
        run_with_timeout(
            &format!("{} -c {}", self.path.display(), label),
            &self.path,
            &["-c", script],
            env,
            self.timeout,
        )
    }
}

impl Interpreter for SystemInterpreter {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn version(&self) -> Result<PythonVersion> {
        let output = self.run_script("<version>", VERSION_SCRIPT, &[])?;
        let text = format!("{}{}", output.stdout, output.stderr);
        if !output.success {
            return Err(VerifyError::ProbeFailed {
                command: format!("{} -c <version>", self.describe()),
                message: first_line(&text).unwrap_or("no output").to_string(),
            });
        }
        PythonVersion::extract(&text).ok_or_else(|| VerifyError::ProbeFailed {
            command: format!("{} -c <version>", self.describe()),
            message: format!("unrecognized version output: {}", text.trim()),
        })
    }

    fn can_import(&self, module: &str) -> Result<bool> {
        let script = format!("import {}", module);
        let output = self.run_script(&format!("'{}'", script), &script, &[])?;
        Ok(output.success)
    }

    fn connect(&self, driver: MysqlDriver, database: &DatabaseSettings) -> Result<()> {
        let env = connection_env(database);
        let label = format!("<connect via {}>", driver.module());
        let output = self.run_script(&label, driver.connect_script(), &env)?;
        if output.success {
            return Ok(());
        }

        let message = [output.stderr.trim(), output.stdout.trim()]
            .into_iter()
            .find(|text| !text.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("driver exited with code {:?}", output.exit_code));
        Err(VerifyError::ConnectionFailed { message })
    }
}

/// Stand-in used when no interpreter could be located.
///
/// Every probe fails with the discovery error, so each check reports the
/// missing interpreter in its own terms.
#[derive(Debug, Clone)]
pub struct UnavailableInterpreter {
    tried: String,
}

impl UnavailableInterpreter {
    pub fn new(settings: &PythonSettings) -> Self {
        Self {
            tried: settings.candidates.join(", "),
        }
    }

    fn error(&self) -> VerifyError {
        VerifyError::InterpreterNotFound {
            tried: self.tried.clone(),
        }
    }
}

impl Interpreter for UnavailableInterpreter {
    fn describe(&self) -> String {
        format!("<none: tried {}>", self.tried)
    }

    fn version(&self) -> Result<PythonVersion> {
        Err(self.error())
    }

    fn can_import(&self, _module: &str) -> Result<bool> {
        Err(self.error())
    }

    fn connect(&self, _driver: MysqlDriver, _database: &DatabaseSettings) -> Result<()> {
        Err(self.error())
    }
}

fn first_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|l| !l.is_empty())
}
