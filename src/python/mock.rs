//! In-memory interpreter for tests.

use super::{Interpreter, MysqlDriver, PythonVersion};
use crate::config::DatabaseSettings;
use crate::error::{Result, VerifyError};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Scripted [`Interpreter`] that records what it was asked.
#[derive(Debug, Default)]
pub struct MockInterpreter {
    version: Option<PythonVersion>,
    modules: HashSet<String>,
    connections: HashMap<MysqlDriver, std::result::Result<(), String>>,
    imports: RefCell<Vec<String>>,
    connects: RefCell<Vec<(MysqlDriver, String)>>,
}

impl MockInterpreter {
    /// An interpreter reporting `version` with no importable modules.
    pub fn new(version: PythonVersion) -> Self {
        Self {
            version: Some(version),
            ..Default::default()
        }
    }

    /// An interpreter whose version probe fails.
    pub fn without_version() -> Self {
        Self::default()
    }

    /// Make `module` importable.
    pub fn with_module(mut self, module: &str) -> Self {
        self.modules.insert(module.to_string());
        self
    }

    /// Make `driver` importable and connect successfully.
    pub fn with_connection(mut self, driver: MysqlDriver) -> Self {
        self.modules.insert(driver.module().to_string());
        self.connections.insert(driver, Ok(()));
        self
    }

    /// Make `driver` importable but fail to connect with `message`.
    pub fn with_connection_error(mut self, driver: MysqlDriver, message: &str) -> Self {
        self.modules.insert(driver.module().to_string());
        self.connections.insert(driver, Err(message.to_string()));
        self
    }

    /// Modules that were probed, in order.
    pub fn imports(&self) -> Vec<String> {
        self.imports.borrow().clone()
    }

    /// Connection attempts as `(driver, database name)`, in order.
    pub fn connects(&self) -> Vec<(MysqlDriver, String)> {
        self.connects.borrow().clone()
    }
}

impl Interpreter for MockInterpreter {
    fn describe(&self) -> String {
        "mock-python".to_string()
    }

    fn version(&self) -> Result<PythonVersion> {
        self.version.ok_or_else(|| VerifyError::ProbeFailed {
            command: "mock-python -c <version>".to_string(),
            message: "no version scripted".to_string(),
        })
    }

    fn can_import(&self, module: &str) -> Result<bool> {
        self.imports.borrow_mut().push(module.to_string());
        Ok(self.modules.contains(module))
    }

    fn connect(&self, driver: MysqlDriver, database: &DatabaseSettings) -> Result<()> {
        self.connects
            .borrow_mut()
            .push((driver, database.name.clone()));
        match self.connections.get(&driver) {
            Some(Ok(())) => Ok(()),
            Some(Err(message)) => Err(VerifyError::ConnectionFailed {
                message: message.clone(),
            }),
            None => Err(VerifyError::ConnectionFailed {
                message: format!("No module named '{}'", driver.module()),
            }),
        }
    }
}
