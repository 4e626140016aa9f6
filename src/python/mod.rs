//! Python interpreter probing.
//!
//! The verified application is a Django project, so every package and
//! database question is answered by the project's own interpreter:
//!
//! - [`locate`] - Finding the interpreter on PATH
//! - [`process`] - Running probes with a deadline
//! - [`version`] - Parsing and comparing interpreter versions
//! - [`system`] - [`SystemInterpreter`], the subprocess-backed [`Interpreter`]
//! - [`mock`] - [`MockInterpreter`] for tests
//!
//! # Example
//!
//! ```
//! use garage_verify::python::{Interpreter, MockInterpreter, PythonVersion};
//!
//! let python = MockInterpreter::new(PythonVersion::new(3, 11, 4)).with_module("django");
//! assert!(python.can_import("django").unwrap());
//! assert!(!python.can_import("corsheaders").unwrap());
//! ```

pub mod locate;
pub mod mock;
pub mod process;
pub mod system;
pub mod version;

pub use locate::{locate_interpreter, parse_system_path, resolve_tool_path};
pub use mock::MockInterpreter;
pub use system::{SystemInterpreter, UnavailableInterpreter};
pub use version::{version_satisfies, PythonVersion};

use crate::config::DatabaseSettings;
use crate::error::Result;
use regex::Regex;
use std::sync::LazyLock;

static MODULE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap()
});

/// Operations the checks need from a Python interpreter.
pub trait Interpreter {
    /// Human-readable identity, usually the resolved path.
    fn describe(&self) -> String;

    /// The interpreter's `major.minor.patch` version.
    fn version(&self) -> Result<PythonVersion>;

    /// Whether `import <module>` succeeds.
    ///
    /// `Ok(false)` means the import raised; `Err` means the interpreter
    /// could not be asked at all.
    fn can_import(&self, module: &str) -> Result<bool>;

    /// Open and close a connection through `driver`.
    ///
    /// Driver errors surface as `VerifyError::ConnectionFailed` carrying
    /// the driver's own message.
    fn connect(&self, driver: MysqlDriver, database: &DatabaseSettings) -> Result<()>;
}

/// MySQL client libraries Django can use, in preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MysqlDriver {
    /// `mysql.connector` from the mysql-connector-python distribution.
    Connector,
    /// `MySQLdb` from the mysqlclient distribution.
    MySqlDb,
}

impl MysqlDriver {
    /// Module imported to detect the driver.
    pub fn module(self) -> &'static str {
        match self {
            Self::Connector => "mysql.connector",
            Self::MySqlDb => "MySQLdb",
        }
    }

    /// Python snippet that connects using `GARAGE_DB_*` environment variables.
    ///
    /// Settings travel through the environment so that no configured value is
    /// ever spliced into source code.
    pub fn connect_script(self) -> &'static str {
        match self {
            Self::Connector => {
                "import os, sys\n\
                 try:\n    \
                     import mysql.connector\n    \
                     conn = mysql.connector.connect(host=os.environ['GARAGE_DB_HOST'], port=int(os.environ['GARAGE_DB_PORT']), user=os.environ['GARAGE_DB_USER'], password=os.environ['GARAGE_DB_PASSWORD'], database=os.environ['GARAGE_DB_NAME'], connection_timeout=int(os.environ['GARAGE_DB_TIMEOUT']))\n    \
                     conn.close()\n\
                 except Exception as e:\n    \
                     sys.stderr.write(str(e))\n    \
                     sys.exit(1)\n"
            }
            Self::MySqlDb => {
                "import os, sys\n\
                 try:\n    \
                     import MySQLdb\n    \
                     conn = MySQLdb.connect(host=os.environ['GARAGE_DB_HOST'], port=int(os.environ['GARAGE_DB_PORT']), user=os.environ['GARAGE_DB_USER'], passwd=os.environ['GARAGE_DB_PASSWORD'], db=os.environ['GARAGE_DB_NAME'], connect_timeout=int(os.environ['GARAGE_DB_TIMEOUT']))\n    \
                     conn.close()\n\
                 except Exception as e:\n    \
                     sys.stderr.write(str(e))\n    \
                     sys.exit(1)\n"
            }
        }
    }
}

/// Environment passed to a driver connect script.
pub fn connection_env(database: &DatabaseSettings) -> Vec<(&'static str, String)> {
    vec![
        ("GARAGE_DB_HOST", database.host.clone()),
        ("GARAGE_DB_PORT", database.port.to_string()),
        ("GARAGE_DB_USER", database.user.clone()),
        ("GARAGE_DB_PASSWORD", database.password.clone()),
        ("GARAGE_DB_NAME", database.name.clone()),
        ("GARAGE_DB_TIMEOUT", database.connect_timeout_secs.to_string()),
    ]
}

/// Module name Python imports for a package name (`-` becomes `_`).
pub fn import_name(package: &str) -> String {
    package.trim().replace('-', "_")
}

/// Whether `name` is a dotted Python identifier such as `rest_framework.views`.
pub fn is_valid_module_name(name: &str) -> bool {
    MODULE_NAME.is_match(name)
}
