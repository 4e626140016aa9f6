//! garage-verify - installation verification for the Royal Enfield Service
//! Management System.
//!
//! The tool answers one question before a developer starts the Django
//! backend: is this machine ready? It checks the Python interpreter version,
//! the required Python packages, the project files, and the MySQL database,
//! then prints a pass/fail summary with next steps or common fixes.
//!
//! # Modules
//!
//! - [`checks`] - The four check routines
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`python`] - Interpreter discovery and probing
//! - [`report`] - JSON report output
//! - [`runner`] - Run orchestration and summary
//! - [`ui`] - Console output, icons, theme and hints
//!
//! # Example
//!
//! ```
//! use garage_verify::config::VerifyConfig;
//! use garage_verify::python::{MockInterpreter, MysqlDriver, PythonVersion};
//! use garage_verify::runner::verify;
//! use garage_verify::ui::Console;
//!
//! let python = MockInterpreter::new(PythonVersion::new(3, 11, 4))
//!     .with_module("django")
//!     .with_connection(MysqlDriver::Connector);
//! let mut console = Console::plain(Vec::new());
//! let report = verify(&mut console, &VerifyConfig::default(), &python, std::path::Path::new("."));
//!
//! assert_eq!(report.checks.len(), 4);
//! assert!(report.checks[0].passed);
//! assert!(!report.all_passed());
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod python;
pub mod report;
pub mod runner;
pub mod ui;

pub use error::{Result, VerifyError};
