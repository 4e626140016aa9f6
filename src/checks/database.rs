//! Database driver and connectivity check.

use crate::config::DatabaseSettings;
use crate::python::{Interpreter, MysqlDriver};
use crate::ui::{icons, Console, StatusKind};
use std::io::Write;

/// Pass if a MySQL driver is installed and the configured database accepts
/// a connection through it.
///
/// `mysql.connector` is preferred. When only `MySQLdb` is installed, the
/// connection is attempted through it unless
/// `verify_fallback_connection` is off, in which case being importable is
/// enough.
pub fn check_database<W: Write>(
    console: &mut Console<W>,
    python: &dyn Interpreter,
    database: &DatabaseSettings,
) -> bool {
    console.section(icons::DATABASE, "Checking database configuration:");

    if driver_installed(python, MysqlDriver::Connector) {
        console.item(StatusKind::Success, "MySQL connector available");
        return try_connect(console, python, MysqlDriver::Connector, database);
    }

    console.item(
        StatusKind::Info,
        "MySQL connector not found (will use mysqlclient)",
    );

    if driver_installed(python, MysqlDriver::MySqlDb) {
        console.item(StatusKind::Success, "MySQLdb available");
        if database.verify_fallback_connection {
            return try_connect(console, python, MysqlDriver::MySqlDb, database);
        }
        return true;
    }

    console.item(
        StatusKind::Failed,
        "Neither mysql-connector nor MySQLdb found",
    );
    false
}

fn driver_installed(python: &dyn Interpreter, driver: MysqlDriver) -> bool {
    python.can_import(driver.module()).unwrap_or_else(|e| {
        tracing::warn!("Import probe for {} failed: {}", driver.module(), e);
        false
    })
}

fn try_connect<W: Write>(
    console: &mut Console<W>,
    python: &dyn Interpreter,
    driver: MysqlDriver,
    database: &DatabaseSettings,
) -> bool {
    tracing::debug!(
        "Connecting to {}@{}:{}/{} via {}",
        database.user,
        database.host,
        database.port,
        database.name,
        driver.module()
    );

    match python.connect(driver, database) {
        Ok(()) => {
            console.item(
                StatusKind::Success,
                &format!("Can connect to {} database", database.name),
            );
            true
        }
        Err(e) => {
            console.item(
                StatusKind::Warning,
                &format!("Cannot connect to database: {}", e),
            );
            console.detail(&format!(
                "Make sure MySQL is running and {} database exists",
                database.name
            ));
            false
        }
    }
}
