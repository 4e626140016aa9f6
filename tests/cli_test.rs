//! End-to-end tests for the `garage-verify` binary.
//!
//! A fake `python3` shell script on an isolated PATH stands in for the
//! project interpreter, so these tests never touch a real Python or MySQL.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]
#![cfg(unix)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

const ALL_MODULES: &[&str] = &[
    "django",
    "rest_framework",
    "corsheaders",
    "rest_framework_simplejwt",
    "mysql.connector",
];

const PROJECT_FILES: &[&str] = &[
    "manage.py",
    "requirements.txt",
    "garage41/settings.py",
    "garage41/urls.py",
    "garage_app/models.py",
    "garage_app/views.py",
    "garage_app/urls.py",
    "jsfile.js",
    "BikeShowroom.html",
    "homepage.html",
    "booking.html",
    "user_login.html",
    "registration.html",
];

const CONNECT_OK: &str = "exit 0";
const CONNECT_REFUSED: &str = r#"echo "2003 (HY000): Can't connect to MySQL server on '$GARAGE_DB_HOST:$GARAGE_DB_PORT' (111)" >&2; exit 1"#;

/// Write an executable `python3` into `bin` that reports `version`, imports
/// only `modules`, and runs `connect` for connection probes.
fn fake_python(bin: &Path, version: &str, modules: &[&str], connect: &str) {
    fs::create_dir_all(bin).unwrap();
    let script = format!(
        r#"#!/bin/sh
case "$2" in
  *version_info*) echo "{version}"; exit 0 ;;
  *"conn.close()"*) {connect} ;;
esac
for m in {modules}; do
  if [ "$2" = "import $m" ]; then exit 0; fi
done
exit 1
"#,
        version = version,
        connect = connect,
        modules = modules.join(" "),
    );
    let path = bin.join("python3");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn scaffold_project(root: &Path) {
    for file in PROJECT_FILES {
        let path = root.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }
}

fn verify_cmd(project: &Path, bin: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("garage-verify"));
    cmd.current_dir(project)
        .env("PATH", bin)
        .env("NO_COLOR", "1")
        .env_remove("GARAGE_VERIFY_CONFIG")
        .env_remove("GARAGE_VERIFY_PYTHON")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn healthy_environment_passes() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let bin = TempDir::new()?;
    scaffold_project(project.path());
    fake_python(bin.path(), "3.11.4", ALL_MODULES, CONNECT_OK);

    verify_cmd(project.path(), bin.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Python version: 3.11.4"))
        .stdout(predicate::str::contains("  ✅ rest_framework_simplejwt"))
        .stdout(predicate::str::contains("  ✅ Can connect to garage41 database"))
        .stdout(predicate::str::contains("Database: ✅ PASS"))
        .stdout(predicate::str::contains(
            "🎉 All checks passed! You're ready to run the application.",
        ))
        .stdout(predicate::str::contains(
            "3. Open Browser: http://127.0.0.1:5500/BikeShowroom.html",
        ));
    Ok(())
}

#[test]
fn missing_interpreter_still_completes_with_zero_exit() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let empty_bin = TempDir::new()?;

    verify_cmd(project.path(), empty_bin.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "Python interpreter not found (tried: python3, python)",
        ))
        .stdout(predicate::str::contains("Python Version: ❌ FAIL"))
        .stdout(predicate::str::contains("Required Packages: ❌ FAIL"))
        .stdout(predicate::str::contains("Project Files: ❌ FAIL"))
        .stdout(predicate::str::contains("Database: ❌ FAIL"))
        .stdout(predicate::str::contains("Neither mysql-connector nor MySQLdb found"))
        .stdout(predicate::str::contains("Common fixes:"));
    Ok(())
}

#[test]
fn old_interpreter_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let bin = TempDir::new()?;
    scaffold_project(project.path());
    fake_python(bin.path(), "3.7.9", ALL_MODULES, CONNECT_OK);

    verify_cmd(project.path(), bin.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "❌ Python version too old. Required: 3.8+, Found: 3.7.9",
        ))
        .stdout(predicate::str::contains("Python Version: ❌ FAIL"))
        .stdout(predicate::str::contains("Required Packages: ✅ PASS"));
    Ok(())
}

#[test]
fn connection_error_text_is_shown() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let bin = TempDir::new()?;
    scaffold_project(project.path());
    fake_python(bin.path(), "3.11.4", ALL_MODULES, CONNECT_REFUSED);

    verify_cmd(project.path(), bin.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "⚠️  Cannot connect to database: 2003 (HY000): Can't connect to MySQL server on 'localhost:3306' (111)",
        ))
        .stdout(predicate::str::contains(
            "Make sure MySQL is running and garage41 database exists",
        ))
        .stdout(predicate::str::contains("Database: ❌ FAIL"));
    Ok(())
}

#[test]
fn missing_file_and_package_are_listed() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let bin = TempDir::new()?;
    scaffold_project(project.path());
    fs::remove_file(project.path().join("garage_app/views.py"))?;
    fake_python(
        bin.path(),
        "3.12.1",
        &["django", "rest_framework", "rest_framework_simplejwt", "mysql.connector"],
        CONNECT_OK,
    );

    verify_cmd(project.path(), bin.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("  ❌ corsheaders - NOT INSTALLED"))
        .stdout(predicate::str::contains("  ✅ rest_framework_simplejwt"))
        .stdout(predicate::str::contains("  ❌ garage_app/views.py - NOT FOUND"))
        .stdout(predicate::str::contains("  ✅ registration.html"));
    Ok(())
}

#[test]
fn fallback_driver_is_used_when_connector_missing() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let bin = TempDir::new()?;
    scaffold_project(project.path());
    fake_python(
        bin.path(),
        "3.11.4",
        &["django", "rest_framework", "corsheaders", "rest_framework_simplejwt", "MySQLdb"],
        CONNECT_OK,
    );

    verify_cmd(project.path(), bin.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ℹ️  MySQL connector not found (will use mysqlclient)",
        ))
        .stdout(predicate::str::contains("  ✅ MySQLdb available"))
        .stdout(predicate::str::contains("Database: ✅ PASS"));
    Ok(())
}

#[test]
fn strict_mode_exits_one_on_failure() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let empty_bin = TempDir::new()?;

    verify_cmd(project.path(), empty_bin.path())
        .arg("--strict")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Summary:"));
    Ok(())
}

#[test]
fn strict_mode_exits_zero_when_healthy() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let bin = TempDir::new()?;
    scaffold_project(project.path());
    fake_python(bin.path(), "3.11.4", ALL_MODULES, CONNECT_OK);

    verify_cmd(project.path(), bin.path())
        .arg("--strict")
        .assert()
        .code(0);
    Ok(())
}

#[test]
fn json_format_prints_single_object() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let bin = TempDir::new()?;
    scaffold_project(project.path());
    fake_python(bin.path(), "3.11.4", ALL_MODULES, CONNECT_REFUSED);

    let output = verify_cmd(project.path(), bin.path())
        .args(["--format", "json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["application"], "Royal Enfield Service Management System");
    assert_eq!(value["all_passed"], false);
    assert_eq!(value["checks"][0]["name"], "Python Version");
    assert_eq!(value["checks"][0]["passed"], true);
    assert_eq!(value["checks"][3]["name"], "Database");
    assert_eq!(value["checks"][3]["passed"], false);
    Ok(())
}

#[test]
fn project_flag_checks_another_directory() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let elsewhere = TempDir::new()?;
    let bin = TempDir::new()?;
    scaffold_project(project.path());
    fake_python(bin.path(), "3.11.4", ALL_MODULES, CONNECT_OK);

    verify_cmd(elsewhere.path(), bin.path())
        .arg("--project")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Project Files: ✅ PASS"));
    Ok(())
}

#[test]
fn python_flag_selects_interpreter() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let venv = TempDir::new()?;
    let empty_bin = TempDir::new()?;
    scaffold_project(project.path());
    fake_python(&venv.path().join("bin"), "3.10.13", ALL_MODULES, CONNECT_OK);

    verify_cmd(project.path(), empty_bin.path())
        .arg("--python")
        .arg(venv.path().join("bin/python3"))
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Python version: 3.10.13"))
        .stdout(predicate::str::contains("All checks passed!"));
    Ok(())
}

#[test]
fn project_config_overrides_database() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let bin = TempDir::new()?;
    scaffold_project(project.path());
    fs::write(
        project.path().join(".garage-verify.yml"),
        "database:\n  host: db.internal\n  port: 3307\n  name: garage_staging\n",
    )?;
    fake_python(bin.path(), "3.11.4", ALL_MODULES, CONNECT_REFUSED);

    verify_cmd(project.path(), bin.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("'db.internal:3307'"))
        .stdout(predicate::str::contains(
            "Make sure MySQL is running and garage_staging database exists",
        ))
        .stdout(predicate::str::contains("CREATE DATABASE garage_staging;"));
    Ok(())
}

#[test]
fn invalid_config_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let bin = TempDir::new()?;
    fs::write(
        project.path().join(".garage-verify.yml"),
        "packages: ['os; import shutil']\n",
    )?;

    verify_cmd(project.path(), bin.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid configuration"));
    Ok(())
}

#[test]
fn missing_explicit_config_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let bin = TempDir::new()?;

    verify_cmd(project.path(), bin.path())
        .args(["--config", "nope.yml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn repeated_runs_print_the_same_report() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let bin = TempDir::new()?;
    scaffold_project(project.path());
    fs::remove_file(project.path().join("homepage.html"))?;
    fake_python(bin.path(), "3.11.4", ALL_MODULES, CONNECT_REFUSED);

    let first = verify_cmd(project.path(), bin.path()).output()?;
    let second = verify_cmd(project.path(), bin.path()).output()?;
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(second.status.code(), Some(0));
    Ok(())
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("garage-verify"));
    cmd.arg("--help");
    cmd.assert().success().stdout(predicate::str::contains(
        "Installation verification for the Royal Enfield Service Management System",
    ));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("garage-verify"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}
