use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "splitledger";

fn ledger_command(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("SPLITLEDGER_DATA_DIR", base);
    cmd.env("SPLITLEDGER_LOG", "off");
    cmd
}

fn initialized() -> TempDir {
    let dir = TempDir::new().unwrap();
    ledger_command(dir.path())
        .args(["init", "--email", "me@example.com"])
        .assert()
        .success()
        .stdout(contains("Initialization complete!"));
    dir
}

#[test]
fn cli_without_init_reports_missing_owner() {
    let dir = TempDir::new().unwrap();
    ledger_command(dir.path())
        .args(["expense", "add", "Lunch", "12.00"])
        .assert()
        .failure()
        .stderr(contains("splitledger init"));
}

#[test]
fn cli_init_requires_email_on_first_run() {
    let dir = TempDir::new().unwrap();
    ledger_command(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("email is required"));
}

#[test]
fn cli_init_keeps_existing_owner() {
    let dir = initialized();
    ledger_command(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("me@example.com"));
}

#[test]
fn cli_config_prints_paths() {
    let dir = initialized();
    ledger_command(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Data directory:").and(contains("me@example.com")));
}

#[test]
fn cli_add_entries_and_report_categories() {
    let dir = initialized();

    ledger_command(dir.path())
        .args(["category", "add", "Food"])
        .assert()
        .success()
        .stdout(contains("Created category: Food"));

    ledger_command(dir.path())
        .args([
            "expense", "add", "Groceries", "15.50", "--category", "Food", "--date", "2026-03-10",
        ])
        .assert()
        .success()
        .stdout(contains("Transaction added"));

    ledger_command(dir.path())
        .args(["income", "add", "Salary", "1000", "--date", "2026-03-01"])
        .assert()
        .success()
        .stdout(contains("Transaction added"));

    ledger_command(dir.path())
        .args([
            "shared",
            "add",
            "Dinner",
            "40",
            "--with",
            "friend@example.com, me@example.com",
            "--category",
            "Food",
            "--date",
            "2026-03-12",
        ])
        .assert()
        .success()
        .stdout(contains("Transaction added").and(contains("$20.00")));

    ledger_command(dir.path())
        .args(["report", "categories", "--month", "2026-03"])
        .assert()
        .success()
        .stdout(contains("Food").and(contains("$35.50")));

    ledger_command(dir.path())
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(contains("Groceries").and(contains("Salary")).and(contains("Dinner")));
}

#[test]
fn cli_shared_requires_participants() {
    let dir = initialized();
    ledger_command(dir.path())
        .args(["shared", "add", "Solo", "30", "--with", "me@example.com"])
        .assert()
        .failure();
}

#[test]
fn cli_monthly_report_bounds_month_count() {
    let dir = initialized();
    ledger_command(dir.path())
        .args(["report", "monthly", "--months", "12"])
        .assert()
        .success();

    ledger_command(dir.path())
        .args(["report", "monthly", "--months", "4000000000"])
        .assert()
        .failure();
}

#[test]
fn cli_unknown_category_is_rejected() {
    let dir = initialized();
    ledger_command(dir.path())
        .args(["expense", "add", "Taxi", "9", "--category", "Travel"])
        .assert()
        .failure()
        .stderr(contains("Travel"));
}

#[test]
fn cli_export_csv_writes_one_file_per_sheet() {
    let dir = initialized();
    ledger_command(dir.path())
        .args(["expense", "add", "Coffee", "3.20", "--date", "2026-02-02"])
        .assert()
        .success();

    let out = dir.path().join("report");
    ledger_command(dir.path())
        .args(["export", "--format", "csv", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Report written to"));

    assert!(out.join("transactions.csv").exists());
    // No shared entries, so no shared sheet
    assert!(!out.join("shared-expenses.csv").exists());
    let summary = std::fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.contains("Total Expenses"));
}

#[test]
fn cli_export_xlsx_into_directory_uses_dated_name() {
    let dir = initialized();
    let out = dir.path().join("exports-here");
    std::fs::create_dir_all(&out).unwrap();

    ledger_command(dir.path())
        .args(["export", "--output"])
        .arg(&out)
        .assert()
        .success();

    let written: Vec<String> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(written.len(), 1);
    assert!(written[0].starts_with("financial-report-"));
    assert!(written[0].ends_with(".xlsx"));
}
