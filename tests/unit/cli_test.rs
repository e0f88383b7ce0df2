//! Integration tests for the markflow CLI

use assert_cmd::cargo;
use markflow::config::Config;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

use crate::common::TestDocket;

/// A markflow command isolated from the user's config and terminal colors
fn markflow(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("markflow"));
    cmd.env("MARKFLOW_CONFIG", home.path().join("config.toml")).env("NO_COLOR", "1");
    cmd
}

fn json_output(cmd: &mut assert_cmd::Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// GENERAL
// =============================================================================

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    markflow(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("markflow"));
}

#[test]
fn test_version_command() {
    let home = TempDir::new().unwrap();
    markflow(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("markflow v"));
}

#[test]
fn test_no_args_shows_info() {
    let home = TempDir::new().unwrap();
    markflow(&home).assert().success().stdout(predicate::str::contains("--help"));
}

// =============================================================================
// CALCULATORS
// =============================================================================

#[test]
fn test_office_action_human() {
    let home = TempDir::new().unwrap();
    markflow(&home)
        .args(["--as-of", "2023-01-10", "office-action", "--issued", "2023-01-10", "--basis", "1(b)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Apr 10, 2023"))
        .stdout(predicate::str::contains("3-month rule"));
}

#[test]
fn test_office_action_json() {
    let home = TempDir::new().unwrap();
    let value = json_output(markflow(&home).args([
        "--json",
        "--as-of",
        "2023-01-10",
        "office-action",
        "--issued",
        "2023-01-10",
        "--basis",
        "66(a)",
    ]));

    assert_eq!(value["deadline"], "2023-07-10");
    assert_eq!(value["is_madrid"], true);
    assert_eq!(value["is_extendable"], false);
    assert_eq!(value["days_remaining"], 181);
}

#[test]
fn test_office_action_rejects_bad_date() {
    let home = TempDir::new().unwrap();
    markflow(&home)
        .args(["office-action", "--issued", "2023-02-30", "--basis", "1(a)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn test_office_action_rejects_unknown_basis() {
    let home = TempDir::new().unwrap();
    markflow(&home)
        .args(["office-action", "--issued", "2023-01-10", "--basis", "2(f)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown filing basis"));
}

#[test]
fn test_statement_of_use_json() {
    let home = TempDir::new().unwrap();
    let value = json_output(markflow(&home).args([
        "--json",
        "--as-of",
        "2023-01-01",
        "statement-of-use",
        "--noa",
        "2023-01-01",
        "--extensions",
        "2",
    ]));

    assert_eq!(value["deadline"], "2024-07-01");
    assert_eq!(value["extensions_remaining"], 3);
    assert_eq!(value["max_deadline"], "2026-01-02");
}

#[test]
fn test_opposition_negative_extension() {
    let home = TempDir::new().unwrap();
    let value = json_output(markflow(&home).args([
        "--json",
        "--as-of",
        "2023-01-10",
        "opposition",
        "--published",
        "2023-01-10",
        "--extension-days",
        "-10",
    ]));

    assert_eq!(value["deadline"], "2023-02-09");
    assert_eq!(value["extension_days"], 0);
}

#[test]
fn test_maintenance_human() {
    let home = TempDir::new().unwrap();
    markflow(&home)
        .args(["maintenance", "--registered", "2020-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jan 15, 2025 - Jan 15, 2026"))
        .stdout(predicate::str::contains("Jan 15, 2030"));
}

#[test]
fn test_urgency() {
    let home = TempDir::new().unwrap();
    markflow(&home)
        .args(["urgency", "--days", "8"])
        .assert()
        .success()
        .stdout(predicate::str::diff("warning\n"));

    markflow(&home)
        .args(["urgency", "--days", "-3"])
        .assert()
        .success()
        .stdout(predicate::str::diff("urgent\n"));

    markflow(&home)
        .args(["urgency", "--days", "2", "--status", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::diff("completed\n"));
}

#[test]
fn test_urgency_uses_configured_thresholds() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.toml"), "[urgency]\nurgent_within_days = 10\n").unwrap();

    markflow(&home)
        .args(["urgency", "--days", "8"])
        .assert()
        .success()
        .stdout(predicate::str::diff("urgent\n"));
}

// =============================================================================
// CALENDAR
// =============================================================================

#[test]
fn test_holidays_json() {
    let home = TempDir::new().unwrap();
    let value = json_output(markflow(&home).args(["--json", "holidays", "--year", "2026"]));

    let holidays = value["holidays"].as_array().unwrap();
    assert_eq!(holidays.len(), 11);
    assert!(holidays.iter().any(|h| h["date"] == "2026-07-03" && h["holiday"] == "independence_day"));
}

#[test]
fn test_business_day_on_holiday() {
    let home = TempDir::new().unwrap();
    markflow(&home)
        .args(["business-day", "2023-07-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("federal holiday"))
        .stdout(predicate::str::contains("Next business day: 2023-07-05"));
}

#[test]
fn test_status_lookup() {
    let home = TempDir::new().unwrap();
    markflow(&home)
        .args(["status", "610"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final Action Issued"))
        .stdout(predicate::str::contains("Office action response pending"));
}

// =============================================================================
// DOCKET
// =============================================================================

#[test]
fn test_docket_single_matter() {
    let home = TempDir::new().unwrap();
    let docket = TestDocket::new();
    markflow(&home)
        .args(["--as-of", "2023-04-05", "docket", "M-2", "--docket"])
        .arg(docket.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ROADRUNNER"))
        .stdout(predicate::str::contains("Basis: 1(b) - Bona fide intent to use"))
        .stdout(predicate::str::contains("Apr 10, 2023 (5 days)"));
}

#[test]
fn test_docket_all_matters_json() {
    let home = TempDir::new().unwrap();
    let docket = TestDocket::new();
    let value = json_output(
        markflow(&home)
            .args(["--json", "--as-of", "2023-03-20", "docket", "--docket"])
            .arg(docket.path()),
    );

    let matters = value["matters"].as_array().unwrap();
    assert_eq!(matters.len(), 4);
    assert_eq!(matters[1]["office_action"]["outcome"], "computed");
    assert_eq!(matters[1]["office_action"]["value"]["deadline"], "2023-04-10");
    assert_eq!(matters[3]["statement_of_use"]["value"]["deadline"], "2024-07-01");
}

#[test]
fn test_docket_unknown_matter() {
    let home = TempDir::new().unwrap();
    let docket = TestDocket::new();
    markflow(&home)
        .args(["docket", "M-9", "--docket"])
        .arg(docket.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no matter 'M-9'"));
}

#[test]
fn test_docket_missing_file() {
    let home = TempDir::new().unwrap();
    markflow(&home)
        .args(["docket", "--docket"])
        .arg(home.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load docket"));
}

#[test]
fn test_summary_json() {
    let home = TempDir::new().unwrap();
    let docket = TestDocket::new();
    let value = json_output(
        markflow(&home)
            .args(["--json", "--as-of", "2023-03-20", "summary", "--docket"])
            .arg(docket.path()),
    );

    assert_eq!(value["total_matters"], 4);
    assert_eq!(value["registered_marks"], 1);
    assert_eq!(value["pending_applications"], 1);
    assert_eq!(value["urgent_deadlines"], 2);
    assert_eq!(value["urgent"][0]["matter_id"], "M-4");
}

#[test]
fn test_summary_uses_default_docket_in_cwd() {
    let home = TempDir::new().unwrap();
    let docket = TestDocket::new();
    markflow(&home)
        .args(["--as-of", "2023-03-20", "summary"])
        .current_dir(docket.dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Urgent deadlines:     2"));
}

// =============================================================================
// INIT
// =============================================================================

#[test]
fn test_init_writes_default_config() {
    let home = TempDir::new().unwrap();
    markflow(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let written = home.path().join("config.toml");
    assert_eq!(Config::load_from(&written), Config::default());
}

#[test]
fn test_init_keeps_existing_config() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.toml");
    std::fs::write(&path, "[urgency]\nurgent_within_days = 10\n").unwrap();

    markflow(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
    assert!(std::fs::read_to_string(&path).unwrap().contains("urgent_within_days = 10"));
}

#[test]
fn test_init_force_overwrites() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.toml");
    std::fs::write(&path, "[urgency]\nurgent_within_days = 10\n").unwrap();

    markflow(&home).args(["init", "--force"]).assert().success();
    assert_eq!(Config::load_from(&path), Config::default());
}
