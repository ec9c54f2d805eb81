use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "budgie";

fn budgie(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("BUDGIE_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn category_list_shows_defaults() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(contains("Federal Taxes").and(contains("Gear Budget")).and(contains("22.0%")));
}

#[test]
fn paycheck_set_persists() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .args(["paycheck", "set", "2000"])
        .assert()
        .success()
        .stdout(contains("Paycheck:     $2,000.00"));

    budgie(&dir)
        .arg("paycheck")
        .assert()
        .success()
        .stdout(contains("Allocated:    100.0%  $2,000.00"));
}

#[test]
fn set_beyond_free_share_is_capped() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .args(["category", "set", "rent", "60"])
        .assert()
        .success()
        .stdout(contains("Note: Rent capped at 25.0% (asked for 60.0%)"));
}

#[test]
fn add_that_does_not_fit_fails() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .args(["category", "add", "Boat", "150"])
        .assert()
        .failure()
        .stderr(contains("Category not added"));

    budgie(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(contains("Boat").not());
}

#[test]
fn delete_then_undo_restores() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .args(["category", "delete", "Misc"])
        .assert()
        .success()
        .stdout(contains("Deleted category: Misc"));

    budgie(&dir).arg("undo").assert().success().stdout(contains("Undone"));

    budgie(&dir)
        .args(["category", "show", "misc"])
        .assert()
        .success()
        .stdout(contains("Misc"));

    budgie(&dir).arg("redo").assert().success().stdout(contains("Redone"));
    budgie(&dir).arg("redo").assert().success().stdout(contains("Nothing to redo"));
}

#[test]
fn unknown_category_is_reported() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .args(["category", "show", "Yacht"])
        .assert()
        .failure()
        .stderr(contains("Category not found: Yacht"));
}

#[test]
fn export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    budgie(&dir).args(["paycheck", "set", "1000"]).assert().success();

    budgie(&dir)
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(
            contains("Category,Lock,Percentage,Amount")
                .and(contains("Rent,,25.0,250.00"))
                .and(contains("Unallocated,,0.0,0.00")),
        );
}

#[test]
fn export_text_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.txt");

    budgie(&dir)
        .args(["export", "text", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Exported to:"));

    let report = std::fs::read_to_string(&out).unwrap();
    assert!(report.starts_with("Budgie allocation"));
    assert!(report.contains("Paycheck: --"));
}

#[test]
fn audit_lists_changes() {
    let dir = TempDir::new().unwrap();
    budgie(&dir).args(["paycheck", "set", "1500"]).assert().success();
    budgie(&dir).args(["category", "lock-pct", "Rent"]).assert().success();

    budgie(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(contains("UPDATE Paycheck").and(contains("UPDATE Category")));
}

#[test]
fn config_prints_paths() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Budgie Configuration").and(contains("Currency symbol:  $")));
}

#[test]
fn distribute_ignores_locks() {
    let dir = TempDir::new().unwrap();
    budgie(&dir).args(["category", "lock-pct", "Rent"]).assert().success();

    budgie(&dir)
        .arg("distribute")
        .assert()
        .success()
        .stdout(contains("Distributed evenly across 9 categories"));

    budgie(&dir)
        .args(["category", "show", "rent"])
        .assert()
        .success()
        .stdout(contains("Share:   11.1%"));
}

#[test]
fn distribute_help_describes_lock_override() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .args(["distribute", "--help"])
        .assert()
        .success()
        .stdout(contains("Give every active category an equal share, ignoring locks"));
}
