use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pocket_ledger_cli").unwrap();
    cmd.env("POCKET_LEDGER_CLI_SCRIPT", "1")
        .env("POCKET_LEDGER_HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_records_and_saves() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("1\nRp 100.000\nallowance\n2\n25.000\nsnacks\n3\n0\ny\n")
        .assert()
        .success()
        .stdout(contains("Income of Rp 100,000.00 recorded"))
        .stdout(contains("Current balance: Rp 75,000.00"))
        .stdout(contains("Goodbye!"))
        .stdout(contains(", built "));

    let json = std::fs::read_to_string(home.path().join("saldo.json")).unwrap();
    assert!(json.contains("\"saldo\": 75000.0"));
    assert!(json.contains("\"Snacks\""));
    assert!(home.path().join("config.json").exists());
}

#[test]
fn script_mode_reports_errors_and_keeps_going() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("2\n5.000\n42\n9\nnope\n")
        .assert()
        .success()
        .stdout(contains("Insufficient balance"))
        .stdout(contains("Invalid choice"))
        .stdout(contains("Nothing was deleted."));
}

#[test]
fn export_writes_csv_into_data_dir() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("1\n2.500\ncoins\n11\n")
        .assert()
        .success()
        .stdout(contains("Exported 1 transaction(s)"));

    let csv = std::fs::read_to_string(home.path().join("transactions.csv")).unwrap();
    assert!(csv.starts_with("no,type,amount,note,time"));
    assert!(csv.contains("1,pemasukan,2500"));
}

fn snapshot(home: &TempDir) -> String {
    std::fs::read_to_string(home.path().join("saldo.json")).unwrap()
}

#[test]
fn typing_delete_clears_and_saves() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("1\n1000\nx\n9\nDELETE\n")
        .assert()
        .success()
        .stdout(contains("All data cleared."));

    let json = snapshot(&home);
    assert!(json.contains("\"saldo\": 0.0"), "{json}");
    assert!(json.contains("\"transactions\": []"), "{json}");
}

#[test]
fn edit_keeps_blank_fields_and_rejects_bad_numbers() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("1\n10.000\nallowance\n7\n1\n\nweekly allowance\n7\nabc\n")
        .assert()
        .success()
        .stdout(contains(
            "Transaction #1 updated: Rp 10,000.00 | Weekly allowance.",
        ))
        .stdout(contains("Invalid input: `abc` is not a transaction number"));

    let json = snapshot(&home);
    assert!(json.contains("\"Weekly allowance\""));
    assert!(json.contains("\"saldo\": 10000.0"));
}

#[test]
fn delete_asks_before_removing() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("1\n5.000\ncoins\n1\n2.000\ngift\n8\n1\nn\n8\n1\ny\n")
        .assert()
        .success()
        .stdout(contains("Delete cancelled."))
        .stdout(contains("Transaction #1 deleted."));

    let json = snapshot(&home);
    assert!(json.contains("\"saldo\": 2000.0"), "{json}");
    assert!(json.contains("\"Gift\""));
    assert!(!json.contains("\"Coins\""));
}

#[test]
fn shrinking_income_warns_about_negative_balance() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("1\n10.000\nallowance\n2\n8.000\ntoy\n7\n1\n5.000\n\n")
        .assert()
        .success()
        .stdout(contains("Balance now: Rp -3,000.00"))
        .stdout(contains("Balance is below zero"));
}
