use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A two-period statement as windows-1252 bytes (0x80 is the euro sign).
const STATEMENT: &[u8] = b"Mieterkonto\n\
Sollstellung 03.2024\n\
Miete 1.206,00 \x80\n\
Periodensumme 1.206,00 \x80 1.206,00 \x80\n\
laufender Saldo 0,00 \x80\n\
Sollstellung\n\
04.2024\n\
Periodensumme 1.206,00 \x80 1.000,00 \x80\n\
laufender Saldo -206,00 \x80 laufender Saldo -206,00 \x80\n";

fn write_statement(dir: &Path, name: &str, data: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, data).unwrap();
    path
}

fn saldo() -> Command {
    Command::cargo_bin("saldo").unwrap()
}

#[test]
fn extract_prints_report() {
    let dir = TempDir::new().unwrap();
    let input = write_statement(dir.path(), "konto.txt", STATEMENT);

    saldo()
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(
            "Extracted 2 periods\n\
             \n\
             Period,Expected (EUR),Paid (EUR),Total Credit (EUR)\n\
             03.2024,1206.00,1206.00,0.00\n\
             04.2024,1206.00,1000.00,-206.00\n",
        );
}

#[test]
fn extract_respects_window_flag() {
    let dir = TempDir::new().unwrap();
    let input = write_statement(dir.path(), "konto.txt", STATEMENT);

    saldo()
        .args(["extract", "--window", "3"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Extracted 1 periods\n"))
        .stdout(predicate::str::contains("04.2024,1206.00,1000.00,-206.00"))
        .stdout(predicate::str::contains("03.2024").not());
}

#[test]
fn extract_utf8_text_with_encoding_flag() {
    let dir = TempDir::new().unwrap();
    let text = "Sollstellung 03.2024\nPeriodensumme 10,00 € 5,00 €\nlaufender Saldo -5,00 €\n";
    let input = write_statement(dir.path(), "konto.txt", text.as_bytes());

    saldo()
        .args(["extract", "--encoding", "utf-8", "--format", "csv"])
        .arg(&input)
        .assert()
        .success()
        .stdout("Period,Expected (EUR),Paid (EUR),Total Credit (EUR)\n03.2024,10.00,5.00,-5.00\n");
}

#[test]
fn extract_writes_json_file() {
    let dir = TempDir::new().unwrap();
    let input = write_statement(dir.path(), "konto.txt", STATEMENT);
    let output = dir.path().join("out.json");

    saldo()
        .args(["extract", "--format", "json", "--output"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[1]["period"], "04.2024");
    assert_eq!(json[1]["anchor_line"], 6);
}

#[test]
fn extract_missing_file_fails() {
    saldo()
        .args(["extract", "/nonexistent/konto.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read /nonexistent/konto.txt"));
}

#[test]
fn extract_rejects_zero_window() {
    let dir = TempDir::new().unwrap();
    let input = write_statement(dir.path(), "konto.txt", STATEMENT);

    saldo()
        .args(["extract", "--window", "0"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("window_size"));
}

#[test]
fn batch_writes_summary() {
    let dir = TempDir::new().unwrap();
    write_statement(dir.path(), "a.txt", STATEMENT);
    write_statement(dir.path(), "b.txt", b"nothing to see here\n");
    let summary = dir.path().join("summary.csv");
    let pattern = dir.path().join("*.txt");

    saldo()
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("--summary")
        .arg(&summary)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2 files (0 failed), 2 periods"));

    let content = fs::read_to_string(&summary).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "File,Period,Expected (EUR),Paid (EUR),Total Credit (EUR)");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].ends_with("a.txt,03.2024,1206.00,1206.00,0.00"));
}

#[test]
fn extract_rounds_long_decimals_and_unsigns_zero() {
    let dir = TempDir::new().unwrap();
    let input = write_statement(
        dir.path(),
        "konto.txt",
        b"Sollstellung 05.2024\nPeriodensumme 0,129 \x80 1,005 \x80\nlaufender Saldo -0,00 \x80\n",
    );

    saldo()
        .args(["extract", "--format", "csv"])
        .arg(&input)
        .assert()
        .success()
        .stdout("Period,Expected (EUR),Paid (EUR),Total Credit (EUR)\n05.2024,0.13,1.01,0.00\n");
}

#[test]
fn extract_show_warnings_reports_anchor_line() {
    let dir = TempDir::new().unwrap();
    let input = write_statement(dir.path(), "konto.txt", STATEMENT);

    saldo()
        .args(["extract", "--window", "3", "--show-warnings"])
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "period 03.2024 at anchor_line 1: no balance within 3 lines",
        ));
}

#[test]
fn extract_verbose_logs_scan_time() {
    let dir = TempDir::new().unwrap();
    let input = write_statement(dir.path(), "konto.txt", STATEMENT);

    saldo()
        .args(["-v", "extract"])
        .arg(&input)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 2 periods (2 anchors) in"));
}

#[test]
fn config_commands_honor_config_flag() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("saldo.json");

    saldo()
        .arg("-c")
        .arg(&config)
        .args(["config", "set", "scan.window_size", "12"])
        .assert()
        .success();
    assert!(config.exists());

    saldo()
        .arg("-c")
        .arg(&config)
        .args(["config", "get", "scan.window_size"])
        .assert()
        .success()
        .stdout("12\n");

    saldo()
        .arg("-c")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"window_size\": 12"));

    saldo()
        .arg("-c")
        .arg(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(config.to_str().unwrap()));
}
