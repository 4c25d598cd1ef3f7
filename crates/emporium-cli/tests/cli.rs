//! Integration tests for the `emporium` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const QUOTES: &str = "\
symbol,mark_back,mark_front,strike,underlying,ask_front,bid_front,ask_back,bid_back
SPY,100,50,120,100,55,45,105,95
QQQ,200,150,180,175,160,140,210,190
";

fn quotes_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("quotes.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn emporium() -> Command {
    let mut cmd = Command::cargo_bin("emporium").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("EMPORIUM_CONFIG");
    cmd
}

#[test]
fn screen_prints_csv() {
    let dir = TempDir::new().unwrap();
    let input = quotes_file(&dir, QUOTES);

    emporium()
        .args(["--format", "csv", "screen", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("spreadPct_cal"))
        .stdout(predicate::str::contains("undPricePctDiff"))
        .stdout(predicate::str::contains("SPY,100,50,120,100,55,45,105,95"));
}

#[test]
fn screen_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = quotes_file(&dir, QUOTES);
    let output = dir.path().join("screened.csv");

    emporium()
        .args(["-q", "screen", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    let header = written.lines().next().unwrap();
    assert!(header.starts_with("symbol,mark_back"));
    assert!(header.ends_with("calCost,calCostPct,calGapPct,undPricePctDiff"));
    assert_eq!(written.lines().count(), 3);
}

#[test]
fn spreads_front_leg_json() {
    let dir = TempDir::new().unwrap();
    let input = quotes_file(&dir, QUOTES);

    emporium()
        .args(["--format", "json", "spreads", "--leg", "front", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"spreadPct_front\": 0.2"))
        .stdout(predicate::str::contains("spread_back").not());
}

#[test]
fn unknown_leg_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = quotes_file(&dir, QUOTES);

    emporium()
        .args(["spreads", "--leg", "sideways", "--input"])
        .arg(&input)
        .assert()
        .failure();
}

#[test]
fn missing_columns_fail() {
    let dir = TempDir::new().unwrap();
    let input = quotes_file(&dir, "mark_back,mark_front\n100,50\n");

    emporium()
        .args(["calendar", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing column: 'strike'"));
}

#[test]
fn strike_relative_from_config_file() {
    let dir = TempDir::new().unwrap();
    let input = quotes_file(
        &dir,
        "mark_back,mark_front,strike_relative,underlying\n100,50,110,100\n",
    );
    let config = dir.path().join("emporium.toml");
    fs::write(
        &config,
        "format = \"csv\"\n[calendar]\nstrike_column = \"strike_relative\"\n",
    )
    .unwrap();

    emporium()
        .arg("--config")
        .arg(&config)
        .args(["calendar", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("100,50,110,100,50,1,0.1,-0.09091"));
}

#[test]
fn columns_lists_types() {
    let dir = TempDir::new().unwrap();
    let input = quotes_file(&dir, QUOTES);

    emporium()
        .args(["--format", "csv", "columns", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("symbol,text,2,0"))
        .stdout(predicate::str::contains("strike,float64,2,0"));
}
