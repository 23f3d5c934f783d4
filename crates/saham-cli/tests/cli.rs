//! End-to-end tests for the saham binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn write_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    file.write_all(content.as_bytes()).expect("write");
    file
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("saham")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("screen"))
        .stdout(predicate::str::contains("brokers"))
        .stdout(predicate::str::contains("accumulate"));
}

#[test]
fn brokers_ranks_by_total_value() {
    let csv = write_file(
        ".csv",
        "Kode,Nama,Total Buy,Total Sell,Total Value\n\
         AK,UBS Sekuritas,100,200,500\n\
         BB,Verdhana,300,100,900\n\
         CS,Credit Suisse,50,20,100\n",
    );

    Command::cargo_bin("saham")
        .expect("binary")
        .arg("brokers")
        .arg("--trx")
        .arg(csv.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Verdhana"))
        .stdout(predicate::str::contains("3 rows"));
}

#[test]
fn brokers_query_narrows_results() {
    let csv = write_file(
        ".csv",
        "Kode,Nama,Total Buy,Total Sell,Total Value\n\
         AK,UBS Sekuritas,100,200,500\n\
         BB,Verdhana,300,100,900\n",
    );

    Command::cargo_bin("saham")
        .expect("binary")
        .arg("brokers")
        .arg("--trx")
        .arg(csv.path())
        .arg("--query")
        .arg("ubs")
        .assert()
        .success()
        .stdout(predicate::str::contains("UBS Sekuritas"))
        .stdout(predicate::str::contains("Verdhana").not());
}

#[test]
fn brokers_without_sources_fails() {
    Command::cargo_bin("saham")
        .expect("binary")
        .arg("brokers")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--trx"));
}

#[test]
fn accumulate_reads_csv_exports() {
    let csv = write_file(
        ".csv",
        "Net Buy,,,,Net Sell,,\n\
         Broker,Volume,Value,,Broker,Volume,Value\n\
         AK,100,500,,YP,80,-400\n\
         BB,200,900,,PD,60,-300\n",
    );

    Command::cargo_bin("saham")
        .expect("binary")
        .arg("accumulate")
        .arg(csv.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Net Buy"))
        .stdout(predicate::str::contains("BB"))
        .stdout(predicate::str::contains("Bandar Asing"));
}

#[test]
fn screen_reports_load_failure() {
    Command::cargo_bin("saham")
        .expect("binary")
        .arg("screen")
        .arg("definitely-missing.xlsx")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SAHAM-002"));
}
