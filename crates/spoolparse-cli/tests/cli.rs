use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const INVOICE: &str = "Order #1042\n\
PLA Basic SKU: A00-K0-1.75-1000-SPL Variant: Black (10101) €21.84 €11.58 €0.00 €10.26\n\
PETG HF SKU: G02-W0-1.75-1000-\nSPLFREE €14.99 €0.00 €14.99 Variant: Blanco hueso (33102)\n\
Build Plate SKU: FAB002 €35.00\n";

fn spoolparse() -> Command {
    Command::cargo_bin("spoolparse").unwrap()
}

#[test]
fn formats_lists_vendor() {
    spoolparse()
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bambu Lab"))
        .stdout(predicate::str::contains("store.bambulab.com"));
}

#[test]
fn parse_text_file_as_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("invoice.txt");
    fs::write(&input, INVOICE).unwrap();

    let output = spoolparse().arg("parse").arg(&input).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["success"], true);
    assert_eq!(report["message"], "Found 2 filament(s)");

    let filaments = report["filaments"].as_array().unwrap();
    assert_eq!(filaments[0]["article_number"], "A00-K0-1.75-1000");
    assert_eq!(filaments[0]["price"], 10.26);
    assert_eq!(filaments[1]["sku"], "G02-W0-1.75-1000-SPLFREE");
    assert_eq!(filaments[1]["color"], "Blanco hueso");
}

#[test]
fn parse_stdin_as_csv() {
    spoolparse()
        .args(["parse", "-", "--format", "csv"])
        .write_stdin(INVOICE)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A00-K0-1.75-1000-SPL,A00-K0-1.75-1000,PLA BASIC,Black,10101,10.26,1000",
        ));
}

#[test]
fn verbose_flag_after_subcommand() {
    spoolparse()
        .args(["parse", "-", "--format", "csv", "-vv"])
        .write_stdin(INVOICE)
        .assert()
        .success()
        .stdout(predicate::str::contains("G02-W0-1.75-1000-SPLFREE"));
}

#[test]
fn parse_rejects_short_text() {
    spoolparse()
        .args(["parse", "-"])
        .write_stdin("PLA")
        .assert()
        .failure()
        .stderr(predicate::str::contains("too short"));
}

#[test]
fn parse_without_items_is_not_an_error() {
    spoolparse()
        .args(["parse", "-", "--format", "text"])
        .write_stdin("Thank you for your order, it ships tomorrow.")
        .assert()
        .success()
        .stdout(predicate::str::contains("No filaments found"));
}

#[test]
fn parse_rejects_tiny_pdf() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("invoice.pdf");
    fs::write(&input, b"%PDF-1.7").unwrap();

    spoolparse()
        .arg("parse")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("too small"));
}

#[test]
fn batch_writes_summary() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), INVOICE).unwrap();
    fs::write(dir.path().join("b.txt"), "No filament in this one, sorry.").unwrap();
    let out = dir.path().join("out");

    let pattern = format!("{}/*.txt", dir.path().display());
    spoolparse()
        .args(["batch", &pattern, "--summary", "--output-dir"])
        .arg(&out)
        .assert()
        .success();

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert_eq!(summary.lines().count(), 4);
    assert!(summary.contains("a.txt,success,A00-K0-1.75-1000-SPL"));
    assert!(summary.contains("b.txt,empty"));
    assert!(out.join("a.json").exists());
}
